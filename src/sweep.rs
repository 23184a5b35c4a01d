//! Parallel evaluation of independent design candidates
//!
//! Every case is a stateless evaluation; a failed case is carried in its
//! outcome instead of aborting the batch, and result order matches input
//! order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::field::BiotSavartEngine;
use crate::report::DesignSummary;
use crate::winding::Winding;
use crate::wire::LitzWire;
use crate::DesignConfig;

/// One design candidate in a sweep file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignCase {
    pub name: String,
    pub wire: LitzWire,
    pub winding: Winding,
}

/// Result of one sweep evaluation.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SweepOutcome {
    Ok {
        name: String,
        summary: DesignSummary,
    },
    Failed {
        name: String,
        error: String,
    },
}

/// Evaluate every case independently in parallel.
pub fn run_sweep(cases: &[DesignCase], config: &DesignConfig) -> Vec<SweepOutcome> {
    cases
        .par_iter()
        .map(|case| {
            let engine = BiotSavartEngine {
                loop_segments: config.loop_segments,
            };
            match DesignSummary::generate(&case.wire, &case.winding, &engine, config) {
                Ok(summary) => SweepOutcome::Ok {
                    name: case.name.clone(),
                    summary,
                },
                Err(e) => SweepOutcome::Failed {
                    name: case.name.clone(),
                    error: e.to_string(),
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn cases() -> Vec<DesignCase> {
        vec![
            DesignCase {
                name: "litz75".into(),
                wire: LitzWire::litz_75(),
                winding: Winding::new(130.0, 2.0, 6, 8).unwrap(),
            },
            DesignCase {
                name: "crowded".into(),
                wire: LitzWire::litz_75(),
                // 60 wires per layer cannot fit on a 130 mm coil
                winding: Winding::new(130.0, 2.0, 60, 8).unwrap(),
            },
            DesignCase {
                name: "litz150".into(),
                wire: LitzWire::litz_150(),
                winding: Winding::new(150.0, 1.0, 4, 4).unwrap(),
            },
        ]
    }

    #[test]
    fn test_sweep_preserves_order_and_isolates_failures() {
        let config = DesignConfig {
            grid_points: 41,
            ..DesignConfig::default()
        };
        let outcomes = run_sweep(&cases(), &config);
        assert_eq!(outcomes.len(), 3);
        assert!(matches!(&outcomes[0], SweepOutcome::Ok { name, .. } if name == "litz75"));
        assert!(matches!(&outcomes[1], SweepOutcome::Failed { name, .. } if name == "crowded"));
        assert!(matches!(&outcomes[2], SweepOutcome::Ok { name, .. } if name == "litz150"));
    }

    #[test]
    fn test_case_file_round_trip() {
        // the CLI reads cases from JSON and writes outcomes back as JSON
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cases.json");
        fs::write(&path, serde_json::to_string_pretty(&cases()).unwrap()).unwrap();

        let parsed: Vec<DesignCase> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[1].winding.wires_per_layer, 60);

        let config = DesignConfig {
            grid_points: 41,
            ..DesignConfig::default()
        };
        let outcomes = run_sweep(&parsed, &config);
        let json = serde_json::to_value(&outcomes).unwrap();
        assert_eq!(json[0]["status"], "ok");
        assert_eq!(json[1]["status"], "failed");
        assert!(json[1]["error"]
            .as_str()
            .unwrap()
            .contains("half the coil radius"));
    }
}
