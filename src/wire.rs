//! Conductor specifications: litz bundles and plain wires

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{DesignError, DesignResult};

/// A litz wire bundle, or a plain wire when `strands == 1`.
///
/// Dimensions are caller-supplied engineering input; a real bundle roughly
/// satisfies `d_strand * sqrt(strands) <= d_outer`, but that is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LitzWire {
    /// Outer diameter of the insulated bundle (mm)
    pub d_outer: f64,
    /// Diameter of one conductor strand (mm)
    pub d_strand: f64,
    /// Number of strands in the bundle
    pub strands: u32,
}

impl LitzWire {
    pub fn new(d_outer: f64, d_strand: f64, strands: u32) -> DesignResult<Self> {
        let wire = Self {
            d_outer,
            d_strand,
            strands,
        };
        wire.validate()?;
        Ok(wire)
    }

    /// Plain single-strand 1.3 mm wire
    pub fn single() -> Self {
        Self {
            d_outer: 1.3,
            d_strand: 1.0,
            strands: 1,
        }
    }

    /// 75 x 0.1 mm litz bundle
    pub fn litz_75() -> Self {
        Self {
            d_outer: 1.3,
            d_strand: 0.1,
            strands: 75,
        }
    }

    /// 150 x 0.1 mm litz bundle
    pub fn litz_150() -> Self {
        Self {
            d_outer: 1.76,
            d_strand: 0.1,
            strands: 150,
        }
    }

    pub fn validate(&self) -> DesignResult<()> {
        if self.d_outer <= 0.0 {
            return Err(DesignError::InvalidParameter {
                field: "d_outer",
                value: self.d_outer,
                reason: "bundle diameter must be positive",
            });
        }
        if self.d_strand <= 0.0 {
            return Err(DesignError::InvalidParameter {
                field: "d_strand",
                value: self.d_strand,
                reason: "strand diameter must be positive",
            });
        }
        if self.d_strand > self.d_outer {
            return Err(DesignError::InvalidParameter {
                field: "d_strand",
                value: self.d_strand,
                reason: "a strand cannot be thicker than the bundle",
            });
        }
        if self.strands == 0 {
            return Err(DesignError::InvalidParameter {
                field: "strands",
                value: 0.0,
                reason: "a bundle needs at least one strand",
            });
        }
        Ok(())
    }

    /// Copper cross-section of a single strand (mm^2)
    pub fn strand_area_mm2(&self) -> f64 {
        PI * (self.d_strand / 2.0).powi(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for wire in [LitzWire::single(), LitzWire::litz_75(), LitzWire::litz_150()] {
            wire.validate().unwrap();
        }
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        assert!(LitzWire::new(0.0, 0.1, 75).is_err());
        assert!(LitzWire::new(1.3, -0.1, 75).is_err());
        assert!(LitzWire::new(1.3, 0.1, 0).is_err());
        // strand thicker than the bundle it lives in
        assert!(LitzWire::new(1.0, 1.3, 1).is_err());
    }

    #[test]
    fn test_strand_area() {
        let wire = LitzWire::litz_75();
        let expected = PI * 0.05 * 0.05;
        assert!((wire.strand_area_mm2() - expected).abs() < 1e-12);
    }
}
