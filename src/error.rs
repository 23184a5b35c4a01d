//! Structured error types for coil design and field analysis

use thiserror::Error;

/// Result type alias for design operations
pub type DesignResult<T> = Result<T, DesignError>;

/// Error taxonomy: configuration errors are fatal for the whole design,
/// `NoHomogeneousRegion` is fatal only for the query that raised it.
#[derive(Error, Debug)]
pub enum DesignError {
    /// An input value is out of its physical range
    #[error("invalid {field}: {value} - {reason}")]
    InvalidParameter {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The winding cross-section cannot physically fit on the coil body
    #[error("winding is {width_mm:.2} mm wide but must stay under half the coil radius ({limit_mm:.2} mm)")]
    WindingTooWide { width_mm: f64, limit_mm: f64 },

    /// No field sample met the requested tolerance; retry with a looser
    /// tolerance or a finer/larger grid
    #[error("no field samples within {tolerance} of the center value")]
    NoHomogeneousRegion { tolerance: f64 },

    /// Plot-script template rendering failed
    #[error("template rendering failed: {0}")]
    Render(#[from] minijinja::Error),
}
