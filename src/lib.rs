//! coil-design: Design and characterize Helmholtz coil pairs
//!
//! This crate provides:
//! - Winding geometry generation (idealized loops or exact spiral paths)
//! - Circuit property estimates (resistance, inductance, mass, envelope)
//! - Field homogeneity analysis over a sampled axial profile
//! - Misalignment tolerance estimates and parallel design sweeps
//! - Python plot-script export for an external plotting layer
//!
//! Field evaluation goes through the [`FieldEngine`] trait; the bundled
//! [`BiotSavartEngine`] discretizes every element into straight segments.
//! Positions are millimeters, currents amperes, field values millitesla.

pub mod analysis;
pub mod assembly;
pub mod circuit;
pub mod codegen;
pub mod error;
pub mod field;
pub mod report;
pub mod sweep;
pub mod tolerance;
pub mod winding;
pub mod wire;

pub use analysis::{
    find_homogeneous_region, sample_axial, sample_plane, Axis, FieldProfile, HomogeneousRegion,
    PlaneProfile,
};
pub use assembly::{CoilAssembly, SourceElement, WindingMode};
pub use codegen::{generate_plot_script, render_field_plots};
pub use error::{DesignError, DesignResult};
pub use field::{BiotSavartEngine, FieldEngine};
pub use report::DesignSummary;
pub use sweep::{run_sweep, DesignCase, SweepOutcome};
pub use tolerance::misalignment_field_error;
pub use winding::{Winding, WindingExit};
pub use wire::LitzWire;

/// Main entry point: characterize a coil pair with the bundled engine
pub fn characterize(
    wire: &LitzWire,
    winding: &Winding,
    config: &DesignConfig,
) -> DesignResult<DesignSummary> {
    let engine = BiotSavartEngine {
        loop_segments: config.loop_segments,
    };
    DesignSummary::generate(wire, winding, &engine, config)
}

/// Configuration for geometry construction and field analysis
#[derive(Debug, Clone)]
pub struct DesignConfig {
    /// Winding geometry mode
    pub mode: WindingMode,
    /// Path points per spiral layer
    pub spiral_segments: usize,
    /// Straight segments per discretized loop in the bundled engine
    pub loop_segments: usize,
    /// Samples along the axial profile
    pub grid_points: usize,
    /// Fractional field tolerance for the homogeneous region
    pub tolerance: f64,
    /// Axis of the axial profile grid
    pub axis: Axis,
    /// Samples per side of the plane slice in the visualization export
    pub plane_points: usize,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            mode: WindingMode::Loops,
            spiral_segments: 1000,
            loop_segments: 64,
            grid_points: 100,
            tolerance: 0.01,
            axis: Axis::Z,
            plane_points: 40,
        }
    }
}
