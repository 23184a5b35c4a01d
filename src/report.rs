//! Design summary: one serializable bundle of every reported quantity

use serde::Serialize;
use std::fmt;

use crate::analysis::{find_homogeneous_region, sample_axial};
use crate::assembly::CoilAssembly;
use crate::circuit;
use crate::error::DesignResult;
use crate::field::FieldEngine;
use crate::winding::{Winding, WindingExit};
use crate::wire::LitzWire;
use crate::DesignConfig;

/// Everything the design report prints. `Display` renders the report text,
/// serde renders the JSON summary; both read the same values.
#[derive(Debug, Clone, Serialize)]
pub struct DesignSummary {
    // mechanics
    pub radius_mm: f64,
    pub inner_radius_mm: f64,
    pub layers: u32,
    pub wires_per_layer: u32,
    pub turn_count: u32,
    pub wiring_width_mm: f64,
    pub wiring_height_mm: f64,
    pub packed_width_mm: f64,
    pub packed_height_mm: f64,
    pub winding_exit: WindingExit,
    pub wire_length_m: f64,
    pub wire_mass_kg: f64,
    pub strand_diameter_mm: f64,
    pub strand_count: u32,
    pub physical_diameter_mm: f64,
    // circuit
    pub dc_resistance_ohm: f64,
    pub ac_resistance_1khz_ohm: f64,
    pub inductance_mh: f64,
    pub current_a: f64,
    // magnetics
    pub center_field_mt: f64,
    pub sampled_center_field_mt: f64,
    pub tolerance: f64,
    pub homogeneous_width_mm: f64,
    pub homogeneous_convex: bool,
}

impl DesignSummary {
    /// Characterize a coil pair: build the geometry, compute the circuit
    /// quantities, sample the axial field and measure its uniform region.
    pub fn generate<E: FieldEngine>(
        wire: &LitzWire,
        winding: &Winding,
        engine: &E,
        config: &DesignConfig,
    ) -> DesignResult<Self> {
        let assembly = CoilAssembly::build(wire, winding, config)?;
        let profile = sample_axial(engine, &assembly, config.axis, config.grid_points)?;
        let region = find_homogeneous_region(&profile, config.tolerance)?;

        let height = winding.wiring_height(wire);
        Ok(Self {
            radius_mm: winding.radius,
            inner_radius_mm: winding.radius - height / 2.0,
            layers: winding.layers,
            wires_per_layer: winding.wires_per_layer,
            turn_count: winding.turn_count(),
            wiring_width_mm: winding.wiring_width(wire),
            wiring_height_mm: height,
            packed_width_mm: winding.wiring_width(wire) + wire.d_outer / 2.0,
            packed_height_mm: winding.wiring_height_packed(wire),
            winding_exit: winding.exit_side(),
            wire_length_m: circuit::wire_length_m(winding),
            wire_mass_kg: circuit::wire_mass_kg(wire, winding),
            strand_diameter_mm: wire.d_strand,
            strand_count: wire.strands,
            physical_diameter_mm: circuit::physical_diameter_mm(wire, winding, 3.0),
            dc_resistance_ohm: circuit::dc_resistance_ohm(wire, winding),
            ac_resistance_1khz_ohm: circuit::impedance_ohm(wire, winding, 1000.0),
            inductance_mh: circuit::inductance_h(wire, winding) * 1e3,
            current_a: winding.current,
            center_field_mt: circuit::center_field_mt(winding),
            sampled_center_field_mt: profile.center_value(),
            tolerance: config.tolerance,
            homogeneous_width_mm: region.width_mm,
            homogeneous_convex: region.convex,
        })
    }
}

impl fmt::Display for DesignSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mechanics")?;
        writeln!(
            f,
            "\tRadius: {} (inner {:.2}) mm",
            self.radius_mm, self.inner_radius_mm
        )?;
        writeln!(
            f,
            "\t{} layers (H={:.2}) of {} wires (W={:.2})",
            self.layers, self.wiring_height_mm, self.wires_per_layer, self.wiring_width_mm
        )?;
        writeln!(
            f,
            "\tPacked winding (mm): H={:.2}, W={:.2}",
            self.packed_height_mm, self.packed_width_mm
        )?;
        writeln!(f, "\tWinding enter & exit: {}", self.winding_exit)?;
        writeln!(
            f,
            "\tWire L={:.2} m, M={:.3} kg",
            self.wire_length_m, self.wire_mass_kg
        )?;
        writeln!(
            f,
            "\t     Litz {} mm x {} strands",
            self.strand_diameter_mm, self.strand_count
        )?;
        writeln!(f, "\tPhysical diameter: {:.1} mm", self.physical_diameter_mm)?;
        writeln!(f, "Circuit")?;
        writeln!(f, "\tResistance DC: {:.2} Ohm", self.dc_resistance_ohm)?;
        writeln!(f, "\tResistance 1kHz: {:.2} Ohm", self.ac_resistance_1khz_ohm)?;
        writeln!(f, "\tInductance: {:.2} mH", self.inductance_mh)?;
        writeln!(f, "\tCurrent: {} A", self.current_a)?;
        writeln!(f, "Magnetics")?;
        writeln!(
            f,
            "\tB0 at center: {:.3} mT (sampled {:.3} mT)",
            self.center_field_mt, self.sampled_center_field_mt
        )?;
        write!(
            f,
            "\tHomogeneous region (tol={}): {:.0} mm{}",
            self.tolerance,
            self.homogeneous_width_mm,
            if self.homogeneous_convex {
                ""
            } else {
                " [non-convex]"
            }
        )
    }
}
