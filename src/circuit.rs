//! Electrical and mechanical properties of the coil pair
//!
//! Pure formula functions over [`LitzWire`] + [`Winding`]; none of these need
//! field evaluation.

use std::f64::consts::PI;

use crate::field::MU0;
use crate::winding::Winding;
use crate::wire::LitzWire;

/// Copper density (kg/m^3)
const COPPER_DENSITY: f64 = 8960.0;
/// Copper resistivity (Ohm mm^2 / m)
const COPPER_RESISTIVITY: f64 = 0.0172;

/// Total conductor length across both coils plus a connector allowance of
/// one radius per cable (m).
pub fn wire_length_m(winding: &Winding) -> f64 {
    let length_mm = 2.0 * PI * winding.radius * winding.turn_count() as f64 * 2.0
        + 2.0 * winding.radius;
    length_mm / 1e3
}

/// Copper mass of the full winding (kg)
pub fn wire_mass_kg(wire: &LitzWire, winding: &Winding) -> f64 {
    let strand_area_m2 = PI * (wire.d_strand * 0.5e-3).powi(2);
    let volume = strand_area_m2 * wire_length_m(winding) * wire.strands as f64;
    COPPER_DENSITY * volume
}

/// DC resistance of the bundle, strands in parallel (Ohm)
pub fn dc_resistance_ohm(wire: &LitzWire, winding: &Winding) -> f64 {
    let single_strand = COPPER_RESISTIVITY * wire_length_m(winding) / wire.strand_area_mm2();
    single_strand / wire.strands as f64
}

/// Self-inductance of the two coils in series via the modified Wheeler
/// formula for multi-layer coils (H).
pub fn inductance_h(wire: &LitzWire, winding: &Winding) -> f64 {
    let turns = winding.turn_count() as f64;
    let l_coil = 0.8 * (winding.radius * turns).powi(2)
        / (6.0 * winding.radius
            + 9.0 * winding.wiring_width(wire)
            + 10.0 * winding.wiring_height(wire));
    // Wheeler's formula takes inches and yields uH: fold both conversions
    let l_coil = l_coil / (25.4 * 1e6);
    2.0 * l_coil
}

/// Impedance magnitude |R + jwL| at frequency `freq_hz` (Ohm).
///
/// Combines DC resistance with inductive reactance; this is not a
/// skin-effect model.
pub fn impedance_ohm(wire: &LitzWire, winding: &Winding, freq_hz: f64) -> f64 {
    let omega = 2.0 * PI * freq_hz;
    let r = dc_resistance_ohm(wire, winding);
    (r * r + (omega * inductance_h(wire, winding)).powi(2)).sqrt()
}

/// Outer envelope diameter including winding build-up and padding (mm)
pub fn physical_diameter_mm(wire: &LitzWire, winding: &Winding, pad_mm: f64) -> f64 {
    2.0 * (winding.radius + winding.wiring_height(wire) / 2.0 + pad_mm)
}

/// Field at the pair center from the closed-form Helmholtz expression
/// `8/(5 sqrt 5) * mu0 * N * I / R` (mT).
pub fn center_field_mt(winding: &Winding) -> f64 {
    let b0 = 8.0 / (5.0 * 5.0_f64.sqrt()) * MU0 * winding.turn_count() as f64 * winding.current
        / winding.radius;
    // radius is in mm: the mm->m and T->mT conversions fold into one factor
    b0 * 1e6
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference() -> (LitzWire, Winding) {
        (LitzWire::litz_75(), Winding::new(130.0, 2.0, 6, 8).unwrap())
    }

    #[test]
    fn test_wire_length() {
        let (_, winding) = reference();
        let expected = (2.0 * PI * 130.0 * 48.0 * 2.0 + 2.0 * 130.0) / 1e3;
        assert_relative_eq!(wire_length_m(&winding), expected, epsilon = 1e-12);
        // ballpark: just under 79 m of conductor
        assert!(wire_length_m(&winding) > 78.0 && wire_length_m(&winding) < 79.0);
    }

    #[test]
    fn test_dc_resistance() {
        let (wire, winding) = reference();
        // 0.0172 * 78.67 / (pi * 0.05^2) / 75
        let single = COPPER_RESISTIVITY * wire_length_m(&winding) / wire.strand_area_mm2();
        assert_relative_eq!(
            dc_resistance_ohm(&wire, &winding),
            single / 75.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(dc_resistance_ohm(&wire, &winding), 2.297, epsilon = 1e-3);
    }

    #[test]
    fn test_wheeler_inductance() {
        let (wire, winding) = reference();
        // 0.8 * (130*48)^2 / (6*130 + 9*7.8 + 10*10.4) / 25.4e6, doubled
        let l = inductance_h(&wire, &winding);
        assert_relative_eq!(l, 2.571e-3, epsilon = 1e-5);
    }

    #[test]
    fn test_impedance_reduces_to_dc_at_zero_frequency() {
        let (wire, winding) = reference();
        assert_relative_eq!(
            impedance_ohm(&wire, &winding, 0.0),
            dc_resistance_ohm(&wire, &winding),
            epsilon = 1e-12
        );
        // at 1 kHz the reactive term dominates for this coil
        assert!(impedance_ohm(&wire, &winding, 1000.0) > 10.0);
    }

    #[test]
    fn test_mass_scales_with_strands() {
        let (wire, winding) = reference();
        let single = LitzWire {
            strands: 1,
            ..wire
        };
        assert_relative_eq!(
            wire_mass_kg(&wire, &winding),
            75.0 * wire_mass_kg(&single, &winding),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_center_field() {
        let (_, winding) = reference();
        // 8/(5 sqrt 5) * mu0 * 96 A-turns / 0.130 m = 0.664 mT
        assert_relative_eq!(center_field_mt(&winding), 0.6638, epsilon = 1e-3);
    }

    #[test]
    fn test_physical_diameter() {
        let (wire, winding) = reference();
        assert_relative_eq!(
            physical_diameter_mm(&wire, &winding, 3.0),
            2.0 * (130.0 + 5.2 + 3.0),
            epsilon = 1e-12
        );
    }
}
