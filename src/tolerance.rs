//! Field error from mechanical misalignment of the coils
//!
//! Closed-form coefficients calibrated against "Design and construction of a
//! 3D Helmholtz coil system for the ALBA magnetic measurements laboratory"
//! (A. Fontanet Valls).

use crate::error::{DesignError, DesignResult};

/// Fractional field error for a pair where each coil may be rotated up to
/// `rotation_deg` and displaced up to `displacement_mm` off axis.
pub fn misalignment_field_error(rotation_deg: f64, displacement_mm: f64) -> DesignResult<f64> {
    if rotation_deg < 0.0 {
        return Err(DesignError::InvalidParameter {
            field: "rotation_deg",
            value: rotation_deg,
            reason: "rotation bound cannot be negative",
        });
    }
    if displacement_mm < 0.0 {
        return Err(DesignError::InvalidParameter {
            field: "displacement_mm",
            value: displacement_mm,
            reason: "displacement bound cannot be negative",
        });
    }

    let rotation_percent = 11.2 * rotation_deg.to_radians();
    let displacement_percent =
        0.00898328 * displacement_mm + 0.000861055 * displacement_mm.powi(2);
    // both coils contribute the full band independently
    Ok(2.0 * (rotation_percent + displacement_percent) / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_misalignment_means_zero_error() {
        assert_eq!(misalignment_field_error(0.0, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_reference_point() {
        // 1 degree, 1 mm: 2 * (11.2 * 0.017453 + 0.00898328 + 0.000861055) / 100
        let err = misalignment_field_error(1.0, 1.0).unwrap();
        assert_relative_eq!(err, 0.0041064, epsilon = 1e-6);
    }

    #[test]
    fn test_monotone_in_both_arguments() {
        let mut last = 0.0;
        for step in 0..20 {
            let rot = step as f64 * 0.25;
            let err = misalignment_field_error(rot, 0.5).unwrap();
            assert!(err >= last);
            last = err;
        }
        let mut last = 0.0;
        for step in 0..20 {
            let dx = step as f64 * 0.5;
            let err = misalignment_field_error(0.5, dx).unwrap();
            assert!(err >= last);
            last = err;
        }
    }

    #[test]
    fn test_rejects_negative_bounds() {
        assert!(misalignment_field_error(-1.0, 0.0).is_err());
        assert!(misalignment_field_error(0.0, -1.0).is_err());
    }
}
