//! Magnetic field evaluation using the Biot-Savart law
//!
//! Analysis code depends only on the [`FieldEngine`] trait; the bundled
//! [`BiotSavartEngine`] discretizes every element into straight segments
//! and sums their contributions.

use nalgebra::Vector3;
use std::f64::consts::PI;

use crate::assembly::SourceElement;

/// Permeability of free space (H/m)
pub const MU0: f64 = 4.0 * PI * 1e-7;

/// Evaluates the field of a set of current elements at query points.
///
/// Implementations must be deterministic: fixed elements and points give a
/// fixed result. Positions are millimeters, output is millitesla.
pub trait FieldEngine {
    /// Field vectors (mT) at each query point (mm)
    fn field_at(&self, elements: &[SourceElement], points: &[Vector3<f64>]) -> Vec<Vector3<f64>>;
}

/// Reference engine: segment-summation of dB = (mu0/4pi) I (dl x r) / r^3.
#[derive(Debug, Clone)]
pub struct BiotSavartEngine {
    /// Straight segments used to discretize one circular loop
    pub loop_segments: usize,
}

impl Default for BiotSavartEngine {
    fn default() -> Self {
        Self { loop_segments: 64 }
    }
}

impl FieldEngine for BiotSavartEngine {
    fn field_at(&self, elements: &[SourceElement], points: &[Vector3<f64>]) -> Vec<Vector3<f64>> {
        points
            .iter()
            .map(|&point| {
                let mut b = Vector3::zeros();
                for element in elements {
                    b += match element {
                        SourceElement::Loop {
                            current,
                            diameter,
                            center,
                        } => loop_field(*current, *diameter, *center, point, self.loop_segments),
                        SourceElement::Polyline { current, vertices } => {
                            polyline_field(*current, vertices, point)
                        }
                    };
                }
                // T -> mT
                b * 1e3
            })
            .collect()
    }
}

/// Field of one circular loop (T), loop normal along +z.
fn loop_field(
    current: f64,
    diameter: f64,
    center: Vector3<f64>,
    point: Vector3<f64>,
    segments: usize,
) -> Vector3<f64> {
    // mm -> m for SI units
    let r_m = diameter * 0.5e-3;
    let c = center * 1e-3;
    let p = point * 1e-3;

    let dtheta = 2.0 * PI / segments as f64;
    let mut b = Vector3::zeros();

    for i in 0..segments {
        let theta = i as f64 * dtheta;
        let theta_mid = theta + dtheta / 2.0;

        // wire element position and tangent
        let w = c + Vector3::new(r_m * theta_mid.cos(), r_m * theta_mid.sin(), 0.0);
        let dl = Vector3::new(
            -r_m * theta_mid.sin() * dtheta,
            r_m * theta_mid.cos() * dtheta,
            0.0,
        );

        b += segment_contribution(current, dl, p - w);
    }

    b
}

/// Field of a straight-segment path (T), segments taken between consecutive
/// vertices with the current element at the segment midpoint.
fn polyline_field(current: f64, vertices: &[Vector3<f64>], point: Vector3<f64>) -> Vector3<f64> {
    let p = point * 1e-3;
    let mut b = Vector3::zeros();

    for pair in vertices.windows(2) {
        let a = pair[0] * 1e-3;
        let c = pair[1] * 1e-3;
        let dl = c - a;
        let mid = (a + c) / 2.0;
        b += segment_contribution(current, dl, p - mid);
    }

    b
}

/// dB = (mu0/4pi) * I * (dl x r) / r^3, skipping points on top of the wire.
fn segment_contribution(current: f64, dl: Vector3<f64>, r: Vector3<f64>) -> Vector3<f64> {
    let r_mag = r.norm();
    if r_mag < 1e-10 {
        return Vector3::zeros();
    }
    let factor = MU0 / (4.0 * PI) * current / (r_mag * r_mag * r_mag);
    dl.cross(&r) * factor
}
