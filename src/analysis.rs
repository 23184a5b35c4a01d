//! Field profile sampling and the homogeneous-region search

use nalgebra::Vector3;
use serde::Serialize;

use crate::assembly::CoilAssembly;
use crate::error::{DesignError, DesignResult};
use crate::field::FieldEngine;

/// Coordinate axis of a query grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    #[default]
    Z,
}

impl Axis {
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    fn unit(self) -> Vector3<f64> {
        let mut v = Vector3::zeros();
        v[self.index()] = 1.0;
        v
    }
}

/// Sampled field along a straight line through the coil center.
#[derive(Debug, Clone)]
pub struct FieldProfile {
    pub axis: Axis,
    /// Coordinates along `axis` (mm)
    pub positions: Vec<f64>,
    /// Field vector at each position (mT)
    pub field: Vec<Vector3<f64>>,
}

impl FieldProfile {
    /// The field component along the profile axis.
    pub fn axial_component(&self) -> Vec<f64> {
        let i = self.axis.index();
        self.field.iter().map(|b| b[i]).collect()
    }

    /// The sample the analysis normalizes against (grid midpoint).
    pub fn center_value(&self) -> f64 {
        self.field[self.field.len() / 2][self.axis.index()]
    }
}

/// Sample the field along one axis over [-radius, +radius].
pub fn sample_axial<E: FieldEngine>(
    engine: &E,
    assembly: &CoilAssembly,
    axis: Axis,
    samples: usize,
) -> DesignResult<FieldProfile> {
    check_grid(samples)?;
    let radius = assembly.radius();
    let positions: Vec<f64> = (0..samples)
        .map(|i| -radius + i as f64 * 2.0 * radius / (samples as f64 - 1.0))
        .collect();
    let points: Vec<Vector3<f64>> = positions.iter().map(|&s| axis.unit() * s).collect();
    let field = engine.field_at(assembly.elements(), &points);
    Ok(FieldProfile {
        axis,
        positions,
        field,
    })
}

/// Sampled field over a square plane through the origin.
#[derive(Debug, Clone)]
pub struct PlaneProfile {
    /// In-plane axes: `field[j * n + i]` sits at
    /// (coords[i] along axes.0, coords[j] along axes.1)
    pub axes: (Axis, Axis),
    /// Shared coordinate ticks for both plane axes (mm)
    pub coords: Vec<f64>,
    /// Field vectors, row-major (mT)
    pub field: Vec<Vector3<f64>>,
}

/// Sample the field over an n x n plane spanning [-extent, +extent]^2.
/// Used by the visualization export, not by the uniformity analysis.
pub fn sample_plane<E: FieldEngine>(
    engine: &E,
    assembly: &CoilAssembly,
    axes: (Axis, Axis),
    extent: f64,
    samples: usize,
) -> DesignResult<PlaneProfile> {
    check_grid(samples)?;
    let coords: Vec<f64> = (0..samples)
        .map(|i| -extent + i as f64 * 2.0 * extent / (samples as f64 - 1.0))
        .collect();

    let mut points = Vec::with_capacity(samples * samples);
    for &b in &coords {
        for &a in &coords {
            let mut p = Vector3::zeros();
            p[axes.0.index()] = a;
            p[axes.1.index()] = b;
            points.push(p);
        }
    }
    let field = engine.field_at(assembly.elements(), &points);
    Ok(PlaneProfile {
        axes,
        coords,
        field,
    })
}

fn check_grid(samples: usize) -> DesignResult<()> {
    if samples < 2 {
        return Err(DesignError::InvalidParameter {
            field: "samples",
            value: samples as f64,
            reason: "a grid needs at least two samples",
        });
    }
    Ok(())
}

/// Zone around the center sample where the field stays within tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HomogeneousRegion {
    /// Index of the leftmost qualifying sample
    pub left: usize,
    /// Index of the rightmost qualifying sample
    pub right: usize,
    /// Span between the bounding samples (mm)
    pub width_mm: f64,
    /// False when the qualifying samples have uneven index gaps
    pub convex: bool,
}

/// Find the region around the center where the axial field component
/// deviates from the center value by less than `tol`.
///
/// The region is the outer bounding span [min, max] of all qualifying
/// samples. Non-convexity is detected by a gap-uniformity heuristic: uneven
/// spacing within the qualifying set flags the result, because the span then
/// includes samples outside tolerance and overstates the contiguous region.
/// An evenly spaced but gapped set slips through the heuristic undetected.
pub fn find_homogeneous_region(profile: &FieldProfile, tol: f64) -> DesignResult<HomogeneousRegion> {
    let component = profile.axial_component();
    let b0 = profile.center_value();

    let selected: Vec<usize> = component
        .iter()
        .enumerate()
        .filter(|(_, &b)| (b / b0 - 1.0).abs() < tol)
        .map(|(i, _)| i)
        .collect();

    let left = selected
        .first()
        .copied()
        .ok_or(DesignError::NoHomogeneousRegion { tolerance: tol })?;
    let right = selected[selected.len() - 1];

    let mut gaps = selected.windows(2).map(|w| w[1] - w[0]);
    let convex = match gaps.next() {
        Some(first) => gaps.all(|g| g == first),
        // a single qualifying sample has no gaps to inspect
        None => false,
    };
    if !convex {
        tracing::warn!(
            left,
            right,
            "non-convex field profile: reported span may overstate the contiguous region"
        );
    }

    Ok(HomogeneousRegion {
        left,
        right,
        width_mm: profile.positions[right] - profile.positions[left],
        convex,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Profile with a given axial component on a unit-spaced grid.
    fn profile_from(values: &[f64]) -> FieldProfile {
        FieldProfile {
            axis: Axis::Z,
            positions: (0..values.len()).map(|i| i as f64).collect(),
            field: values.iter().map(|&v| Vector3::new(0.0, 0.0, v)).collect(),
        }
    }

    #[test]
    fn test_unimodal_profile_gives_symmetric_convex_region() {
        // Gaussian-like peak at the center of a 101-sample grid
        let values: Vec<f64> = (0..101)
            .map(|i| {
                let z = (i as f64 - 50.0) / 20.0;
                (-z * z).exp()
            })
            .collect();
        let region = find_homogeneous_region(&profile_from(&values), 0.01).unwrap();
        assert!(region.convex);
        assert_eq!(50 - region.left, region.right - 50);
        assert!(region.left < 50 && region.right > 50);
    }

    #[test]
    fn test_uniform_profile_spans_whole_grid() {
        let values = vec![1.5; 33];
        let region = find_homogeneous_region(&profile_from(&values), 0.01).unwrap();
        assert!(region.convex);
        assert_eq!(region.left, 0);
        assert_eq!(region.right, 32);
        assert_relative_eq!(region.width_mm, 32.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_selection_is_an_error() {
        // zero tolerance excludes every sample of a non-constant profile,
        // the center one included
        let values: Vec<f64> = (0..11).map(|i| 1.0 + 0.1 * i as f64).collect();
        let result = find_homogeneous_region(&profile_from(&values), 0.0);
        assert!(matches!(
            result,
            Err(DesignError::NoHomogeneousRegion { .. })
        ));
    }

    #[test]
    fn test_gapped_selection_is_flagged_non_convex() {
        // qualifying samples at 4, 5, 6 and a stray at 9: gaps 1, 1, 3
        let mut values = vec![0.5; 11];
        values[4] = 1.0;
        values[5] = 1.0;
        values[6] = 1.0;
        values[9] = 1.0;
        let region = find_homogeneous_region(&profile_from(&values), 0.01).unwrap();
        assert!(!region.convex);
        // min/max policy keeps the stray inside the reported span
        assert_eq!(region.left, 4);
        assert_eq!(region.right, 9);
        assert_relative_eq!(region.width_mm, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_gap_heuristic_limits() {
        // the heuristic inspects gap spacing, not true contiguity:
        // an evenly gapped set (every second sample) is NOT flagged...
        let mut values = vec![0.5; 9];
        for i in [0, 2, 4, 6, 8] {
            values[i] = 1.0;
        }
        let region = find_homogeneous_region(&profile_from(&values), 0.01).unwrap();
        assert!(region.convex);
        assert_eq!((region.left, region.right), (0, 8));

        // ...while a single qualifying sample (no gaps at all) IS flagged
        let mut values = vec![0.5; 9];
        values[4] = 1.0;
        let region = find_homogeneous_region(&profile_from(&values), 0.01).unwrap();
        assert!(!region.convex);
        assert_eq!((region.left, region.right), (4, 4));
        assert_relative_eq!(region.width_mm, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_grid_needs_two_samples() {
        let err = check_grid(1);
        assert!(matches!(err, Err(DesignError::InvalidParameter { .. })));
    }
}
