//! Python plot-script generation
//!
//! The crate does not render anything itself; it emits a matplotlib script
//! with the sampled data embedded, for an external plotting layer to run.

use minijinja::{context, Environment};

use crate::analysis::{
    find_homogeneous_region, sample_axial, sample_plane, Axis, FieldProfile, HomogeneousRegion,
    PlaneProfile,
};
use crate::assembly::CoilAssembly;
use crate::error::DesignResult;
use crate::field::FieldEngine;
use crate::winding::Winding;
use crate::wire::LitzWire;
use crate::DesignConfig;

const PLOT_TEMPLATE: &str = r##"#!/usr/bin/env python3
"""
Helmholtz coil pair field plots - Auto-generated

Generated: {{ timestamp }}
Coil radius {{ "%.1f"|format(radius) }} mm, {{ turns }} turns per coil at {{ "%.2f"|format(current) }} A.

Run with --output FILE to save the figure instead of showing it.
"""

import argparse

import matplotlib.pyplot as plt
import numpy as np

AXIS = "{{ axis }}"
AXIS_INDEX = {{ axis_index }}
TOLERANCE = {{ tolerance }}

# Axial profile: sample coordinates (mm) and field components (mT)
POSITIONS = np.array([
{{ positions }}
])
B_X = np.array([
{{ profile_bx }}
])
B_Y = np.array([
{{ profile_by }}
])
B_Z = np.array([
{{ profile_bz }}
])

# Homogeneous region bounds (sample indices into POSITIONS)
REGION_LEFT = {{ region_left }}
REGION_RIGHT = {{ region_right }}
REGION_WIDTH = {{ "%.3f"|format(region_width) }}

# {{ plane_n }} x {{ plane_n }} slice in the {{ plane_ax1 }}-{{ plane_ax2 }} plane (mm, mT)
PLANE_N = {{ plane_n }}
PLANE_COORDS = np.array([
{{ plane_coords }}
])
PLANE_B1 = np.array([
{{ plane_b1 }}
]).reshape(PLANE_N, PLANE_N)
PLANE_B2 = np.array([
{{ plane_b2 }}
]).reshape(PLANE_N, PLANE_N)
PLANE_MAG = np.array([
{{ plane_mag }}
]).reshape(PLANE_N, PLANE_N)


def plot_profile(ax):
    """Axial field components with the homogeneous region marked."""
    b = np.column_stack([B_X, B_Y, B_Z])
    ax.plot(POSITIONS, b, label=["Bx", "By", "Bz"])

    comp = b[:, AXIS_INDEX]
    left, right = POSITIONS[REGION_LEFT], POSITIONS[REGION_RIGHT]
    ax.vlines(x=[left, right], ymin=b.min(),
              ymax=[comp[REGION_LEFT], comp[REGION_RIGHT]],
              linestyles="--", colors="grey", alpha=0.5)
    ax.text(0.5, 0.5, f"Tolerance {TOLERANCE}\nwidth {REGION_WIDTH:.0f} mm",
            transform=ax.transAxes, horizontalalignment="center",
            verticalalignment="center")
    ax.set(xlabel=f"{AXIS}, mm", ylabel="B-field, mT")
    ax.grid(color=".9")
    ax.legend()


def plot_streamlines(ax):
    """Field streamlines over the plane slice, colored by magnitude."""
    x, y = np.meshgrid(PLANE_COORDS, PLANE_COORDS)
    mag_norm = PLANE_MAG / np.amax(PLANE_MAG)
    sp = ax.streamplot(x, y, PLANE_B1, PLANE_B2,
                       density=2,
                       color=PLANE_MAG,
                       linewidth=np.sqrt(mag_norm) * 2,
                       cmap="coolwarm")
    plt.colorbar(sp.lines, ax=ax, label="[mT]")
    ax.set(xlabel=f"{{ plane_ax1 }}, mm", ylabel=f"{{ plane_ax2 }}, mm")


if __name__ == "__main__":
    parser = argparse.ArgumentParser(description="Helmholtz coil field plots")
    parser.add_argument("--output", type=str, default=None,
                        help="Save the figure to this file instead of showing it")
    args = parser.parse_args()

    fig, axes = plt.subplots(nrows=2, figsize=(7, 10))
    plot_streamlines(axes[0])
    plot_profile(axes[1])
    plt.tight_layout()

    if args.output:
        plt.savefig(args.output, dpi=150)
        print(f"Figure saved to {args.output}")
    else:
        plt.show()
"##;

/// Build the geometry, sample the axial profile and a plane slice, and
/// render the plotting script for them.
pub fn render_field_plots<E: FieldEngine>(
    wire: &LitzWire,
    winding: &Winding,
    engine: &E,
    config: &DesignConfig,
) -> DesignResult<String> {
    let assembly = CoilAssembly::build(wire, winding, config)?;
    let profile = sample_axial(engine, &assembly, config.axis, config.grid_points)?;
    let region = find_homogeneous_region(&profile, config.tolerance)?;
    let plane = sample_plane(
        engine,
        &assembly,
        (Axis::X, Axis::Z),
        2.0 * winding.radius,
        config.plane_points,
    )?;
    generate_plot_script(winding, &profile, &region, &plane, config)
}

/// Render the plotting script from already-sampled data.
pub fn generate_plot_script(
    winding: &Winding,
    profile: &FieldProfile,
    region: &HomogeneousRegion,
    plane: &PlaneProfile,
    config: &DesignConfig,
) -> DesignResult<String> {
    let mut env = Environment::new();
    env.add_template("plots", PLOT_TEMPLATE)?;
    let template = env.get_template("plots")?;

    let component = |axis: usize| -> Vec<f64> { profile.field.iter().map(|b| b[axis]).collect() };
    let (i1, i2) = (plane.axes.0.index(), plane.axes.1.index());
    let plane_component =
        |axis: usize| -> Vec<f64> { plane.field.iter().map(|b| b[axis]).collect() };
    let plane_mag: Vec<f64> = plane.field.iter().map(|b| b.norm()).collect();

    let output = template.render(context! {
        timestamp => chrono::Utc::now().to_rfc3339(),
        radius => winding.radius,
        turns => winding.turn_count(),
        current => winding.current,
        axis => profile.axis.label(),
        axis_index => profile.axis.index(),
        tolerance => config.tolerance,
        positions => array_rows(&profile.positions, 4),
        profile_bx => array_rows(&component(0), 9),
        profile_by => array_rows(&component(1), 9),
        profile_bz => array_rows(&component(2), 9),
        region_left => region.left,
        region_right => region.right,
        region_width => region.width_mm,
        plane_n => plane.coords.len(),
        plane_ax1 => plane.axes.0.label(),
        plane_ax2 => plane.axes.1.label(),
        plane_coords => array_rows(&plane.coords, 4),
        plane_b1 => array_rows(&plane_component(i1), 9),
        plane_b2 => array_rows(&plane_component(i2), 9),
        plane_mag => array_rows(&plane_mag, 9),
    })?;

    Ok(output)
}

/// Indented comma-separated lines for a numpy array literal.
fn array_rows(values: &[f64], decimals: usize) -> String {
    values
        .chunks(8)
        .map(|chunk| {
            let row: Vec<String> = chunk
                .iter()
                .map(|v| format!("{:.*}", decimals, v))
                .collect();
            format!("    {},", row.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::BiotSavartEngine;

    #[test]
    fn test_script_renders_with_embedded_data() {
        let wire = LitzWire::litz_75();
        let winding = Winding::new(130.0, 2.0, 6, 8).unwrap();
        let engine = BiotSavartEngine::default();
        let config = DesignConfig {
            grid_points: 21,
            plane_points: 5,
            ..DesignConfig::default()
        };

        let script = render_field_plots(&wire, &winding, &engine, &config).unwrap();
        assert!(script.contains("import numpy as np"));
        assert!(script.contains("import matplotlib.pyplot as plt"));
        assert!(script.contains("streamplot"));
        assert!(script.contains("PLANE_N = 5"));
        // grid spans [-radius, +radius]
        assert!(script.contains("-130.0000"));
        assert!(script.contains("AXIS = \"z\""));
    }

    #[test]
    fn test_array_rows_wraps_lines() {
        let values: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let rows = array_rows(&values, 1);
        assert_eq!(rows.lines().count(), 3);
        assert!(rows.starts_with("    0.0, 1.0,"));
        assert!(rows.ends_with("16.0, 17.0, 18.0, 19.0,"));
    }
}
