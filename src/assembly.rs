//! Coil pair geometry: current-carrying source elements and the winding
//! layout builder

use nalgebra::Vector3;
use std::f64::consts::PI;

use crate::error::DesignResult;
use crate::winding::Winding;
use crate::wire::LitzWire;
use crate::DesignConfig;

/// A current-carrying element the field engine can integrate over.
#[derive(Debug, Clone)]
pub enum SourceElement {
    /// Closed circular loop in a plane normal to the coil axis
    Loop {
        /// Current (A)
        current: f64,
        /// Loop diameter (mm)
        diameter: f64,
        /// Loop center (mm)
        center: Vector3<f64>,
    },
    /// Straight-segment path: spiral layers and connector cables.
    /// Always holds at least two vertices.
    Polyline {
        /// Current (A)
        current: f64,
        /// Path vertices (mm)
        vertices: Vec<Vector3<f64>>,
    },
}

impl SourceElement {
    /// Physical start of the conductor path. A loop begins and ends at its
    /// edge point at angle 0.
    pub fn start_point(&self) -> Vector3<f64> {
        match self {
            SourceElement::Loop {
                diameter, center, ..
            } => center + Vector3::new(diameter / 2.0, 0.0, 0.0),
            SourceElement::Polyline { vertices, .. } => vertices[0],
        }
    }

    /// Physical end of the conductor path.
    pub fn end_point(&self) -> Vector3<f64> {
        match self {
            SourceElement::Loop { .. } => self.start_point(),
            SourceElement::Polyline { vertices, .. } => vertices[vertices.len() - 1],
        }
    }

    /// Rigid copy shifted by `offset`.
    fn translated(&self, offset: Vector3<f64>) -> SourceElement {
        match self {
            SourceElement::Loop {
                current,
                diameter,
                center,
            } => SourceElement::Loop {
                current: *current,
                diameter: *diameter,
                center: center + offset,
            },
            SourceElement::Polyline { current, vertices } => SourceElement::Polyline {
                current: *current,
                vertices: vertices.iter().map(|v| v + offset).collect(),
            },
        }
    }
}

/// Winding geometry mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindingMode {
    /// Every physical turn as an idealized co-planar circular loop.
    /// Negligible error versus the true helical path.
    #[default]
    Loops,
    /// One continuous helical path per layer
    Spiral,
}

/// The full Helmholtz pair: winding elements of both halves plus two
/// connector cables closing the circuit.
///
/// Built once; immutable afterwards. The halves are rigid copies at
/// z = -radius/2 and +radius/2, so the center separation equals the radius.
#[derive(Debug, Clone)]
pub struct CoilAssembly {
    elements: Vec<SourceElement>,
    winding_count: usize,
    radius: f64,
}

impl CoilAssembly {
    pub fn build(wire: &LitzWire, winding: &Winding, config: &DesignConfig) -> DesignResult<Self> {
        wire.validate()?;
        winding.validate()?;
        winding.check_fit(wire)?;

        let half = match config.mode {
            WindingMode::Loops => half_loops(wire, winding),
            WindingMode::Spiral => half_spiral(wire, winding, config.spiral_segments),
        };

        let offset = Vector3::new(0.0, 0.0, winding.radius / 2.0);
        let mut elements: Vec<SourceElement> = Vec::with_capacity(half.len() * 2 + 2);
        elements.extend(half.iter().map(|e| e.translated(-offset)));
        elements.extend(half.iter().map(|e| e.translated(offset)));

        let winding_count = elements.len();
        let cables = connector_cables(&elements, half.len(), winding.current);
        elements.extend(cables);

        Ok(Self {
            elements,
            winding_count,
            radius: winding.radius,
        })
    }

    /// All elements in circuit order, connectors last.
    pub fn elements(&self) -> &[SourceElement] {
        &self.elements
    }

    /// Field-generating winding elements of both halves.
    pub fn windings(&self) -> &[SourceElement] {
        &self.elements[..self.winding_count]
    }

    /// The two straight cables joining the halves.
    pub fn connectors(&self) -> &[SourceElement] {
        &self.elements[self.winding_count..]
    }

    /// Mean coil radius (mm)
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// One half of the pair, centered at the origin: a loop per (layer, wire).
fn half_loops(wire: &LitzWire, winding: &Winding) -> Vec<SourceElement> {
    let mut elements = Vec::with_capacity((winding.layers * winding.wires_per_layer) as usize);
    for layer in 0..winding.layers {
        let diameter = 2.0 * winding.layer_radius(wire, layer);
        for wire_id in 0..winding.wires_per_layer {
            let z = wire.d_outer * (wire_id as f64 - (winding.wires_per_layer as f64 - 1.0) / 2.0);
            elements.push(SourceElement::Loop {
                current: winding.current,
                diameter,
                center: Vector3::new(0.0, 0.0, z),
            });
        }
    }
    elements
}

/// One half of the pair as helical paths: a polyline per layer sweeping
/// `wires_per_layer` full turns while z advances across the layer width.
fn half_spiral(wire: &LitzWire, winding: &Winding, segments: usize) -> Vec<SourceElement> {
    let segments = segments.max(2);
    let turns = winding.wires_per_layer as f64;
    let half_width = wire.d_outer * (winding.wires_per_layer as f64 - 1.0) / 2.0;

    let mut elements = Vec::with_capacity(winding.layers as usize);
    for layer in 0..winding.layers {
        let r = winding.layer_radius(wire, layer);
        let vertices = (0..segments)
            .map(|i| {
                let t = i as f64 / (segments - 1) as f64;
                let phase = t * turns * 2.0 * PI;
                Vector3::new(
                    r * phase.cos(),
                    r * phase.sin(),
                    -half_width + t * 2.0 * half_width,
                )
            })
            .collect();
        elements.push(SourceElement::Polyline {
            current: winding.current,
            vertices,
        });
    }
    elements
}

/// Two straight cables closing the circuit between the halves: last element
/// of half one to first element of half two, and back from the last element
/// of half two. Negligible field effect, but the path must not dangle.
fn connector_cables(
    elements: &[SourceElement],
    half_len: usize,
    current: f64,
) -> Vec<SourceElement> {
    let v1_end = elements[half_len - 1].end_point();
    let v2_begin = elements[half_len].start_point();
    let v2_end = elements[elements.len() - 1].end_point();
    vec![
        SourceElement::Polyline {
            current,
            vertices: vec![v1_end, v2_begin],
        },
        SourceElement::Polyline {
            current,
            vertices: vec![v2_end, v1_end],
        },
    ]
}
