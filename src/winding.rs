//! Winding parameters and the derived layout quantities

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DesignError, DesignResult};
use crate::wire::LitzWire;

/// Winding parameters shared by both halves of the pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Winding {
    /// Mean coil radius (mm)
    pub radius: f64,
    /// Drive current (A)
    pub current: f64,
    /// Wires stacked axially in one layer
    pub wires_per_layer: u32,
    /// Radially stacked layers
    pub layers: u32,
}

impl Winding {
    pub fn new(radius: f64, current: f64, wires_per_layer: u32, layers: u32) -> DesignResult<Self> {
        let winding = Self {
            radius,
            current,
            wires_per_layer,
            layers,
        };
        winding.validate()?;
        Ok(winding)
    }

    pub fn validate(&self) -> DesignResult<()> {
        if self.radius <= 0.0 {
            return Err(DesignError::InvalidParameter {
                field: "radius",
                value: self.radius,
                reason: "coil radius must be positive",
            });
        }
        if self.wires_per_layer == 0 {
            return Err(DesignError::InvalidParameter {
                field: "wires_per_layer",
                value: 0.0,
                reason: "a layer needs at least one wire",
            });
        }
        if self.layers == 0 {
            return Err(DesignError::InvalidParameter {
                field: "layers",
                value: 0.0,
                reason: "the winding needs at least one layer",
            });
        }
        Ok(())
    }

    pub fn turn_count(&self) -> u32 {
        self.layers * self.wires_per_layer
    }

    /// Axial extent of one layer (mm)
    pub fn wiring_width(&self, wire: &LitzWire) -> f64 {
        wire.d_outer * self.wires_per_layer as f64
    }

    /// Radial build-up of the loosely stacked layers (mm)
    pub fn wiring_height(&self, wire: &LitzWire) -> f64 {
        wire.d_outer * self.layers as f64
    }

    /// Radial build-up with hexagonal-ish packing of round wires (mm)
    pub fn wiring_height_packed(&self, wire: &LitzWire) -> f64 {
        wire.d_outer * (1.0 + 0.87 * (self.layers as f64 - 1.0))
    }

    /// Effective loop radius of one radial layer (mm).
    ///
    /// Layers are centered on the mean radius: the middle layer(s) sit at
    /// `radius`, inner and outer layers are offset by whole wire diameters.
    pub fn layer_radius(&self, wire: &LitzWire, layer: u32) -> f64 {
        let x_layer = wire.d_outer * (layer as f64 - (self.layers as f64 - 1.0) / 2.0);
        self.radius + x_layer
    }

    /// Which side of the coil the winding enters and exits.
    pub fn exit_side(&self) -> WindingExit {
        if self.layers % 2 == 0 {
            WindingExit::SameSide
        } else {
            WindingExit::OppositeSides
        }
    }

    /// Geometric fit check: the winding must not crowd out half the radius.
    pub fn check_fit(&self, wire: &LitzWire) -> DesignResult<()> {
        let width = self.wiring_width(wire);
        let limit = self.radius / 2.0;
        if width >= limit {
            return Err(DesignError::WindingTooWide {
                width_mm: width,
                limit_mm: limit,
            });
        }
        Ok(())
    }
}

/// Where the two lead wires leave the winding.
///
/// An even layer count winds back to the side it started on; an odd count
/// ends on the opposite side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindingExit {
    SameSide,
    OppositeSides,
}

impl fmt::Display for WindingExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindingExit::SameSide => write!(f, "same side"),
            WindingExit::OppositeSides => write!(f, "opposite sides"),
        }
    }
}
