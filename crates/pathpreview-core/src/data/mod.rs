//! Data models for toolpath positions and coordinate shifts
//!
//! This module provides:
//! - Fully resolved 3-axis points
//! - Partial axis words as read from a single command line
//! - The running coordinate shift introduced by `G92`

use serde::{Deserialize, Serialize};
use std::fmt;

/// Linear machine axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All linear axes in X, Y, Z order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
            Axis::Z => write!(f, "Z"),
        }
    }
}

/// Fully resolved point on the toolpath
///
/// Every axis holds an absolute machine value with the running coordinate
/// shift already applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    /// X-axis position
    pub x: f64,
    /// Y-axis position
    pub y: f64,
    /// Z-axis position
    pub z: f64,
}

impl Point3D {
    /// Create a point from its three coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        debug_assert!(
            x.is_finite() && y.is_finite() && z.is_finite(),
            "Point3D axes must be finite: x={x}, y={y}, z={z}"
        );
        Self { x, y, z }
    }

    /// The implicit origin a file starts from
    pub fn origin() -> Self {
        Self::default()
    }

    /// Read a single axis
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Copy of this point with one axis replaced
    pub fn with(mut self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
        self
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X:{:.3} Y:{:.3} Z:{:.3}", self.x, self.y, self.z)
    }
}

/// Axis words found on one command line
///
/// `None` means the word was not given on the line, which is distinct from an
/// explicit zero. `i` and `j` are arc-center offsets relative to the start
/// point and are never shifted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialPoint {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub i: Option<f64>,
    pub j: Option<f64>,
}

impl PartialPoint {
    /// Create an empty partial point (no words given)
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a linear axis word
    pub fn get(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Builder-style setter for a linear axis word
    pub fn with(mut self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::X => self.x = Some(value),
            Axis::Y => self.y = Some(value),
            Axis::Z => self.z = Some(value),
        }
        self
    }

    /// Builder-style setter for the arc-center offsets
    pub fn with_center_offset(mut self, i: f64, j: f64) -> Self {
        self.i = Some(i);
        self.j = Some(j);
        self
    }
}

/// Running translation applied to absolute coordinates after a `G92`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShiftVector {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
}

impl ShiftVector {
    /// Create a shift from its components
    pub fn new(dx: f64, dy: f64, dz: f64) -> Self {
        Self { dx, dy, dz }
    }

    /// The identity shift
    pub fn zero() -> Self {
        Self::default()
    }

    /// Read the shift along an axis
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.dx,
            Axis::Y => self.dy,
            Axis::Z => self.dz,
        }
    }

    /// Copy of this shift with one component replaced
    pub fn with(mut self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::X => self.dx = value,
            Axis::Y => self.dy = value,
            Axis::Z => self.dz = value,
        }
        self
    }
}

impl fmt::Display for ShiftVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X{}, Y{} Z{}", self.dx, self.dy, self.dz)
    }
}
