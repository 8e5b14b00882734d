//! Bounding envelope accumulator
//!
//! Keeps, per axis, the whole point that reached the minimum and the one that
//! reached the maximum, so the preview can drive to that exact location.

use pathpreview_core::{Axis, Point3D};
use serde::{Deserialize, Serialize};

/// Extreme points along a single axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisExtent {
    pub min: Point3D,
    pub max: Point3D,
}

/// Per-axis extreme points of a toolpath
///
/// Ties keep the point seen first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: AxisExtent,
    pub y: AxisExtent,
    pub z: AxisExtent,
}

impl Bounds {
    /// Bounds holding a single point
    pub fn new(point: Point3D) -> Self {
        let extent = AxisExtent {
            min: point,
            max: point,
        };
        Self {
            x: extent,
            y: extent,
            z: extent,
        }
    }

    /// Fold a point sequence into bounds; `None` for an empty sequence
    pub fn fold<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3D>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::new(first), |mut bounds, point| {
            bounds.update(point);
            bounds
        }))
    }

    pub fn update(&mut self, point: Point3D) {
        for axis in Axis::ALL {
            let value = point.get(axis);
            let extent = self.extent_mut(axis);
            if value < extent.min.get(axis) {
                extent.min = point;
            }
            if value > extent.max.get(axis) {
                extent.max = point;
            }
        }
    }

    /// Extreme points along an axis
    pub fn extent(&self, axis: Axis) -> &AxisExtent {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    fn extent_mut(&mut self, axis: Axis) -> &mut AxisExtent {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }

    /// Smallest value reached along an axis
    pub fn min_value(&self, axis: Axis) -> f64 {
        self.extent(axis).min.get(axis)
    }

    /// Largest value reached along an axis
    pub fn max_value(&self, axis: Axis) -> f64 {
        self.extent(axis).max.get(axis)
    }

    /// Width of the envelope along an axis
    pub fn size(&self, axis: Axis) -> f64 {
        self.max_value(axis) - self.min_value(axis)
    }
}
