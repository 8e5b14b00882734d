//! Circular arc extremes
//!
//! An arc's minimum or maximum along X or Y is often not at one of its end
//! points but at a cardinal point of its circle (0°, 90°, 180° or 270°).
//! This module works out which cardinal points the arc actually sweeps over.
//!
//! Angles are in degrees, measured counter-clockwise from the positive X axis
//! around the arc center and normalised into `[0, 360)`. A sweep always runs
//! counter-clockwise from `start_angle` to `end_angle`; a clockwise arc is
//! described by swapping its end points.

use pathpreview_core::{PartialPoint, Point3D, ShiftVector};
use serde::{Deserialize, Serialize};

use super::tracker::resolve_point;
use super::PointSequence;

/// Angles closer than this to a whole degree are snapped onto it
const ANGLE_SNAP_DEGREES: f64 = 1e-9;

/// Cardinal angles tested against a sweep, including their +360° aliases so
/// that a sweep crossing 0° still finds them
const CARDINAL_ANGLES: [f64; 8] = [0.0, 90.0, 180.0, 270.0, 360.0, 450.0, 540.0, 630.0];

/// Rotational sense of an arc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArcDirection {
    /// G2
    Clockwise,
    /// G3
    CounterClockwise,
}

/// Geometry of one arc command
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSpec {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub direction: ArcDirection,
    /// Sweep start, in `[0, 360)`
    pub start_angle: f64,
    /// Sweep end, in `(start_angle, start_angle + 360]`
    pub end_angle: f64,
}

impl ArcSpec {
    /// Build the arc from its start point, end point and center offset
    ///
    /// Returns `None` when the radius is not positive, in which case the arc
    /// has no usable geometry.
    pub fn new(
        start: Point3D,
        end: Point3D,
        offset_i: f64,
        offset_j: f64,
        direction: ArcDirection,
    ) -> Option<Self> {
        let radius = offset_i.hypot(offset_j);
        if !radius.is_finite() || radius <= 0.0 {
            return None;
        }

        let mut spec = Self {
            center_x: start.x + offset_i,
            center_y: start.y + offset_j,
            radius,
            direction,
            start_angle: 0.0,
            end_angle: 0.0,
        };

        let (from, to) = match direction {
            ArcDirection::Clockwise => (end, start),
            ArcDirection::CounterClockwise => (start, end),
        };
        spec.start_angle = spec.angle_of(from.x, from.y);
        spec.end_angle = spec.angle_of(to.x, to.y);

        // Crossing 0°, or a full circle when both ends coincide
        if spec.end_angle <= spec.start_angle {
            spec.end_angle += 360.0;
        }

        Some(spec)
    }

    /// Angle of a point around the arc center, in `[0, 360)`
    ///
    /// The cosine is taken from the X offset; the sign of the Y offset picks
    /// which of the two equal-cosine points is meant.
    pub fn angle_of(&self, x: f64, y: f64) -> f64 {
        let cos = ((x - self.center_x) / self.radius).clamp(-1.0, 1.0);
        let mut angle = cos.acos().to_degrees();
        if y - self.center_y < 0.0 {
            angle = 360.0 - angle;
        }

        let whole = angle.round();
        if (angle - whole).abs() < ANGLE_SNAP_DEGREES {
            angle = whole;
        }
        if angle >= 360.0 {
            angle -= 360.0;
        }
        angle
    }

    /// Swept angle in degrees, in `(0, 360]`
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Whether an angle lies on the swept part of the circle
    ///
    /// The start is inclusive and the end exclusive.
    pub fn contains_angle(&self, angle: f64) -> bool {
        self.start_angle <= angle && angle < self.end_angle
    }

    /// Point on the circle at a cardinal angle, with the given Z
    pub fn cardinal_point(&self, angle: f64, z: f64) -> Point3D {
        let (x, y) = match (angle.rem_euclid(360.0) / 90.0).round() as u32 {
            1 => (self.center_x, self.center_y + self.radius),
            2 => (self.center_x - self.radius, self.center_y),
            3 => (self.center_x, self.center_y - self.radius),
            _ => (self.center_x + self.radius, self.center_y),
        };
        Point3D { x, y, z }
    }

    /// Cardinal points on the swept part of the circle, in ascending angle
    pub fn swept_cardinal_points(&self, z: f64) -> PointSequence {
        CARDINAL_ANGLES
            .iter()
            .copied()
            .filter(|&angle| self.contains_angle(angle))
            .map(|angle| self.cardinal_point(angle, z))
            .collect()
    }
}

/// Resolve an arc line into its significant points
///
/// Returns the swept cardinal points followed by the arc's end point. A
/// degenerate arc (radius ≤ 0) returns an empty sequence. Missing `I` or `J`
/// offsets count as zero. Cardinal points take the Z of the end point.
pub fn resolve_arc(
    partial: &PartialPoint,
    direction: ArcDirection,
    previous: Point3D,
    shift: ShiftVector,
) -> PointSequence {
    let end = resolve_point(partial, previous, shift);
    let offset_i = partial.i.unwrap_or(0.0);
    let offset_j = partial.j.unwrap_or(0.0);

    let Some(spec) = ArcSpec::new(previous, end, offset_i, offset_j, direction) else {
        return PointSequence::new();
    };

    let mut points = spec.swept_cardinal_points(end.z);
    points.push(end);
    points
}
