//! Fit-check waypoint plan
//!
//! Turns the bounding envelope of a job into the ordered list of stops an
//! operator steps through to check that the workpiece fits: an advisory for
//! the deepest Z, the origin, then Ymin, Xmin, Ymax and Xmax. Every physical
//! stop is approached at the safety height.

use pathpreview_analyzer::Bounds;
use pathpreview_core::{Axis, Point3D};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{CamToolError, CamToolResult};

/// Extreme X/Y location visited by the preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtremeTarget {
    Ymin,
    Xmin,
    Ymax,
    Xmax,
}

impl ExtremeTarget {
    /// Visiting order of the preview
    pub const ORDER: [ExtremeTarget; 4] = [
        ExtremeTarget::Ymin,
        ExtremeTarget::Xmin,
        ExtremeTarget::Ymax,
        ExtremeTarget::Xmax,
    ];

    /// The point of the envelope this target refers to
    pub fn select(&self, bounds: &Bounds) -> Point3D {
        match self {
            ExtremeTarget::Ymin => bounds.extent(Axis::Y).min,
            ExtremeTarget::Xmin => bounds.extent(Axis::X).min,
            ExtremeTarget::Ymax => bounds.extent(Axis::Y).max,
            ExtremeTarget::Xmax => bounds.extent(Axis::X).max,
        }
    }
}

impl std::fmt::Display for ExtremeTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ymin => write!(f, "Ymin"),
            Self::Xmin => write!(f, "Xmin"),
            Self::Ymax => write!(f, "Ymax"),
            Self::Xmax => write!(f, "Xmax"),
        }
    }
}

/// One step of the preview plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PreviewStep {
    /// Message only; the deepest Z of the job is never driven to
    ZminAdvisory { z_min: f64 },
    /// Rapid to X0 Y0 at safety height
    Origin { position: Point3D },
    /// Pause, then rapid to an extreme at safety height
    Extreme {
        target: ExtremeTarget,
        position: Point3D,
    },
}

impl PreviewStep {
    /// Physical position of the step, if it moves the machine
    pub fn position(&self) -> Option<Point3D> {
        match self {
            PreviewStep::ZminAdvisory { .. } => None,
            PreviewStep::Origin { position } | PreviewStep::Extreme { position, .. } => {
                Some(*position)
            }
        }
    }
}

/// Ordered preview steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewPlan {
    pub safety_height: f64,
    pub steps: Vec<PreviewStep>,
}

impl PreviewPlan {
    /// Positions the machine is driven to, in order
    pub fn waypoints(&self) -> Vec<Point3D> {
        self.steps.iter().filter_map(PreviewStep::position).collect()
    }
}

/// Builds the preview plan from a bounding envelope
#[derive(Debug, Clone)]
pub struct PreviewProgramGenerator {
    safety_height: f64,
}

impl PreviewProgramGenerator {
    /// Create a generator for a validated safety height
    ///
    /// # Errors
    /// Fails when the height is not a positive finite number
    pub fn new(safety_height: f64) -> CamToolResult<Self> {
        if !safety_height.is_finite() || safety_height <= 0.0 {
            return Err(CamToolError::InvalidParameters(format!(
                "safety height must be positive, got {safety_height}"
            )));
        }
        Ok(Self { safety_height })
    }

    pub fn generate(&self, bounds: &Bounds) -> PreviewPlan {
        let h = self.safety_height;
        let z_min = bounds.min_value(Axis::Z);
        info!("Found Zmin: {:.3}", z_min);

        let mut steps = Vec::with_capacity(2 + ExtremeTarget::ORDER.len());
        steps.push(PreviewStep::ZminAdvisory { z_min });
        steps.push(PreviewStep::Origin {
            position: Point3D { x: 0.0, y: 0.0, z: h },
        });

        for target in ExtremeTarget::ORDER {
            let position = target.select(bounds).with(Axis::Z, h);
            info!(
                "Found {} at coordinates {:.3} | {:.3} | {:.3}",
                target, position.x, position.y, position.z
            );
            steps.push(PreviewStep::Extreme { target, position });
        }

        PreviewPlan {
            safety_height: h,
            steps,
        }
    }
}
