//! Toolpath geometry
//!
//! This module provides:
//! - Position resolution and coordinate shift tracking
//! - Arc extreme detection
//! - Bounding envelope accumulation

pub mod arc;
pub mod bounds;
pub mod tracker;

use pathpreview_core::Point3D;

/// Ordered points of interest; a move's end point is always last
pub type PointSequence = Vec<Point3D>;

pub use arc::{resolve_arc, ArcDirection, ArcSpec};
pub use bounds::{AxisExtent, Bounds};
pub use tracker::{apply_shift, resolve_point};
