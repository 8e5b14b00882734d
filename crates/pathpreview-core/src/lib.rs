//! # PathPreview Core
//!
//! Core types and error handling for PathPreview.
//! Provides the point, partial-point and shift models that every
//! analysis stage passes along.

pub mod data;
pub mod error;

pub use data::{Axis, PartialPoint, Point3D, ShiftVector};

pub use error::{GcodeError, Result};
