//! # PathPreview Analyzer
//!
//! G-code path geometry resolution for PathPreview.
//! Classifies command lines, tracks position and coordinate shifts, finds
//! the true extremes of circular arcs and folds everything into a bounding
//! envelope.

pub mod analyzer;
pub mod gcode;
pub mod geometry;
pub mod source;

pub use analyzer::{AnalyzerState, MoveStatistics, PathAnalysis, PathAnalyzer, StepOutcome};

pub use gcode::{parse_axes, remove_comments, CommandKind};

pub use geometry::{
    apply_shift, resolve_arc, resolve_point, ArcDirection, ArcSpec, AxisExtent, Bounds,
    PointSequence,
};

pub use source::SourceProgram;
