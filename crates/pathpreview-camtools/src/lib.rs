//! # PathPreview CAM Tools
//!
//! Builds the fit-check program: a plan of safety-height stops at the
//! extremes of a job's envelope, rendered as G-code.

pub mod error;
pub mod preview_program;
pub mod program_writer;

pub use error::{CamToolError, CamToolResult};
pub use preview_program::{ExtremeTarget, PreviewPlan, PreviewProgramGenerator, PreviewStep};
pub use program_writer::{PreviewProgramWriter, DEFAULT_DECIMAL_PLACES};
