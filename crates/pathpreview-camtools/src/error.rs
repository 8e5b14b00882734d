//! Error types for the CAM tools crate.
//!
//! Write failures are kept apart from analysis errors so the caller can
//! report them as plain I/O problems.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing the preview program.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// Invalid parameters were provided to the generator.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// The preview program could not be written to its destination.
    #[error("Could not create file {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for CAM tool operations.
pub type CamToolResult<T> = Result<T, CamToolError>;
