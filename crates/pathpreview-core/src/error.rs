//! Error handling for PathPreview
//!
//! Provides the error raised while analyzing a program: malformed axis
//! words and paths without motion.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// G-Code error type
///
/// Represents errors found while analyzing the source program.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GcodeError {
    /// Axis word carries a value that is not a decimal number
    #[error("Invalid parameter '{param}' at line {line_number}: {reason} (line: \"{line}\")")]
    InvalidParameter {
        /// The 1-based line number where the invalid parameter was found.
        line_number: usize,
        /// The offending token.
        param: String,
        /// The reason the parameter is invalid.
        reason: String,
        /// The full source line.
        line: String,
    },

    /// No motion command produced a point, so the path has no extent
    #[error("No motion commands found, path has no extent")]
    EmptyPath,
}

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, GcodeError>;
