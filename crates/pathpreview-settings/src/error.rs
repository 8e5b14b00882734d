//! Error types for the settings crate.
//!
//! This module provides structured error types for configuration loading
//! and validation.

use thiserror::Error;

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The configuration file could not be loaded.
    #[error("Failed to load settings: {0}")]
    LoadError(String),

    /// A configuration value is invalid.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_setting_message() {
        let err = SettingsError::InvalidSetting {
            key: "preview.output_prefix".to_string(),
            reason: "must not contain path separators".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid setting 'preview.output_prefix': must not contain path separators"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: SettingsError = json_err.into();
        assert!(matches!(err, SettingsError::JsonError(_)));
    }
}
