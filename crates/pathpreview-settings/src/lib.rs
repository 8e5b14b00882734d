//! PathPreview Settings Crate
//!
//! Handles application configuration and safety height sanitising.

pub mod config;
pub mod error;

pub use config::{
    Config, ConfigDiagnostic, PreviewSettings, SafetyHeight, Sanitized, DEFAULT_DECIMAL_PLACES,
    DEFAULT_OUTPUT_PREFIX, DEFAULT_SAFETY_HEIGHT,
};
pub use error::{SettingsError, SettingsResult};
