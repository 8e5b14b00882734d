//! Configuration and settings management for PathPreview
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML files; the default file lives in the platform config directory.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{SettingsError, SettingsResult};

/// Safety height used when the requested one is unusable
pub const DEFAULT_SAFETY_HEIGHT: f64 = 25.0;

/// Prefix put in front of the source file name for the preview program
pub const DEFAULT_OUTPUT_PREFIX: &str = "PathPreview_";

/// Default number of decimals for output coordinates
pub const DEFAULT_DECIMAL_PLACES: usize = 3;

const MAX_DECIMAL_PLACES: usize = 6;

/// Non-fatal problem found in a setting, reported back to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDiagnostic {
    /// Setting the diagnostic refers to
    pub key: String,
    pub message: String,
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.message)
    }
}

/// A value after sanitising, with a diagnostic when it had to be replaced
#[derive(Debug, Clone, PartialEq)]
pub struct Sanitized<T> {
    pub value: T,
    pub diagnostic: Option<ConfigDiagnostic>,
}

/// Safety height sanitising
pub struct SafetyHeight;

impl SafetyHeight {
    /// Round to whole units and replace non-positive values with the default
    pub fn sanitize(raw: f64) -> Sanitized<f64> {
        let rounded = raw.round();
        if rounded.is_finite() && rounded > 0.0 {
            return Sanitized {
                value: rounded,
                diagnostic: None,
            };
        }

        let diagnostic = ConfigDiagnostic {
            key: "preview.safety_height".to_string(),
            message: format!(
                "Number invalid for safety height ({raw}). Defaulting to Z={DEFAULT_SAFETY_HEIGHT}."
            ),
        };
        warn!("{}", diagnostic);
        Sanitized {
            value: DEFAULT_SAFETY_HEIGHT,
            diagnostic: Some(diagnostic),
        }
    }
}

/// Preview program settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSettings {
    /// Z height at which extremes are approached
    pub safety_height: f64,
    /// Prefix for the generated file name
    pub output_prefix: String,
    /// Decimals written for each coordinate
    pub decimal_places: usize,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            safety_height: DEFAULT_SAFETY_HEIGHT,
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }
}

impl PreviewSettings {
    /// Preview program path for a source file: same directory, prefixed name
    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output.nc".to_string());
        input.with_file_name(format!("{}{}", self.output_prefix, name))
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Preview program settings
    pub preview: PreviewSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform default config file, e.g. `~/.config/pathpreview/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pathpreview").join("config.toml"))
    }

    /// Load an explicit config file, else the default file if present, else defaults
    pub fn load_or_default(explicit: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::load_from_file(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(SettingsError::LoadError(
                "Config file must be .json or .toml".to_string(),
            ));
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Validate configuration
    ///
    /// The safety height is not rejected here; it is sanitised where it is
    /// used so an unusable value falls back to the default with a diagnostic.
    pub fn validate(&self) -> SettingsResult<()> {
        let prefix = &self.preview.output_prefix;
        if prefix.is_empty() {
            return Err(SettingsError::InvalidSetting {
                key: "preview.output_prefix".to_string(),
                reason: "must not be empty, the preview would replace its source file"
                    .to_string(),
            });
        }
        if prefix.contains('/') || prefix.contains('\\') {
            return Err(SettingsError::InvalidSetting {
                key: "preview.output_prefix".to_string(),
                reason: "must not contain path separators".to_string(),
            });
        }

        if self.preview.decimal_places > MAX_DECIMAL_PLACES {
            return Err(SettingsError::InvalidSetting {
                key: "preview.decimal_places".to_string(),
                reason: format!("must be at most {MAX_DECIMAL_PLACES}"),
            });
        }

        Ok(())
    }
}
