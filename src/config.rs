//! Field configuration
//!
//! The construction-time settings of a numeric field: locale, digit limits
//! and an optional default value. Stored as YAML in
//! `~/.config/numeric-field/config.yaml`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::format::{PatternError, DEFAULT_DIGITS_AFTER_SEPARATOR};

/// Value shown when the field is cleared, rendered through a printf-style pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultValue {
    pub value: f64,
    /// e.g. `"%.2f"`
    #[serde(default = "default_pattern")]
    pub pattern: String,
}

fn default_pattern() -> String {
    "%.2f".to_string()
}

/// Numeric field configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Locale id used for separators (e.g., "en-US", "de-DE")
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Maximum integer digits (None = unbounded)
    #[serde(default)]
    pub digits_before_decimal: Option<usize>,

    /// Maximum fraction digits
    #[serde(default = "default_digits_after")]
    pub digits_after_decimal: usize,

    #[serde(default)]
    pub default_value: Option<DefaultValue>,
}

fn default_locale() -> String {
    crate::locale::DEFAULT_LOCALE.id.to_string()
}

fn default_digits_after() -> usize {
    DEFAULT_DIGITS_AFTER_SEPARATOR
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            digits_before_decimal: None,
            digits_after_decimal: default_digits_after(),
            default_value: None,
        }
    }
}

impl FieldConfig {
    /// Load config from the user config dir, or return defaults if missing or invalid
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        if crate::locale::lookup(&config.locale).is_none() {
            tracing::warn!(
                "Config locale '{}' is not known; default separators will be used",
                config.locale
            );
        }
        Ok(config)
    }

    /// Serialize config to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

/// Errors from loading or applying configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    /// Grouping and decimal separator are the same character
    SameSeparators(char),
    /// Default value pattern could not be rendered
    Pattern(PatternError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::SameSeparators(c) => {
                write!(f, "grouping and decimal separator are both {:?}", c)
            }
            ConfigError::Pattern(e) => write!(f, "Default value pattern: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<PatternError> for ConfigError {
    fn from(e: PatternError) -> Self {
        ConfigError::Pattern(e)
    }
}
