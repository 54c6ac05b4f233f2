//! Render configuration
//!
//! Defaults reproduce the standard output layout exactly. A config file only
//! needs the keys it changes:
//!
//! ```toml
//! indent = "\t"
//! blank_line_between_entries = false
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Layout options shared by the renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Prefix written before every field line
    pub indent: String,
    /// Separate entries with an empty line (simplified and raw output)
    pub blank_line_between_entries: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            blank_line_between_entries: true,
        }
    }
}

impl FormatConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load and validate configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent.is_empty() {
            return Err(ConfigError::InvalidValue(
                "indent must not be empty".to_string(),
            ));
        }

        if self
            .indent
            .chars()
            .any(|c| !c.is_whitespace() || c == '\n' || c == '\r')
        {
            return Err(ConfigError::InvalidValue(
                "indent must be spaces or tabs".to_string(),
            ));
        }

        Ok(())
    }
}
