//! Game configuration
//!
//! Defaults reproduce the fixed widget behaviour: 10 points per evaluation,
//! six fractional digits, `"Error"` on division by zero, no entry limit.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed JSON
    #[error("Configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Well-formed but unusable value
    #[error("Invalid configuration for `{field}`: {message}")]
    Invalid {
        /// Offending key
        field: &'static str,
        /// What is wrong with it
        message: String,
    },
}

impl ConfigError {
    fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            message: message.into(),
        }
    }
}

/// Engine and scoring configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Score awarded per successful Equals
    pub points_per_evaluation: u32,
    /// Fractional digits kept when rounding results
    pub display_precision: u32,
    /// Display text shown on division by zero
    pub error_marker: String,
    /// Optional cap on typed entry length (digits and point)
    pub max_entry_len: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            points_per_evaluation: Self::DEFAULT_POINTS,
            display_precision: Self::DEFAULT_PRECISION,
            error_marker: Self::DEFAULT_ERROR_MARKER.to_string(),
            max_entry_len: None,
        }
    }
}

impl GameConfig {
    /// Points per successful evaluation
    pub const DEFAULT_POINTS: u32 = 10;
    /// Fractional digits kept in results
    pub const DEFAULT_PRECISION: u32 = 6;
    /// Division-by-zero marker
    pub const DEFAULT_ERROR_MARKER: &'static str = "Error";
    /// Largest precision `f64` can meaningfully carry
    pub const MAX_PRECISION: u32 = 15;

    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set points per evaluation
    #[must_use]
    pub const fn with_points_per_evaluation(mut self, points: u32) -> Self {
        self.points_per_evaluation = points;
        self
    }

    /// Set display precision
    #[must_use]
    pub const fn with_display_precision(mut self, places: u32) -> Self {
        self.display_precision = places;
        self
    }

    /// Set the error marker
    #[must_use]
    pub fn with_error_marker(mut self, marker: impl Into<String>) -> Self {
        self.error_marker = marker.into();
        self
    }

    /// Set the maximum entry length
    #[must_use]
    pub const fn with_max_entry_len(mut self, len: usize) -> Self {
        self.max_entry_len = Some(len);
        self
    }

    /// Parses and validates a JSON configuration; missing keys take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the values the engine relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display_precision > Self::MAX_PRECISION {
            return Err(ConfigError::invalid(
                "display_precision",
                format!("must be at most {}", Self::MAX_PRECISION),
            ));
        }
        if self.error_marker.is_empty() {
            return Err(ConfigError::invalid("error_marker", "must not be empty"));
        }
        if self
            .error_marker
            .chars()
            .any(|c| c.is_ascii_digit() || c == '.')
        {
            return Err(ConfigError::invalid(
                "error_marker",
                "must not contain digits or a decimal point",
            ));
        }
        if self.max_entry_len == Some(0) {
            return Err(ConfigError::invalid("max_entry_len", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.points_per_evaluation, 10);
        assert_eq!(config.display_precision, 6);
        assert_eq!(config.error_marker, "Error");
        assert_eq!(config.max_entry_len, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = GameConfig::new()
            .with_points_per_evaluation(5)
            .with_display_precision(2)
            .with_error_marker("Oops")
            .with_max_entry_len(12);
        assert_eq!(config.points_per_evaluation, 5);
        assert_eq!(config.display_precision, 2);
        assert_eq!(config.error_marker, "Oops");
        assert_eq!(config.max_entry_len, Some(12));
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let config = GameConfig::from_json(r#"{"points_per_evaluation": 25}"#).unwrap();
        assert_eq!(config.points_per_evaluation, 25);
        assert_eq!(config.display_precision, 6);
        assert_eq!(config.error_marker, "Error");
    }

    #[test]
    fn test_from_json_empty_object() {
        assert_eq!(GameConfig::from_json("{}").unwrap(), GameConfig::default());
    }

    #[test]
    fn test_from_json_malformed() {
        let err = GameConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Configuration parse error"));
    }

    #[test]
    fn test_rejects_excessive_precision() {
        let err = GameConfig::from_json(r#"{"display_precision": 16}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "display_precision",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_empty_marker() {
        let err = GameConfig::new().with_error_marker("").validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "error_marker", .. }));
    }

    #[test]
    fn test_rejects_numeric_marker() {
        assert!(GameConfig::new().with_error_marker("E1").validate().is_err());
        assert!(GameConfig::new().with_error_marker("E.").validate().is_err());
    }

    #[test]
    fn test_rejects_zero_entry_len() {
        let err = GameConfig::new().with_max_entry_len(0).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration for `max_entry_len`: must be at least 1"
        );
    }

    #[test]
    fn test_json_roundtrip() {
        let config = GameConfig::new().with_max_entry_len(9);
        let json = config.to_json().unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }
}
