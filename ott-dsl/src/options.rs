//! Parse configuration and resource limits.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Label used for `Location::source` when the caller does not name the input.
pub const DEFAULT_SOURCE_NAME: &str = "<input>";

/// Default maximum nesting of type references (`List<Map<string, User>>`).
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Default maximum source size in bytes (16 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 16 * 1024 * 1024;

/// Options for a single parse call.
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// source_name = "models/user.ott"
/// max_depth = 16
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseOptions {
    /// Label stored in every `Location::source`.
    pub source_name: String,
    /// Maximum recursion depth before `OttError::NestingTooDeep`.
    pub max_depth: usize,
    /// Maximum input size before `OttError::InputTooLarge`.
    pub max_input_bytes: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            source_name: DEFAULT_SOURCE_NAME.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl ParseOptions {
    /// Options with no resource limits (for trusted input and tests).
    pub fn unlimited() -> Self {
        Self {
            source_name: DEFAULT_SOURCE_NAME.to_string(),
            max_depth: usize::MAX,
            max_input_bytes: usize::MAX,
        }
    }

    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_input_bytes(mut self, max_input_bytes: usize) -> Self {
        self.max_input_bytes = max_input_bytes;
        self
    }

    /// Load options from TOML, rejecting unknown keys and zero limits.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let options: ParseOptions =
            toml::from_str(text).map_err(|e| ConfigError::Malformed {
                reason: e.to_string(),
            })?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_depth".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.max_input_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_input_bytes".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Malformed options: {reason}")]
    Malformed { reason: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ParseOptions::default();
        assert_eq!(options.source_name, "<input>");
        assert_eq!(options.max_depth, 64);
        assert_eq!(options.max_input_bytes, 16 * 1024 * 1024);
    }

    #[test]
    fn test_builder() {
        let options = ParseOptions::default()
            .with_source_name("user.ott")
            .with_max_depth(3)
            .with_max_input_bytes(100);
        assert_eq!(options.source_name, "user.ott");
        assert_eq!(options.max_depth, 3);
        assert_eq!(options.max_input_bytes, 100);
    }

    #[test]
    fn test_from_toml_partial() {
        let options = ParseOptions::from_toml_str("max_depth = 8\n").unwrap();
        assert_eq!(options.max_depth, 8);
        assert_eq!(options.source_name, "<input>");
    }

    #[test]
    fn test_from_toml_rejects_unknown_key() {
        let err = ParseOptions::from_toml_str("depth = 8\n").unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { .. }));
    }

    #[test]
    fn test_from_toml_rejects_zero_depth() {
        let err = ParseOptions::from_toml_str("max_depth = 0\n").unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                field: "max_depth".to_string(),
                reason: "must be at least 1".to_string(),
            }
        );
    }
}
