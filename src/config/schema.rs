//! config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$WEFT_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/weftwork/config.toml`
//! 3. `~/.weftwork/config.toml`
//!
//! # Validation
//!
//! Values are validated after parsing: the palette, if set, must name one
//! of the built-in fallback palettes.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::model::theme;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// palette = "purple"
/// pretty = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Fallback palette used when a document has no theme.
    pub palette: Option<String>,

    /// Pretty-print JSON output by default.
    pub pretty: Option<bool>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(palette) = &self.palette {
            let known = theme::palette_names();
            if !known
                .iter()
                .any(|name| name.eq_ignore_ascii_case(palette))
            {
                return Err(ConfigError::InvalidValue(format!(
                    "unknown palette '{}', must be one of: {}",
                    palette,
                    known.join(", ")
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GlobalConfig::default().validate().is_ok());
    }

    #[test]
    fn known_palette_passes_validation() {
        let config = GlobalConfig {
            palette: Some("Blue".to_string()),
            pretty: None,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_palette_fails_validation() {
        let config = GlobalConfig {
            palette: Some("magenta".to_string()),
            pretty: None,
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<GlobalConfig, _> = toml::from_str("palete = \"teal\"");
        assert!(result.is_err());
    }

    #[test]
    fn toml_round_trip() {
        let config = GlobalConfig {
            palette: Some("gray".to_string()),
            pretty: Some(true),
        };
        let text = toml::to_string(&config).unwrap();
        let back: GlobalConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
