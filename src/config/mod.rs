//! config
//!
//! Global configuration loading and validation.
//!
//! Configuration is optional: a missing file simply yields the defaults.
//! A file that exists but fails to parse or validate is an error — silently
//! ignoring a user's config hides typos.

use std::env;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

pub mod schema;

pub use schema::GlobalConfig;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "WEFT_CONFIG";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Load the global config, or defaults when no file exists.
///
/// # Errors
///
/// Returns an error only when a config file exists but cannot be read,
/// parsed, or validated.
pub fn load_global() -> Result<GlobalConfig, ConfigError> {
    let Some(path) = discover_path() else {
        return Ok(GlobalConfig::default());
    };
    debug!(path = %path.display(), "loading global config");
    let text = fs::read_to_string(&path)?;
    let config: GlobalConfig = toml::from_str(&text)?;
    config.validate()?;
    Ok(config)
}

/// First existing config file in precedence order, if any.
///
/// `$WEFT_CONFIG` is honored even when the file does not exist, so an
/// explicit override never silently falls through to another location.
fn discover_path() -> Option<PathBuf> {
    if let Ok(explicit) = env::var(CONFIG_ENV_VAR) {
        if !explicit.is_empty() {
            return Some(PathBuf::from(explicit));
        }
    }
    if let Some(config_dir) = dirs::config_dir() {
        let candidate = config_dir.join("weftwork").join("config.toml");
        if candidate.exists() {
            return Some(candidate);
        }
    }
    if let Some(home) = dirs::home_dir() {
        let candidate = home.join(".weftwork").join("config.toml");
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}
