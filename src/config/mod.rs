//! Configuration file loading and parsing.
//!
//! The server runs fine with no configuration at all (the knowledge base
//! is embedded), so the default config file is optional:
//!
//! 1. A path given via the CLI must exist and parse - errors are fatal.
//! 2. The default location (`~/.electronics-mcp/config.json`) is used when
//!    present and silently skipped when absent.

mod settings;

pub use settings::{Config, LoggingConfig};

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Returns the default configuration directory (`~/.electronics-mcp/`).
#[must_use]
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".electronics-mcp"))
}

/// Returns the platform-specific default configuration file path.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    default_config_dir().map(|p| p.join("config.json"))
}

/// Loads the configuration.
///
/// With an explicit `path` the file must exist; with `None` a missing
/// default file yields `Config::default()`.
///
/// # Errors
///
/// Returns an error if an explicitly given file is missing, or any file
/// cannot be read, parsed, or validated.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(Config::default()),
        },
    };

    if !config_path.exists() {
        return Err(ConfigError::NotFound { path: config_path });
    }

    let contents = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::ReadError {
        path: config_path.clone(),
        source: e,
    })?;

    let config: Config = serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: config_path.clone(),
        source: e,
    })?;

    config.validate()?;

    Ok(config)
}
