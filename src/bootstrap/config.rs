//! Configuration loader
//!
//! Reads a TOML file and maps it onto [`AppConfig`]. Missing keys keep their
//! defaults; I/O and parse failures are reported with the file path.

use anyhow::Context;
use std::path::{Path, PathBuf};
use nope_core::AppConfig;

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
/// - A key has the wrong type (mapping error)
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
        .with_context(|| format!("Invalid config file: {}", config_path.display()))
}

/// Load the given file, or fall back to defaults when no path was passed.
pub fn resolve_config(config_path: Option<&Path>) -> anyhow::Result<AppConfig> {
    match config_path {
        Some(path) => load_config(path.to_path_buf()),
        None => Ok(AppConfig::default()),
    }
}
