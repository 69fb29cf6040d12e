//! # Configuration Loader
//!
//! Reads the TOML document and maps it onto [`EngineConfig`]. Pure data
//! loading: rules are checked later, when wiring builds the domain values.

use std::path::Path;

use anyhow::Context;
use kt_core::config::EngineConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML or does not match the config shape
pub fn load_config(config_path: &Path) -> anyhow::Result<EngineConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    EngineConfig::from_toml_str(&content).context("Failed to parse config as TOML")
}
