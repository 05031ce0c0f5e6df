//! Shared plumbing for the headless drivers: logging setup and level/config loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chase_core::{Level, SimConfig};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "chase_core=info,chase_tools=info";

pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).compact().init();
}

/// Reads a level file, or falls back to the classic layout.
pub fn load_level(path: Option<&Path>) -> Result<Level> {
    let Some(path) = path else {
        return Ok(Level::classic());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read level file: {}", path.display()))?;
    Level::from_toml_str(&text)
        .with_context(|| format!("Failed to parse level file: {}", path.display()))
}

/// Reads a simulation config file, or falls back to the defaults.
pub fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    SimConfig::from_toml_str(&text)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}
