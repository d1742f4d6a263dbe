use anyhow::{Context, Result};
use shared::AppConfig;
use std::path::Path;

/// Reads the chart configuration. Without a path the defaults apply.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let Some(path) = path else {
        log::debug!("no config file given, using defaults");
        return Ok(AppConfig::default());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_config(&content).with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Files written by an unsupported version are rejected rather than migrated.
pub fn parse_config(content: &str) -> Result<AppConfig> {
    Ok(AppConfig::from_toml_str(content)?)
}
