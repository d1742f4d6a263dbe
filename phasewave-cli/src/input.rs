use anyhow::{Context, Result};
use shared::{SampleInput, StatSample};
use std::path::Path;

pub fn load_samples(path: &Path) -> Result<Vec<StatSample>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read samples file: {}", path.display()))?;

    let samples =
        parse_samples(&content).with_context(|| format!("Failed to parse samples file: {}", path.display()))?;
    log::info!("loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Accepts a flat sample array, a grouped array, or a report object with a `stats` field.
pub fn parse_samples(content: &str) -> Result<Vec<StatSample>> {
    let input: SampleInput = serde_json::from_str(content)?;
    Ok(input.into_samples())
}
