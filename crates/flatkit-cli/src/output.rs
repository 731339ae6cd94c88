//! Output formatting

use anyhow::Context;
use flatkit_core::ConfigFragment;

use crate::OutputFormat;

/// Label for fragments without a name (the fused root fragment)
pub const UNNAMED: &str = "<unnamed>";

/// Render the fragment list in the requested format
pub fn render_configs(configs: &[ConfigFragment], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(configs).context("Failed to serialize fragments as JSON")
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(configs).context("Failed to serialize fragments as YAML")
        }
    }
}

/// One fragment name per line
pub fn render_names(configs: &[ConfigFragment]) -> String {
    configs
        .iter()
        .map(|config| config.name.as_deref().unwrap_or(UNNAMED))
        .collect::<Vec<_>>()
        .join("\n")
}
