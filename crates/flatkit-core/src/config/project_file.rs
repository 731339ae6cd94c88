//! Options file structure

use schemars::{JsonSchema, schema_for};
use serde::Deserialize;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;

use crate::error::FlatkitError;
use crate::fragment::ConfigFragment;
use crate::options::OptionsConfig;
use crate::result::Result;

/// Parsed options file
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    /// Root options passed to the factory
    #[serde(default)]
    pub options: OptionsConfig,

    /// Fragments appended after the generated ones, in order
    #[serde(default)]
    pub configs: Vec<ConfigFragment>,
}

impl ProjectFile {
    /// Load from file, picking the format from the extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| FlatkitError::io_error(path, e))?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        match extension {
            "yaml" | "yml" => Self::from_yaml(&content),
            "toml" => Self::from_toml(&content),
            _ => Self::from_json(&content),
        }
    }

    /// Parse JSON with comments and trailing commas
    pub fn from_json(content: &str) -> Result<Self> {
        json5::from_str(content)
            .map_err(|e| FlatkitError::config_error(format!("Invalid JSON options file: {e}")))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| FlatkitError::config_error(format!("Invalid YAML options file: {e}")))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| FlatkitError::config_error(format!("Invalid TOML options file: {e}")))
    }
}

/// JSON Schema for options files
pub fn options_schema() -> Result<Value> {
    let schema = schema_for!(ProjectFile);
    let mut schema_json = serde_json::to_value(schema)
        .map_err(|e| FlatkitError::internal_error(format!("Schema serialization failed: {e}")))?;

    schema_json["title"] = json!("Flatkit Options");
    schema_json["description"] =
        json!("Options file schema for flatkit - validates flatkit.json and .flatkitrc files");

    Ok(schema_json)
}
