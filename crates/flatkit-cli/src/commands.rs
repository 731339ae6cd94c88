//! Command implementations

use anyhow::Context;
use flatkit_core::{ConfigFragment, ConfigLoader, FlatConfigFactory, options_schema};
use flatkit_rules::BuiltinProducers;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use crate::OutputFormat;
use crate::output::{render_configs, render_names};

/// Resolve options and print the fragment list
pub async fn print_command(
    config_path: Option<PathBuf>,
    cwd: Option<PathBuf>,
    no_rename: bool,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let configs = resolve_configs(config_path.as_deref(), cwd.as_deref(), no_rename).await?;
    println!("{}", render_configs(&configs, format)?);
    Ok(())
}

/// Resolve options and print fragment names
pub async fn names_command(config_path: Option<PathBuf>, cwd: Option<PathBuf>) -> anyhow::Result<()> {
    let configs = resolve_configs(config_path.as_deref(), cwd.as_deref(), false).await?;
    println!("{}", render_names(&configs));
    Ok(())
}

/// Print or write the options JSON Schema
pub fn schema_command(output: Option<PathBuf>) -> anyhow::Result<()> {
    let schema = options_schema()?;
    let content = serde_json::to_string_pretty(&schema).context("Failed to serialize schema")?;

    match output {
        Some(path) => {
            std::fs::write(&path, content)
                .with_context(|| format!("Failed to write schema to {}", path.display()))?;
            info!("Wrote options schema to {}", path.display());
        }
        None => println!("{content}"),
    }

    Ok(())
}

/// Load options, compose with the built-in producers and resolve
///
/// `cwd` becomes the process working directory so options discovery, the
/// dependency check and gitignore loading all see the same directory.
async fn resolve_configs(
    config_path: Option<&Path>,
    cwd: Option<&Path>,
    no_rename: bool,
) -> anyhow::Result<Vec<ConfigFragment>> {
    let config_path = config_path
        .map(std::path::absolute)
        .transpose()
        .context("Invalid options file path")?;

    if let Some(cwd) = cwd {
        std::env::set_current_dir(cwd)
            .with_context(|| format!("Cannot change directory to {}", cwd.display()))?;
    }

    let project = ConfigLoader::load(config_path.as_deref(), None)?;
    let mut options = project.options;
    if no_rename {
        options.auto_rename_plugins = Some(false);
    }
    debug!("Composing {} caller fragments", project.configs.len());

    let factory = FlatConfigFactory::new(Arc::new(BuiltinProducers::new()));
    let composer = factory.compose(&options, project.configs)?;
    let configs = composer.to_configs().await?;

    info!("Resolved {} fragments", configs.len());
    Ok(configs)
}
