//! Options file discovery and loading

use super::project_file::ProjectFile;
use crate::error::FlatkitError;
use crate::result::Result;
use std::path::{Path, PathBuf};

/// Options file names, in discovery priority order
pub const CONFIG_FILE_NAMES: [&str; 5] = [
    ".flatkitrc.json",
    ".flatkitrc.toml",
    "flatkit.yaml",
    "flatkit.yml",
    "flatkit.json",
];

/// Loader for discovering and loading options files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Auto-discover an options file by traversing upward from start_path
    pub fn auto_discover(start_path: &Path) -> Result<Option<PathBuf>> {
        let current = start_path
            .canonicalize()
            .map_err(|e| FlatkitError::config_error(format!("Invalid path: {e}")))?;

        for dir in current.ancestors() {
            for filename in CONFIG_FILE_NAMES {
                let config_path = dir.join(filename);
                if config_path.is_file() {
                    tracing::debug!("Found options file: {}", config_path.display());
                    return Ok(Some(config_path));
                }
            }
        }

        Ok(None)
    }

    /// Load an options file from a specific path
    pub fn load_from_file(path: &Path) -> Result<ProjectFile> {
        ProjectFile::load(path).map_err(|e| {
            FlatkitError::config_error(format!(
                "Failed to load options from '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Load from an explicit path, or auto-discover from `start_dir`
    ///
    /// Discovery finding nothing is not an error: the defaults apply.
    pub fn load(custom_path: Option<&Path>, start_dir: Option<&Path>) -> Result<ProjectFile> {
        if let Some(path) = custom_path {
            if !path.exists() {
                return Err(FlatkitError::config_error(format!(
                    "Options file not found: {}",
                    path.display()
                )));
            }
            return Self::load_from_file(path);
        }

        let search_dir = start_dir.unwrap_or_else(|| Path::new("."));
        match Self::auto_discover(search_dir)? {
            Some(path) => Self::load_from_file(&path),
            None => {
                tracing::info!("No options file found, using defaults");
                Ok(ProjectFile::default())
            }
        }
    }
}
