//! Dependency presence detection
//!
//! The typed-language default depends on whether a package is installed.
//! That check touches the filesystem, so it sits behind [`DependencyOracle`]
//! and is only consulted when the corresponding switch is absent.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Answers "is this package installed?"
pub trait DependencyOracle: Send + Sync {
    fn is_installed(&self, package: &str) -> bool;
}

/// Looks for `node_modules/<package>/package.json` from a directory upward
#[derive(Debug, Clone)]
pub struct NodeModulesOracle {
    root: PathBuf,
}

impl NodeModulesOracle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Oracle rooted at the process working directory
    pub fn from_current_dir() -> Self {
        let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DependencyOracle for NodeModulesOracle {
    fn is_installed(&self, package: &str) -> bool {
        let found = self.root.ancestors().any(|dir| {
            dir.join("node_modules")
                .join(package)
                .join("package.json")
                .is_file()
        });
        tracing::debug!("Package '{}' installed: {}", package, found);
        found
    }
}

/// Fixed answer set, for tests and embedders that already know
#[derive(Debug, Clone, Default)]
pub struct StaticOracle {
    installed: HashSet<String>,
}

impl StaticOracle {
    pub fn new<I, S>(installed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            installed: installed.into_iter().map(Into::into).collect(),
        }
    }

    /// Oracle that reports nothing as installed
    pub fn empty() -> Self {
        Self::default()
    }
}

impl DependencyOracle for StaticOracle {
    fn is_installed(&self, package: &str) -> bool {
        self.installed.contains(package)
    }
}
