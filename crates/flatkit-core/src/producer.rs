//! Fragment producer contract
//!
//! Producers build the rule-set fragments for each integration. The factory
//! only decides which ones run, in which order, and with which resolved
//! options; what they emit is up to the implementation.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::fragment::{ConfigFragment, RulesRecord};
use crate::options::{
    GitignoreOptions, OptionsOverrides, OptionsRegExp, OptionsTypescript, OptionsUnicorn,
    ProjectType, UserIgnores,
};
use crate::result::Result;

/// Default name of the gitignore fragment
pub const GITIGNORE_FRAGMENT_NAME: &str = "flatkit/gitignore";

/// Resolved parameters for the gitignore loader
#[derive(Debug, Clone, PartialEq)]
pub struct GitignoreParams {
    pub name: String,
    pub files: Vec<String>,
    /// Missing ignore files are an error when set
    pub strict: bool,
    pub cwd: Option<PathBuf>,
    pub root: bool,
}

impl GitignoreParams {
    /// Parameters for `gitignore: true`
    pub fn lenient() -> Self {
        Self {
            name: GITIGNORE_FRAGMENT_NAME.to_string(),
            files: vec![".gitignore".to_string()],
            strict: false,
            cwd: None,
            root: false,
        }
    }

    /// Parameters for `gitignore: { ... }`; strict unless told otherwise
    pub fn from_options(options: &GitignoreOptions) -> Self {
        Self {
            name: options
                .name
                .clone()
                .unwrap_or_else(|| GITIGNORE_FRAGMENT_NAME.to_string()),
            files: options
                .files
                .clone()
                .unwrap_or_else(|| vec![".gitignore".to_string()]),
            strict: options.strict.unwrap_or(true),
            cwd: options.cwd.clone(),
            root: options.root.unwrap_or(false),
        }
    }
}

/// Resolved parameters for the typed-language producer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypescriptParams {
    /// Sub-options with the merged override map injected
    pub options: OptionsTypescript,
    pub component_exts: Vec<String>,
    pub project_type: ProjectType,
}

impl TypescriptParams {
    pub fn overrides(&self) -> RulesRecord {
        self.options.overrides.clone().unwrap_or_default()
    }
}

/// Resolved parameters for the component-framework producer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvelteParams {
    pub overrides: RulesRecord,
    /// Mirrors whether typed-language rules are enabled
    pub typescript: bool,
}

/// The set of fragment producers the factory schedules
///
/// Every method must be free of side effects beyond its return value and
/// must give each emitted fragment a unique, stable name.
#[async_trait]
pub trait ConfigProducers: Send + Sync {
    /// Global ignore patterns
    async fn ignores(&self, user: Option<UserIgnores>) -> Result<Vec<ConfigFragment>>;

    /// Ignore patterns loaded from gitignore files
    async fn gitignore(&self, params: GitignoreParams) -> Result<Vec<ConfigFragment>>;

    /// Core baseline rules
    async fn javascript(&self, options: OptionsOverrides) -> Result<Vec<ConfigFragment>>;

    /// Comment-style rules
    async fn comments(&self) -> Result<Vec<ConfigFragment>>;

    /// Runtime environment rules
    async fn node(&self) -> Result<Vec<ConfigFragment>>;

    /// Documentation-comment rules
    async fn jsdoc(&self) -> Result<Vec<ConfigFragment>>;

    /// Property and import ordering rules
    async fn perfectionist(&self) -> Result<Vec<ConfigFragment>>;

    async fn imports(&self, options: OptionsOverrides) -> Result<Vec<ConfigFragment>>;

    async fn unicorn(&self, options: OptionsUnicorn) -> Result<Vec<ConfigFragment>>;

    async fn jsx(&self) -> Result<Vec<ConfigFragment>>;

    async fn typescript(&self, params: TypescriptParams) -> Result<Vec<ConfigFragment>>;

    async fn regexp(&self, options: OptionsRegExp) -> Result<Vec<ConfigFragment>>;

    async fn svelte(&self, params: SvelteParams) -> Result<Vec<ConfigFragment>>;

    async fn jsonc(&self, options: OptionsOverrides) -> Result<Vec<ConfigFragment>>;

    /// Key-order rules for package manifests
    async fn sort_package_json(&self) -> Result<Vec<ConfigFragment>>;

    /// Key-order rules for type-system config files
    async fn sort_tsconfig(&self) -> Result<Vec<ConfigFragment>>;

    /// Suppressions for generated and minified content
    async fn disables(&self) -> Result<Vec<ConfigFragment>>;
}
