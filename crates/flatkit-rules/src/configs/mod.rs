//! Built-in fragment producers
//!
//! One module per integration. Plugins are referenced by package name and
//! keep their upstream namespaces; the composer's rename pass shortens them.

pub mod comments;
pub mod disables;
pub mod ignores;
pub mod imports;
pub mod javascript;
pub mod jsdoc;
pub mod jsonc;
pub mod jsx;
pub mod node;
pub mod perfectionist;
pub mod regexp;
pub mod sort;
pub mod svelte;
pub mod typescript;
pub mod unicorn;

use flatkit_core::RulesRecord;
use serde_json::Value;

/// Plugin reference by package name
pub(crate) fn plugin(package: &str) -> Value {
    Value::String(package.to_string())
}

/// Layer caller overrides on top of built-in rules
pub(crate) fn with_overrides(mut rules: RulesRecord, overrides: Option<RulesRecord>) -> RulesRecord {
    if let Some(overrides) = overrides {
        rules.extend(overrides);
    }
    rules
}

pub(crate) fn to_strings(globs: &[&str]) -> Vec<String> {
    globs.iter().map(|glob| glob.to_string()).collect()
}
