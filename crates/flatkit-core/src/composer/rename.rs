//! Plugin namespace renaming
//!
//! Rewrites plugin keys and rule-name prefixes (`from/rule` to `to/rule`).
//! A table is only accepted when no target is also a source, which keeps
//! the pass idempotent.

use indexmap::IndexMap;

use crate::error::FlatkitError;
use crate::fragment::{ConfigFragment, PluginMap, RulesRecord};
use crate::result::Result;

/// Immutable namespace-alias table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginRenames {
    map: IndexMap<String, String>,
}

impl PluginRenames {
    /// Build a table, rejecting chains that would break idempotence
    pub fn new<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let renames = Self {
            map: entries
                .into_iter()
                .map(|(from, to)| (from.into(), to.into()))
                .collect(),
        };
        renames.validate()?;
        Ok(renames)
    }

    /// `@typescript-eslint` → `ts`, `import-lite` → `import`, `n` → `node`
    pub fn defaults() -> Self {
        Self {
            map: IndexMap::from([
                ("@typescript-eslint".to_string(), "ts".to_string()),
                ("import-lite".to_string(), "import".to_string()),
                ("n".to_string(), "node".to_string()),
            ]),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn get(&self, namespace: &str) -> Option<&str> {
        self.map.get(namespace).map(String::as_str)
    }

    /// Add entries from another table; later entries win
    pub fn extend(&mut self, other: PluginRenames) {
        self.map.extend(other.map);
    }

    /// Check that renaming twice equals renaming once
    pub fn validate(&self) -> Result<()> {
        for (from, to) in &self.map {
            if from == to {
                continue;
            }
            let chained = self
                .map
                .keys()
                .find(|source| *source == to || to.starts_with(&format!("{source}/")));
            if let Some(source) = chained {
                return Err(FlatkitError::InvalidRenames {
                    message: format!("'{from}' is renamed to '{to}', which is itself renamed from '{source}'"),
                });
            }
        }
        Ok(())
    }

    /// Rename the namespace prefix of a single rule name
    pub fn rename_rule(&self, rule: &str) -> String {
        for (from, to) in &self.map {
            if let Some(rest) = rule.strip_prefix(from.as_str())
                && rest.starts_with('/')
            {
                return format!("{to}{rest}");
            }
        }
        rule.to_string()
    }

    pub fn rename_rules(&self, rules: &RulesRecord) -> RulesRecord {
        rules
            .iter()
            .map(|(rule, entry)| (self.rename_rule(rule), entry.clone()))
            .collect()
    }

    pub fn rename_plugin_map(&self, plugins: &PluginMap) -> PluginMap {
        plugins
            .iter()
            .map(|(namespace, plugin)| {
                let renamed = self.get(namespace).unwrap_or(namespace).to_string();
                (renamed, plugin.clone())
            })
            .collect()
    }

    /// Rename one fragment into a fresh copy
    pub fn rename_fragment(&self, fragment: &ConfigFragment) -> ConfigFragment {
        let mut renamed = fragment.clone();
        if let Some(rules) = &fragment.rules {
            renamed.rules = Some(self.rename_rules(rules));
        }
        if let Some(plugins) = &fragment.plugins {
            renamed.plugins = Some(self.rename_plugin_map(plugins));
        }
        renamed
    }

    /// Rename every fragment into a fresh list
    pub fn rename_fragments(&self, fragments: &[ConfigFragment]) -> Vec<ConfigFragment> {
        fragments
            .iter()
            .map(|fragment| self.rename_fragment(fragment))
            .collect()
    }
}
