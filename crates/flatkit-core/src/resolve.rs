//! Option resolution
//!
//! Pure functions that turn the heterogeneous root options into concrete
//! per-integration settings. Nothing here mutates its input, so the
//! scheduler and the fusion step can call them independently.

use std::fmt;

use crate::fragment::RulesRecord;
use crate::options::{OptionsConfig, SubOptions, Toggle};

/// Integrations that accept rule overrides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Integration {
    Javascript,
    Typescript,
    Imports,
    Unicorn,
    Regexp,
    Svelte,
    Jsonc,
}

impl Integration {
    /// Key used in the options object and the deprecated override map
    pub fn key(self) -> &'static str {
        match self {
            Integration::Javascript => "javascript",
            Integration::Typescript => "typescript",
            Integration::Imports => "imports",
            Integration::Unicorn => "unicorn",
            Integration::Regexp => "regexp",
            Integration::Svelte => "svelte",
            Integration::Jsonc => "jsonc",
        }
    }
}

impl fmt::Display for Integration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Concrete sub-options for a switch
///
/// Booleans and absent switches collapse to the default record; an object
/// is returned as-is.
pub fn resolve_sub_options<T: Clone + Default>(switch: Option<&Toggle<T>>) -> T {
    switch
        .and_then(Toggle::custom)
        .cloned()
        .unwrap_or_default()
}

/// Whether a switch is on, falling back to a static default when absent
pub fn is_enabled<T>(switch: Option<&Toggle<T>>, default: bool) -> bool {
    switch.map_or(default, Toggle::is_enabled)
}

/// Whether a switch is on, computing the default only when the switch is absent
///
/// An explicit `false` never consults `default`.
pub fn is_enabled_with<T>(switch: Option<&Toggle<T>>, default: impl FnOnce() -> bool) -> bool {
    match switch {
        Some(toggle) => toggle.is_enabled(),
        None => default(),
    }
}

/// Override map nested inside an integration's own sub-options
pub fn nested_overrides(options: &OptionsConfig, integration: Integration) -> Option<&RulesRecord> {
    match integration {
        Integration::Javascript => options
            .javascript
            .as_ref()
            .and_then(|javascript| javascript.overrides()),
        Integration::Typescript => custom_overrides(options.typescript.as_ref()),
        Integration::Imports => custom_overrides(options.imports.as_ref()),
        Integration::Unicorn => custom_overrides(options.unicorn.as_ref()),
        Integration::Regexp => custom_overrides(options.regexp.as_ref()),
        Integration::Svelte => custom_overrides(options.svelte.as_ref()),
        Integration::Jsonc => custom_overrides(options.jsonc.as_ref()),
    }
}

fn custom_overrides<T: SubOptions>(switch: Option<&Toggle<T>>) -> Option<&RulesRecord> {
    switch.and_then(Toggle::custom).and_then(SubOptions::overrides)
}

/// Override map from the deprecated root-level `overrides.<integration>`
pub fn deprecated_overrides(
    options: &OptionsConfig,
    integration: Integration,
) -> Option<&RulesRecord> {
    options
        .overrides
        .as_ref()
        .and_then(|overrides| overrides.get(integration.key()))
}

/// Merged override map for an integration
///
/// Key-wise union of the deprecated root map and the nested map; the nested
/// map wins on collisions. Always a fresh map.
pub fn get_overrides(options: &OptionsConfig, integration: Integration) -> RulesRecord {
    let mut merged = deprecated_overrides(options, integration)
        .cloned()
        .unwrap_or_default();

    if let Some(nested) = nested_overrides(options, integration) {
        merged.extend(nested.iter().map(|(rule, entry)| (rule.clone(), entry.clone())));
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::RuleEntry;
    use crate::options::{OptionsOverrides, OptionsUnicorn};
    use serde_json::json;

    fn parse(value: serde_json::Value) -> OptionsConfig {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_resolve_sub_options() {
        let enabled: Toggle<OptionsUnicorn> = Toggle::Enabled;
        assert_eq!(resolve_sub_options(Some(&enabled)), OptionsUnicorn::default());
        assert_eq!(
            resolve_sub_options::<OptionsUnicorn>(None),
            OptionsUnicorn::default()
        );

        let custom = Toggle::Custom(OptionsUnicorn {
            all_recommended: Some(true),
            overrides: None,
        });
        assert_eq!(resolve_sub_options(Some(&custom)).all_recommended, Some(true));
    }

    #[test]
    fn test_explicit_false_skips_computed_default() {
        let disabled: Toggle<OptionsOverrides> = Toggle::Disabled;
        let enabled = is_enabled_with(Some(&disabled), || panic!("default must not run"));
        assert!(!enabled);
    }

    #[test]
    fn test_absent_switch_uses_default() {
        assert!(is_enabled::<OptionsOverrides>(None, true));
        assert!(!is_enabled::<OptionsOverrides>(None, false));
        assert!(is_enabled_with::<OptionsOverrides>(None, || true));
    }

    #[test]
    fn test_nested_overrides_win_over_deprecated() {
        let options = parse(json!({
            "overrides": { "typescript": { "x": "off", "y": "warn" } },
            "typescript": { "overrides": { "x": "error" } },
        }));

        let merged = get_overrides(&options, Integration::Typescript);
        assert_eq!(merged["x"], RuleEntry::error());
        assert_eq!(merged["y"], RuleEntry::warn());

        // Input is untouched
        let deprecated = deprecated_overrides(&options, Integration::Typescript).unwrap();
        assert_eq!(deprecated["x"], RuleEntry::off());
    }

    #[test]
    fn test_overrides_are_referentially_transparent() {
        let options = parse(json!({
            "overrides": { "jsonc": { "a": "warn" } },
            "jsonc": { "overrides": { "b": "error" } },
        }));

        let first = get_overrides(&options, Integration::Jsonc);
        let second = get_overrides(&options, Integration::Jsonc);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_boolean_switch_has_no_nested_overrides() {
        let options = parse(json!({
            "svelte": true,
            "overrides": { "svelte": { "svelte/no-at-html-tags": "off" } },
        }));

        assert!(nested_overrides(&options, Integration::Svelte).is_none());
        let merged = get_overrides(&options, Integration::Svelte);
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn test_javascript_overrides() {
        let options = parse(json!({ "javascript": { "overrides": { "no-var": "off" } } }));
        let merged = get_overrides(&options, Integration::Javascript);
        assert_eq!(merged["no-var"], RuleEntry::off());
        assert!(get_overrides(&options, Integration::Imports).is_empty());
    }
}
