use flatkit_core::{ConfigFragment, Result, rules_from_json};
use serde_json::json;

use super::plugin;
use crate::globs::GLOB_SVELTE;

pub const PERFECTIONIST_SETUP: &str = "flatkit/perfectionist/setup";

/// Natural ordering for exports and imports, component imports grouped first
pub fn perfectionist() -> Result<Vec<ConfigFragment>> {
    let rules = rules_from_json(json!({
        "perfectionist/sort-exports": ["error", { "type": "natural" }],
        "perfectionist/sort-imports": [
            "error",
            {
                "custom-groups": {
                    "value": {
                        "svelte": [GLOB_SVELTE, "./*.svelte", "../*.svelte", "../**/*.svelte"],
                    },
                },
                "groups": [
                    "svelte",
                    [
                        "builtin",
                        "external",
                        "builtin-type",
                        "external-type",
                        "internal",
                        "parent",
                        "siblings",
                        "side-effect",
                        "side-effect-style",
                        "index",
                        "object",
                        "style",
                        "internal-type",
                        "parent-type",
                        "sibling-type",
                        "index-type",
                        "unknown",
                    ],
                ],
                "type": "natural",
            },
        ],
    }))?;

    Ok(vec![
        ConfigFragment::named(PERFECTIONIST_SETUP)
            .with_plugin("perfectionist", plugin("eslint-plugin-perfectionist"))
            .with_rules(rules),
    ])
}
