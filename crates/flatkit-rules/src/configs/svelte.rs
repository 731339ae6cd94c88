use flatkit_core::{ConfigFragment, Result, SvelteParams, rules_from_json};
use serde_json::{Value, json};

use super::{plugin, with_overrides};
use crate::globs::GLOB_SVELTE;

pub const SVELTE_SETUP: &str = "flatkit/svelte/setup";
pub const SVELTE_RULES: &str = "flatkit/svelte/rules";

/// Component-framework rules; script blocks use the typed parser when enabled
pub fn svelte(params: SvelteParams) -> Result<Vec<ConfigFragment>> {
    let script_parser = if params.typescript {
        Value::from("@typescript-eslint/parser")
    } else {
        Value::Null
    };

    let rules = rules_from_json(json!({
        "no-undef": "off",
        "no-unused-vars": [
            "error",
            {
                "args": "none",
                "caughtErrors": "none",
                "ignoreRestSiblings": true,
                "vars": "all",
                "varsIgnorePattern": "^(\\$\\$Props$|\\$\\$Events$|\\$\\$Slots$)",
            },
        ],
        "svelte/comment-directive": "error",
        "svelte/no-at-debug-tags": "warn",
        "svelte/no-at-html-tags": "error",
        "svelte/no-dupe-else-if-blocks": "error",
        "svelte/no-dupe-style-properties": "error",
        "svelte/no-dupe-use-directives": "error",
        "svelte/no-dynamic-slot-name": "error",
        "svelte/no-export-load-in-svelte-module-in-kit-pages": "error",
        "svelte/no-inner-declarations": "error",
        "svelte/no-not-function-handler": "error",
        "svelte/no-object-in-text-mustaches": "error",
        "svelte/no-reactive-functions": "error",
        "svelte/no-reactive-literals": "error",
        "svelte/no-shorthand-style-property-overrides": "error",
        "svelte/no-unknown-style-directive-property": "error",
        "svelte/no-unused-svelte-ignore": "error",
        "svelte/no-useless-mustaches": "error",
        "svelte/require-store-callbacks-use-set-param": "error",
        "svelte/system": "error",
        "svelte/valid-each-key": "error",
    }))?;

    Ok(vec![
        ConfigFragment::named(SVELTE_SETUP)
            .with_plugin("svelte", plugin("eslint-plugin-svelte")),
        ConfigFragment::named(SVELTE_RULES)
            .with_files([GLOB_SVELTE])
            .with_language_options(json!({
                "parser": "svelte-eslint-parser",
                "parserOptions": {
                    "extraFileExtensions": [".svelte"],
                    "parser": script_parser,
                },
            }))
            .with_processor("svelte/svelte")
            .with_rules(with_overrides(rules, Some(params.overrides))),
    ])
}
