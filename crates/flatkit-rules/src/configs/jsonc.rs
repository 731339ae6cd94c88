use flatkit_core::{ConfigFragment, OptionsOverrides, Result, rules_from_json};
use serde_json::json;

use super::{plugin, with_overrides};
use crate::globs::{GLOB_JSON, GLOB_JSON5, GLOB_JSONC};

pub const JSONC_SETUP: &str = "flatkit/jsonc/setup";
pub const JSONC_RULES: &str = "flatkit/jsonc/rules";

pub fn jsonc(options: OptionsOverrides) -> Result<Vec<ConfigFragment>> {
    let rules = rules_from_json(json!({
        "jsonc/no-bigint-literals": "error",
        "jsonc/no-binary-expression": "error",
        "jsonc/no-binary-numeric-literals": "error",
        "jsonc/no-dupe-keys": "error",
        "jsonc/no-escape-sequence-in-identifier": "error",
        "jsonc/no-floating-decimal": "error",
        "jsonc/no-hexadecimal-numeric-literals": "error",
        "jsonc/no-infinity": "error",
        "jsonc/no-multi-str": "error",
        "jsonc/no-nan": "error",
        "jsonc/no-number-props": "error",
        "jsonc/no-numeric-separators": "error",
        "jsonc/no-octal": "error",
        "jsonc/no-octal-escape": "error",
        "jsonc/no-octal-numeric-literals": "error",
        "jsonc/no-parenthesized": "error",
        "jsonc/no-plus-sign": "error",
        "jsonc/no-regexp-literals": "error",
        "jsonc/no-sparse-arrays": "error",
        "jsonc/no-template-literals": "error",
        "jsonc/no-undefined-value": "error",
        "jsonc/no-unicode-codepoint-escapes": "error",
        "jsonc/no-useless-escape": "error",
        "jsonc/space-unary-ops": "error",
        "jsonc/valid-json-number": "error",
        "jsonc/vue-custom-block/no-parsing-error": "error",
    }))?;

    Ok(vec![
        ConfigFragment::named(JSONC_SETUP).with_plugin("jsonc", plugin("eslint-plugin-jsonc")),
        ConfigFragment::named(JSONC_RULES)
            .with_files([GLOB_JSON, GLOB_JSON5, GLOB_JSONC])
            .with_language_options(json!({ "parser": "jsonc-eslint-parser" }))
            .with_rules(with_overrides(rules, options.overrides)),
    ])
}
