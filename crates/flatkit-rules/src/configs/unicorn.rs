use flatkit_core::{ConfigFragment, OptionsUnicorn, Result, RulesRecord, rules_from_json};
use serde_json::json;

use super::{plugin, with_overrides};

pub const UNICORN_RULES: &str = "flatkit/unicorn/rules";

/// Curated subset unless every recommended rule is requested
pub fn unicorn(options: OptionsUnicorn) -> Result<Vec<ConfigFragment>> {
    let mut rules = curated()?;
    if options.all_recommended.unwrap_or(false) {
        rules.extend(recommended_extras()?);
    }

    Ok(vec![
        ConfigFragment::named(UNICORN_RULES)
            .with_plugin("unicorn", plugin("eslint-plugin-unicorn"))
            .with_rules(with_overrides(rules, options.overrides)),
    ])
}

fn curated() -> Result<RulesRecord> {
    rules_from_json(json!({
        "unicorn/consistent-empty-array-spread": "error",
        "unicorn/error-message": "error",
        "unicorn/escape-case": "error",
        "unicorn/new-for-builtins": "error",
        "unicorn/no-instanceof-builtins": "error",
        "unicorn/no-new-array": "error",
        "unicorn/no-new-buffer": "error",
        "unicorn/number-literal-case": "error",
        "unicorn/prefer-dom-node-text-content": "error",
        "unicorn/prefer-includes": "error",
        "unicorn/prefer-node-protocol": "error",
        "unicorn/prefer-number-properties": "error",
        "unicorn/prefer-string-starts-ends-with": "error",
        "unicorn/prefer-type-error": "error",
        "unicorn/throw-new-error": "error",
    }))
}

fn recommended_extras() -> Result<RulesRecord> {
    rules_from_json(json!({
        "unicorn/better-regex": "error",
        "unicorn/catch-error-name": "error",
        "unicorn/consistent-function-scoping": "error",
        "unicorn/explicit-length-check": "error",
        "unicorn/filename-case": "error",
        "unicorn/no-array-for-each": "error",
        "unicorn/no-array-push-push": "error",
        "unicorn/no-for-loop": "error",
        "unicorn/no-lonely-if": "error",
        "unicorn/no-null": "error",
        "unicorn/no-useless-undefined": "error",
        "unicorn/prefer-array-flat-map": "error",
        "unicorn/prefer-at": "error",
        "unicorn/prefer-spread": "error",
        "unicorn/prefer-ternary": "error",
        "unicorn/prevent-abbreviations": "error",
    }))
}
