use flatkit_core::{ConfigFragment, Result, rules_from_json};
use serde_json::json;

use super::plugin;

pub const COMMENTS_RULES: &str = "flatkit/eslint-comments/rules";

/// Directive-comment hygiene
pub fn comments() -> Result<Vec<ConfigFragment>> {
    let rules = rules_from_json(json!({
        "eslint-comments/no-aggregating-enable": "error",
        "eslint-comments/no-duplicate-disable": "error",
        "eslint-comments/no-unlimited-disable": "error",
        "eslint-comments/no-unused-enable": "error",
    }))?;

    Ok(vec![
        ConfigFragment::named(COMMENTS_RULES)
            .with_plugin(
                "eslint-comments",
                plugin("@eslint-community/eslint-plugin-eslint-comments"),
            )
            .with_rules(rules),
    ])
}
