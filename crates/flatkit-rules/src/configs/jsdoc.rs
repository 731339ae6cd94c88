use flatkit_core::{ConfigFragment, Result, rules_from_json};
use serde_json::json;

use super::plugin;

pub const JSDOC_RULES: &str = "flatkit/jsdoc/rules";

pub fn jsdoc() -> Result<Vec<ConfigFragment>> {
    let rules = rules_from_json(json!({
        "jsdoc/check-access": "warn",
        "jsdoc/check-param-names": "warn",
        "jsdoc/check-property-names": "warn",
        "jsdoc/check-types": "warn",
        "jsdoc/empty-tags": "warn",
        "jsdoc/implements-on-classes": "warn",
        "jsdoc/no-defaults": "warn",
        "jsdoc/no-multi-asterisks": "warn",
        "jsdoc/require-param-name": "warn",
        "jsdoc/require-property": "warn",
        "jsdoc/require-property-description": "warn",
        "jsdoc/require-property-name": "warn",
        "jsdoc/require-returns-check": "warn",
        "jsdoc/require-returns-description": "warn",
        "jsdoc/require-yields-check": "warn",
    }))?;

    Ok(vec![
        ConfigFragment::named(JSDOC_RULES)
            .with_plugin("jsdoc", plugin("eslint-plugin-jsdoc"))
            .with_rules(rules),
    ])
}
