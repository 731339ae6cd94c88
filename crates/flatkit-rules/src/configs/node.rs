use flatkit_core::{ConfigFragment, Result, rules_from_json};
use serde_json::json;

use super::plugin;

pub const NODE_RULES: &str = "flatkit/node/rules";

/// Runtime rules, under the plugin's upstream `n` namespace
pub fn node() -> Result<Vec<ConfigFragment>> {
    let rules = rules_from_json(json!({
        "n/handle-callback-err": ["error", "^(err|error)$"],
        "n/no-deprecated-api": "error",
        "n/no-exports-assign": "error",
        "n/no-new-require": "error",
        "n/no-path-concat": "error",
        "n/prefer-global/buffer": ["error", "never"],
        "n/prefer-global/process": ["error", "never"],
        "n/process-exit-as-throw": "error",
    }))?;

    Ok(vec![
        ConfigFragment::named(NODE_RULES)
            .with_plugin("n", plugin("eslint-plugin-n"))
            .with_rules(rules),
    ])
}
