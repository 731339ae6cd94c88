use flatkit_core::{ConfigFragment, Result, rules_from_json};
use serde_json::json;

use super::to_strings;
use crate::globs::{GLOB_DTS, GLOB_SRC, GLOB_SRC_EXT, GLOB_TESTS};

pub const DISABLES_SCRIPTS: &str = "flatkit/disables/scripts";
pub const DISABLES_CLI: &str = "flatkit/disables/cli";
pub const DISABLES_DTS: &str = "flatkit/disables/dts";
pub const DISABLES_TESTS: &str = "flatkit/disables/tests";
pub const DISABLES_CJS: &str = "flatkit/disables/cjs";
pub const DISABLES_CONFIG_FILES: &str = "flatkit/disables/config-files";

/// Rules turned off where the baseline is too strict
pub fn disables() -> Result<Vec<ConfigFragment>> {
    Ok(vec![
        ConfigFragment::named(DISABLES_SCRIPTS)
            .with_files([format!("**/scripts/{GLOB_SRC}")])
            .with_rules(rules_from_json(json!({
                "antfu/no-top-level-await": "off",
                "no-console": "off",
                "@typescript-eslint/explicit-function-return-type": "off",
            }))?),
        ConfigFragment::named(DISABLES_CLI)
            .with_files([format!("**/cli/{GLOB_SRC}"), format!("**/cli.{GLOB_SRC_EXT}")])
            .with_rules(rules_from_json(json!({
                "antfu/no-top-level-await": "off",
                "no-console": "off",
            }))?),
        ConfigFragment::named(DISABLES_DTS)
            .with_files([GLOB_DTS])
            .with_rules(rules_from_json(json!({
                "eslint-comments/no-unlimited-disable": "off",
                "import/no-duplicates": "off",
                "no-restricted-syntax": "off",
                "unused-imports/no-unused-vars": "off",
            }))?),
        ConfigFragment::named(DISABLES_TESTS)
            .with_files(to_strings(GLOB_TESTS))
            .with_rules(rules_from_json(json!({
                "antfu/no-top-level-await": "off",
                "no-unused-expressions": "off",
                "@typescript-eslint/explicit-function-return-type": "off",
                "@typescript-eslint/no-unused-expressions": "off",
            }))?),
        ConfigFragment::named(DISABLES_CJS)
            .with_files(["**/*.js", "**/*.cjs"])
            .with_rules(rules_from_json(json!({
                "@typescript-eslint/no-require-imports": "off",
            }))?),
        ConfigFragment::named(DISABLES_CONFIG_FILES)
            .with_files([format!("**/*.config.{GLOB_SRC_EXT}"), format!("**/*.config.*.{GLOB_SRC_EXT}")])
            .with_rules(rules_from_json(json!({
                "antfu/no-top-level-await": "off",
                "no-console": "off",
                "@typescript-eslint/explicit-function-return-type": "off",
            }))?),
    ])
}
