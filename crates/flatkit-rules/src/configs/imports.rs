use flatkit_core::{ConfigFragment, OptionsOverrides, Result, rules_from_json};
use serde_json::json;

use super::{plugin, with_overrides};

pub const IMPORTS_RULES: &str = "flatkit/imports/rules";

pub fn imports(options: OptionsOverrides) -> Result<Vec<ConfigFragment>> {
    let rules = rules_from_json(json!({
        "antfu/import-dedupe": "error",
        "antfu/no-import-dist": "error",
        "antfu/no-import-node-modules-by-path": "error",

        "import/no-useless-path-segments": ["warn", { "noUselessIndex": true }],
        "import/default": "error",
        "import/export": "error",
        "import/first": "error",
        "import/namespace": "error",
        "import/newline-after-import": ["warn", { "considerComments": true }],
        "import/no-absolute-path": "error",
        "import/no-amd": "error",
        "import/no-commonjs": "error",
        "import/no-deprecated": "warn",
        "import/no-duplicates": ["error", { "prefer-inline": true }],
        "import/no-empty-named-blocks": "error",
        "import/no-mutable-exports": "error",
        "import/no-named-as-default": "warn",
        "import/no-named-as-default-member": "warn",
        "import/no-named-default": "warn",
        "import/no-self-import": "error",
        "import/no-unused-modules": "warn",
        "no-duplicate-imports": "off",
    }))?;

    Ok(vec![
        ConfigFragment::named(IMPORTS_RULES)
            .with_plugin("antfu", plugin("eslint-plugin-antfu"))
            .with_plugin("import", plugin("eslint-plugin-import-lite"))
            .with_rules(with_overrides(rules, options.overrides)),
    ])
}
