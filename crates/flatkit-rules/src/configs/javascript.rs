use flatkit_core::{ConfigFragment, OptionsOverrides, Result, rules_from_json};
use serde_json::json;

use super::{plugin, with_overrides};

pub const JAVASCRIPT_SETUP: &str = "flatkit/javascript/setup";
pub const JAVASCRIPT_RULES: &str = "flatkit/javascript/rules";

/// Core baseline; always scheduled
pub fn javascript(options: OptionsOverrides) -> Result<Vec<ConfigFragment>> {
    let setup = ConfigFragment::named(JAVASCRIPT_SETUP)
        .with_language_options(json!({
            "ecmaVersion": "latest",
            "sourceType": "module",
            "globals": {
                "browser": true,
                "es2021": true,
                "node": true,
                "document": "readonly",
                "navigator": "readonly",
                "window": "readonly",
            },
            "parserOptions": {
                "ecmaFeatures": { "jsx": true },
                "ecmaVersion": "latest",
                "sourceType": "module",
            },
        }))
        .with_linter_options(json!({ "reportUnusedDisableDirectives": true }));

    let rules = rules_from_json(json!({
        "accessor-pairs": ["error", { "enforceForClassMembers": true, "setWithoutGet": true }],
        "antfu/no-top-level-await": "error",
        "array-callback-return": "error",
        "block-scoped-var": "error",
        "constructor-super": "error",
        "default-case-last": "error",
        "dot-notation": ["error", { "allowKeywords": true }],
        "eqeqeq": ["error", "smart"],
        "new-cap": ["error", { "capIsNew": false, "newIsCap": true, "properties": true }],
        "no-alert": "error",
        "no-array-constructor": "error",
        "no-async-promise-executor": "error",
        "no-caller": "error",
        "no-case-declarations": "error",
        "no-class-assign": "error",
        "no-compare-neg-zero": "error",
        "no-cond-assign": ["error", "always"],
        "no-console": ["error", { "allow": ["warn", "error"] }],
        "no-const-assign": "error",
        "no-control-regex": "error",
        "no-debugger": "error",
        "no-delete-var": "error",
        "no-dupe-args": "error",
        "no-dupe-class-members": "error",
        "no-dupe-keys": "error",
        "no-duplicate-case": "error",
        "no-empty": ["error", { "allowEmptyCatch": true }],
        "no-empty-character-class": "error",
        "no-empty-pattern": "error",
        "no-eval": "error",
        "no-ex-assign": "error",
        "no-extend-native": "error",
        "no-extra-bind": "error",
        "no-extra-boolean-cast": "error",
        "no-fallthrough": "error",
        "no-func-assign": "error",
        "no-global-assign": "error",
        "no-implied-eval": "error",
        "no-import-assign": "error",
        "no-invalid-regexp": "error",
        "no-irregular-whitespace": "error",
        "no-iterator": "error",
        "no-labels": ["error", { "allowLoop": false, "allowSwitch": false }],
        "no-lone-blocks": "error",
        "no-loss-of-precision": "error",
        "no-misleading-character-class": "error",
        "no-multi-str": "error",
        "no-new": "error",
        "no-new-func": "error",
        "no-new-native-nonconstructor": "error",
        "no-new-wrappers": "error",
        "no-obj-calls": "error",
        "no-octal": "error",
        "no-octal-escape": "error",
        "no-proto": "error",
        "no-prototype-builtins": "error",
        "no-redeclare": ["error", { "builtinGlobals": false }],
        "no-regex-spaces": "error",
        "no-restricted-globals": [
            "error",
            { "message": "Use `globalThis` instead.", "name": "global" },
            { "message": "Use `globalThis` instead.", "name": "self" },
        ],
        "no-self-assign": ["error", { "props": true }],
        "no-self-compare": "error",
        "no-sequences": "error",
        "no-shadow-restricted-names": "error",
        "no-sparse-arrays": "error",
        "no-template-curly-in-string": "error",
        "no-this-before-super": "error",
        "no-throw-literal": "error",
        "no-undef": "error",
        "no-undef-init": "error",
        "no-unexpected-multiline": "error",
        "no-unmodified-loop-condition": "error",
        "no-unneeded-ternary": ["error", { "defaultAssignment": false }],
        "no-unreachable": "error",
        "no-unreachable-loop": "error",
        "no-unsafe-finally": "error",
        "no-unsafe-negation": "error",
        "no-unused-expressions": [
            "error",
            { "allowShortCircuit": true, "allowTaggedTemplates": true, "allowTernary": true },
        ],
        "no-unused-vars": [
            "error",
            { "args": "none", "caughtErrors": "none", "ignoreRestSiblings": true, "vars": "all" },
        ],
        "no-use-before-define": ["error", { "classes": false, "functions": false, "variables": true }],
        "no-useless-backreference": "error",
        "no-useless-call": "error",
        "no-useless-catch": "error",
        "no-useless-computed-key": "error",
        "no-useless-constructor": "error",
        "no-useless-rename": "error",
        "no-useless-return": "error",
        "no-var": "error",
        "no-with": "error",
        "object-shorthand": ["error", "always", { "avoidQuotes": true, "ignoreConstructors": false }],
        "one-var": ["error", { "initialized": "never" }],
        "prefer-arrow-callback": ["error", { "allowNamedFunctions": false, "allowUnboundThis": true }],
        "prefer-const": ["error", { "destructuring": "all", "ignoreReadBeforeAssign": true }],
        "prefer-exponentiation-operator": "error",
        "prefer-promise-reject-errors": "error",
        "prefer-regex-literals": ["error", { "disallowRedundantWrapping": true }],
        "prefer-rest-params": "error",
        "prefer-spread": "error",
        "prefer-template": "error",
        "symbol-description": "error",
        "unicode-bom": ["error", "never"],
        "use-isnan": ["error", { "enforceForIndexOf": true, "enforceForSwitchCase": true }],
        "valid-typeof": ["error", { "requireStringLiterals": true }],
        "vars-on-top": "error",
        "yoda": ["error", "never"],
    }))?;

    Ok(vec![
        setup,
        ConfigFragment::named(JAVASCRIPT_RULES)
            .with_plugin("antfu", plugin("eslint-plugin-antfu"))
            .with_rules(with_overrides(rules, options.overrides)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use flatkit_core::RuleEntry;

    #[test]
    fn test_overrides_win() {
        let overrides = rules_from_json(json!({ "no-console": "off", "extra": "warn" })).unwrap();
        let fragments = javascript(OptionsOverrides {
            overrides: Some(overrides),
        })
        .unwrap();

        let rules = &fragments[1];
        assert_eq!(rules.name_or_default(), JAVASCRIPT_RULES);
        assert_eq!(rules.rule("no-console"), Some(&RuleEntry::off()));
        assert_eq!(rules.rule("extra"), Some(&RuleEntry::warn()));
        assert_eq!(rules.rule("no-var"), Some(&RuleEntry::error()));
    }

    #[test]
    fn test_setup_carries_language_options() {
        let fragments = javascript(OptionsOverrides::default()).unwrap();
        assert_eq!(fragments[0].name_or_default(), JAVASCRIPT_SETUP);
        assert!(fragments[0].language_options.is_some());
        assert!(fragments[0].rules.is_none());
    }
}
