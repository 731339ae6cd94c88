use flatkit_core::{
    ConfigFragment, OptionsRegExp, RegExpLevel, Result, RuleEntry, RuleSeverity, RulesRecord,
    rules_from_json,
};
use serde_json::{Value, json};

use super::{plugin, with_overrides};

pub const REGEXP_RULES: &str = "flatkit/regexp/rules";

pub fn regexp(options: OptionsRegExp) -> Result<Vec<ConfigFragment>> {
    let mut rules = rules_from_json(json!({
        "regexp/confusing-quantifier": "warn",
        "regexp/control-character-escape": "error",
        "regexp/match-any": "error",
        "regexp/negation": "error",
        "regexp/no-contradiction-with-assertion": "error",
        "regexp/no-dupe-characters-character-class": "error",
        "regexp/no-dupe-disjunctions": "error",
        "regexp/no-empty-alternative": "warn",
        "regexp/no-empty-capturing-group": "error",
        "regexp/no-empty-character-class": "error",
        "regexp/no-empty-group": "error",
        "regexp/no-empty-lookarounds-assertion": "error",
        "regexp/no-escape-backspace": "error",
        "regexp/no-invalid-regexp": "error",
        "regexp/no-lazy-ends": "warn",
        "regexp/no-misleading-capturing-group": "error",
        "regexp/no-misleading-unicode-character": "error",
        "regexp/no-missing-g-flag": "error",
        "regexp/no-non-standard-flag": "error",
        "regexp/no-obscure-range": "error",
        "regexp/no-optional-assertion": "error",
        "regexp/no-potentially-useless-backreference": "warn",
        "regexp/no-super-linear-backtracking": "error",
        "regexp/no-trivially-nested-assertion": "error",
        "regexp/no-unused-capturing-group": "error",
        "regexp/no-useless-assertions": "error",
        "regexp/no-useless-backreference": "error",
        "regexp/no-useless-character-class": "error",
        "regexp/no-useless-escape": "error",
        "regexp/no-useless-quantifier": "error",
        "regexp/optimal-lookaround-quantifier": "warn",
        "regexp/optimal-quantifier-concatenation": "error",
        "regexp/prefer-character-class": "error",
        "regexp/prefer-d": "error",
        "regexp/prefer-plus-quantifier": "error",
        "regexp/prefer-question-quantifier": "error",
        "regexp/prefer-star-quantifier": "error",
        "regexp/prefer-w": "error",
        "regexp/strict": "error",
        "regexp/use-ignore-case": "error",
    }))?;

    if options.level == Some(RegExpLevel::Warn) {
        rules = downgrade_errors(rules);
    }

    Ok(vec![
        ConfigFragment::named(REGEXP_RULES)
            .with_plugin("regexp", plugin("eslint-plugin-regexp"))
            .with_rules(with_overrides(rules, options.overrides)),
    ])
}

/// Turn every `error` entry (named or level 2) into `warn`, keeping rule options
fn downgrade_errors(rules: RulesRecord) -> RulesRecord {
    rules
        .into_iter()
        .map(|(name, entry)| {
            let entry = match entry {
                RuleEntry::Severity(RuleSeverity::Error) => RuleEntry::warn(),
                RuleEntry::Configured(mut values)
                    if values.first().and_then(RuleSeverity::from_value)
                        == Some(RuleSeverity::Error) =>
                {
                    values[0] = Value::from("warn");
                    RuleEntry::Configured(values)
                }
                other => other,
            };
            (name, entry)
        })
        .collect()
}
