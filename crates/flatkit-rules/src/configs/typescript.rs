//! Typed-language fragments
//!
//! Emits parser setup for source and component files, the baseline rules,
//! and, when a tsconfig path is given, a type-aware parser plus type-aware
//! rules. Library projects get explicit return types on exported functions.

use flatkit_core::{
    ConfigFragment, ProjectType, Result, RulesRecord, TypescriptParams, rules_from_json,
};
use serde_json::{Value, json};

use super::{plugin, to_strings, with_overrides};
use crate::globs::{GLOB_MARKDOWN, GLOB_TS, GLOB_TSX, component_globs};

pub const TYPESCRIPT_SETUP: &str = "flatkit/typescript/setup";
pub const TYPESCRIPT_PARSER: &str = "flatkit/typescript/parser";
pub const TYPESCRIPT_TYPE_AWARE_PARSER: &str = "flatkit/typescript/type-aware-parser";
pub const TYPESCRIPT_RULES: &str = "flatkit/typescript/rules";
pub const TYPESCRIPT_RULES_TYPE_AWARE: &str = "flatkit/typescript/rules-type-aware";
pub const TYPESCRIPT_ERASABLE_ONLY: &str = "flatkit/typescript/erasable-syntax-only";

const PARSER: &str = "@typescript-eslint/parser";

pub fn typescript(params: TypescriptParams) -> Result<Vec<ConfigFragment>> {
    let TypescriptParams {
        options,
        component_exts,
        project_type,
    } = params;

    let mut files = to_strings(&[GLOB_TS, GLOB_TSX]);
    files.extend(component_globs(&component_exts));

    let files_type_aware = options
        .files_type_aware
        .clone()
        .unwrap_or_else(|| to_strings(&[GLOB_TS, GLOB_TSX]));
    let ignores_type_aware = options
        .ignores_type_aware
        .clone()
        .unwrap_or_else(|| vec![format!("{GLOB_MARKDOWN}/**")]);

    let extra_file_extensions: Vec<String> = component_exts
        .iter()
        .map(|ext| format!(".{}", ext.trim_start_matches('.')))
        .collect();

    let mut fragments = vec![
        ConfigFragment::named(TYPESCRIPT_SETUP)
            .with_plugin("@typescript-eslint", plugin("@typescript-eslint/eslint-plugin")),
        ConfigFragment::named(TYPESCRIPT_PARSER)
            .with_files(files.clone())
            .with_language_options(parser_options(
                &extra_file_extensions,
                options.parser_options.as_ref(),
                None,
            )),
    ];

    let type_aware = options.tsconfig_path.as_deref();
    if let Some(tsconfig_path) = type_aware {
        tracing::debug!(tsconfig_path, "Enabling type-aware typescript rules");
        let mut parser = ConfigFragment::named(TYPESCRIPT_TYPE_AWARE_PARSER)
            .with_files(files_type_aware.clone())
            .with_language_options(parser_options(
                &extra_file_extensions,
                options.parser_options.as_ref(),
                Some(tsconfig_path),
            ));
        parser.ignores = Some(ignores_type_aware.clone());
        fragments.push(parser);
    }

    let mut rules = base_rules()?;
    if project_type == ProjectType::Lib {
        rules.extend(library_rules()?);
    }
    fragments.push(
        ConfigFragment::named(TYPESCRIPT_RULES)
            .with_files(files)
            .with_rules(with_overrides(rules, options.overrides.clone())),
    );

    if type_aware.is_some() {
        let mut rules = ConfigFragment::named(TYPESCRIPT_RULES_TYPE_AWARE)
            .with_files(files_type_aware)
            .with_rules(with_overrides(
                type_aware_rules()?,
                options.overrides_type_aware.clone(),
            ));
        rules.ignores = Some(ignores_type_aware);
        fragments.push(rules);
    }

    if options.erasable_only.unwrap_or(false) {
        fragments.push(
            ConfigFragment::named(TYPESCRIPT_ERASABLE_ONLY)
                .with_plugin("erasable-syntax-only", plugin("eslint-plugin-erasable-syntax-only"))
                .with_rules(rules_from_json(json!({
                    "erasable-syntax-only/enums": "error",
                    "erasable-syntax-only/import-aliases": "error",
                    "erasable-syntax-only/namespaces": "error",
                    "erasable-syntax-only/parameter-properties": "error",
                }))?),
        );
    }

    Ok(fragments)
}

fn parser_options(
    extra_file_extensions: &[String],
    extra: Option<&Value>,
    tsconfig_path: Option<&str>,
) -> Value {
    let mut parser_options = json!({
        "extraFileExtensions": extra_file_extensions,
        "sourceType": "module",
    });

    if let Some(tsconfig_path) = tsconfig_path {
        parser_options["project"] = json!(tsconfig_path);
        parser_options["tsconfigRootDir"] = json!(".");
    }

    if let (Some(target), Some(Value::Object(extra))) = (parser_options.as_object_mut(), extra) {
        target.extend(extra.clone());
    }

    json!({
        "parser": PARSER,
        "parserOptions": parser_options,
    })
}

fn base_rules() -> Result<RulesRecord> {
    rules_from_json(json!({
        "no-dupe-class-members": "off",
        "no-redeclare": "off",
        "no-use-before-define": "off",
        "no-useless-constructor": "off",
        "@typescript-eslint/ban-ts-comment": ["error", { "ts-expect-error": "allow-with-description" }],
        "@typescript-eslint/consistent-type-definitions": ["error", "interface"],
        "@typescript-eslint/consistent-type-imports": [
            "error",
            { "disallowTypeAnnotations": false, "fixStyle": "separate-type-imports", "prefer": "type-imports" },
        ],
        "@typescript-eslint/method-signature-style": ["error", "property"],
        "@typescript-eslint/no-dupe-class-members": "error",
        "@typescript-eslint/no-dynamic-delete": "off",
        "@typescript-eslint/no-empty-object-type": ["error", { "allowInterfaces": "always" }],
        "@typescript-eslint/no-explicit-any": "off",
        "@typescript-eslint/no-extraneous-class": "off",
        "@typescript-eslint/no-import-type-side-effects": "error",
        "@typescript-eslint/no-invalid-void-type": "off",
        "@typescript-eslint/no-non-null-assertion": "off",
        "@typescript-eslint/no-redeclare": ["error", { "builtinGlobals": false }],
        "@typescript-eslint/no-require-imports": "error",
        "@typescript-eslint/no-unused-expressions": [
            "error",
            { "allowShortCircuit": true, "allowTaggedTemplates": true, "allowTernary": true },
        ],
        "@typescript-eslint/no-unused-vars": "off",
        "@typescript-eslint/no-use-before-define": [
            "error",
            { "classes": false, "functions": false, "variables": true },
        ],
        "@typescript-eslint/no-useless-constructor": "off",
        "@typescript-eslint/no-wrapper-object-types": "error",
        "@typescript-eslint/triple-slash-reference": "off",
        "@typescript-eslint/unified-signatures": "off",
    }))
}

fn library_rules() -> Result<RulesRecord> {
    rules_from_json(json!({
        "@typescript-eslint/explicit-function-return-type": [
            "error",
            { "allowExpressions": true, "allowHigherOrderFunctions": true, "allowIIFEs": true },
        ],
    }))
}

fn type_aware_rules() -> Result<RulesRecord> {
    rules_from_json(json!({
        "dot-notation": "off",
        "no-implied-eval": "off",
        "@typescript-eslint/await-thenable": "error",
        "@typescript-eslint/dot-notation": ["error", { "allowKeywords": true }],
        "@typescript-eslint/no-floating-promises": "error",
        "@typescript-eslint/no-for-in-array": "error",
        "@typescript-eslint/no-implied-eval": "error",
        "@typescript-eslint/no-misused-promises": "error",
        "@typescript-eslint/no-unnecessary-type-assertion": "error",
        "@typescript-eslint/no-unsafe-argument": "error",
        "@typescript-eslint/no-unsafe-assignment": "error",
        "@typescript-eslint/no-unsafe-call": "error",
        "@typescript-eslint/no-unsafe-member-access": "error",
        "@typescript-eslint/no-unsafe-return": "error",
        "@typescript-eslint/promise-function-async": "error",
        "@typescript-eslint/restrict-plus-operands": "error",
        "@typescript-eslint/restrict-template-expressions": "error",
        "@typescript-eslint/return-await": ["error", "in-try-catch"],
        "@typescript-eslint/strict-boolean-expressions": [
            "error",
            { "allowNullableBoolean": true, "allowNullableObject": true },
        ],
        "@typescript-eslint/switch-exhaustiveness-check": "error",
        "@typescript-eslint/unbound-method": "error",
    }))
}
