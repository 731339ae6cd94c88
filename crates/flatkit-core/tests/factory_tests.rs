//! Factory scheduling, override precedence and composition tests

mod common;

use common::RecordingProducers;
use flatkit_core::{
    ConfigFragment, FlatConfigFactory, FlatkitError, FragmentJob, OptionsConfig, PluginRenames,
    RuleEntry, StaticOracle, rules_from_json,
};
use serde_json::{Value, json};
use std::sync::Arc;

fn options(value: Value) -> OptionsConfig {
    serde_json::from_value(value).unwrap()
}

fn factory(producers: &Arc<RecordingProducers>, installed: &[&str]) -> FlatConfigFactory {
    FlatConfigFactory::new(producers.clone())
        .with_oracle(Arc::new(StaticOracle::new(installed.iter().copied())))
}

fn names(configs: &[ConfigFragment]) -> Vec<String> {
    configs.iter().map(|c| c.name_or_default().to_string()).collect()
}

async fn resolve(value: Value, installed: &[&str]) -> Vec<ConfigFragment> {
    let producers = Arc::new(RecordingProducers::new());
    factory(&producers, installed)
        .compose(&options(value), Vec::<FragmentJob>::new())
        .unwrap()
        .to_configs()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_default_order() {
    let configs = resolve(json!({}), &[]).await;

    assert_eq!(
        names(&configs),
        vec![
            "stub/ignores",
            "stub/gitignore",
            "stub/javascript",
            "stub/comments",
            "stub/node",
            "stub/jsdoc",
            "stub/perfectionist",
            "stub/imports",
            "stub/unicorn",
            "stub/jsx",
            "stub/regexp",
            "stub/jsonc",
            "stub/sort-package-json",
            "stub/sort-tsconfig",
            "stub/disables",
        ]
    );
}

#[tokio::test]
async fn test_default_gitignore_is_lenient() {
    let configs = resolve(json!({}), &[]).await;
    let gitignore: Vec<_> = configs
        .iter()
        .filter(|c| c.name_or_default() == "stub/gitignore")
        .collect();

    assert_eq!(gitignore.len(), 1);
    assert_eq!(gitignore[0].settings, Some(json!({ "strict": false })));
}

#[tokio::test]
async fn test_gitignore_object_defaults_to_strict() {
    let configs = resolve(json!({ "gitignore": {} }), &[]).await;
    let gitignore = configs
        .iter()
        .find(|c| c.name_or_default() == "stub/gitignore")
        .unwrap();
    assert_eq!(gitignore.settings, Some(json!({ "strict": true })));

    let configs = resolve(json!({ "gitignore": false }), &[]).await;
    assert!(!names(&configs).contains(&"stub/gitignore".to_string()));
}

#[tokio::test]
async fn test_typescript_auto_detected() {
    let without = resolve(json!({}), &[]).await;
    assert!(!names(&without).contains(&"stub/typescript".to_string()));

    let with = resolve(json!({}), &["typescript"]).await;
    let position = names(&with).iter().position(|n| n == "stub/typescript").unwrap();
    assert_eq!(names(&with)[position - 1], "stub/jsx");
    assert_eq!(names(&with)[position + 1], "stub/regexp");
}

#[tokio::test]
async fn test_explicit_false_beats_detection() {
    let configs = resolve(json!({ "typescript": false }), &["typescript"]).await;
    assert!(!names(&configs).contains(&"stub/typescript".to_string()));
}

#[tokio::test]
async fn test_svelte_inherits_typescript_detection() {
    for installed in [&["typescript"][..], &[][..]] {
        let configs = resolve(json!({ "svelte": true }), installed).await;
        let svelte = configs
            .iter()
            .find(|c| c.name_or_default() == "stub/svelte")
            .unwrap();
        let expected = !installed.is_empty();
        assert_eq!(svelte.settings, Some(json!({ "typescript": expected })));
    }
}

#[tokio::test]
async fn test_svelte_disabled_by_default() {
    let configs = resolve(json!({}), &["typescript"]).await;
    assert!(!names(&configs).contains(&"stub/svelte".to_string()));
}

#[tokio::test]
async fn test_jsonc_switch_gates_sorters() {
    let configs = resolve(json!({ "jsonc": false }), &[]).await;
    let names = names(&configs);
    assert!(!names.contains(&"stub/jsonc".to_string()));
    assert!(!names.contains(&"stub/sort-package-json".to_string()));
    assert!(!names.contains(&"stub/sort-tsconfig".to_string()));
}

#[tokio::test]
async fn test_unicorn_switch_forms() {
    let count = |configs: &[ConfigFragment]| {
        configs
            .iter()
            .filter(|c| c.name_or_default() == "stub/unicorn")
            .count()
    };

    assert_eq!(count(&resolve(json!({ "unicorn": false }), &[]).await), 0);
    assert_eq!(count(&resolve(json!({ "unicorn": true }), &[]).await), 1);
    assert_eq!(count(&resolve(json!({ "unicorn": {} }), &[]).await), 1);

    let configs = resolve(json!({ "unicorn": { "overrides": { "rule-a": "warn" } } }), &[]).await;
    let unicorn = configs
        .iter()
        .find(|c| c.name_or_default() == "stub/unicorn")
        .unwrap();
    assert_eq!(unicorn.rule("rule-a"), Some(&RuleEntry::warn()));
}

#[tokio::test]
async fn test_nested_override_beats_deprecated_override() {
    let configs = resolve(
        json!({
            "overrides": { "javascript": { "x": "off", "only-deprecated": "warn" } },
            "javascript": { "overrides": { "x": "error" } },
        }),
        &[],
    )
    .await;

    let javascript = configs
        .iter()
        .find(|c| c.name_or_default() == "stub/javascript")
        .unwrap();
    assert_eq!(javascript.rule("x"), Some(&RuleEntry::error()));
    assert_eq!(javascript.rule("only-deprecated"), Some(&RuleEntry::warn()));
}

#[tokio::test]
async fn test_files_key_rejected_before_any_producer_runs() {
    let producers = Arc::new(RecordingProducers::new());
    let result = factory(&producers, &["typescript"])
        .compose(&options(json!({ "files": ["**/*.ts"] })), Vec::<FragmentJob>::new());

    let err = result.unwrap_err();
    assert!(matches!(err, FlatkitError::FilesInGlobalOptions));
    assert!(err.to_string().contains("files"));
    assert!(producers.calls().is_empty());
}

#[tokio::test]
async fn test_producers_run_only_on_resolution() {
    let producers = Arc::new(RecordingProducers::new());
    let composer = factory(&producers, &[])
        .compose(&OptionsConfig::default(), Vec::<FragmentJob>::new())
        .unwrap();
    assert!(producers.calls().is_empty());

    composer.resolve().await.unwrap();
    let calls = producers.calls().len();
    assert_eq!(calls, 15);

    composer.resolve().await.unwrap();
    assert_eq!(producers.calls().len(), calls);
}

#[tokio::test]
async fn test_resolution_is_stable() {
    let producers = Arc::new(RecordingProducers::new());
    let composer = factory(&producers, &["typescript"])
        .compose(&options(json!({ "svelte": true })), Vec::<FragmentJob>::new())
        .unwrap();

    let first = composer.to_configs().await.unwrap();
    let second = composer.to_configs().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_fusion_and_user_configs_follow_disables() {
    let producers = Arc::new(RecordingProducers::new());
    let user = ConfigFragment::named("user/a")
        .with_files(["src/**/*.ts"])
        .with_rules(rules_from_json(json!({ "no-console": "error" })).unwrap());

    let configs = factory(&producers, &[])
        .compose(
            &options(json!({ "settings": { "shared": true } })),
            [FragmentJob::from(user.clone())],
        )
        .unwrap()
        .to_configs()
        .await
        .unwrap();

    let names = names(&configs);
    let disables = names.iter().position(|n| n == "stub/disables").unwrap();
    assert_eq!(disables, names.len() - 3);

    let fused = &configs[disables + 1];
    assert!(fused.name.is_none());
    assert_eq!(fused.settings, Some(json!({ "shared": true })));

    assert_eq!(configs.last().unwrap(), &user);
}

#[tokio::test]
async fn test_user_fragment_plugins_are_renamed() {
    let producers = Arc::new(RecordingProducers::new());
    let user = ConfigFragment::named("user/ts")
        .with_plugin("@typescript-eslint", "@typescript-eslint/eslint-plugin")
        .with_rules(
            rules_from_json(json!({
                "no-console": "error",
                "@typescript-eslint/no-explicit-any": "off",
            }))
            .unwrap(),
        );

    let configs = factory(&producers, &[])
        .compose(&options(json!({ "type": "lib" })), [user])
        .unwrap()
        .to_configs()
        .await
        .unwrap();

    let last = configs.last().unwrap();
    assert_eq!(last.name_or_default(), "user/ts");
    assert!(last.plugins.as_ref().unwrap().contains_key("ts"));
    assert_eq!(last.rule("no-console"), Some(&RuleEntry::error()));
    assert_eq!(last.rule("ts/no-explicit-any"), Some(&RuleEntry::off()));

    let node = configs
        .iter()
        .find(|c| c.name_or_default() == "stub/node")
        .unwrap();
    assert!(node.rule("node/no-deprecated-api").is_some());
    assert!(node.plugins.as_ref().unwrap().contains_key("node"));
}

#[tokio::test]
async fn test_auto_rename_can_be_disabled() {
    let configs = resolve(json!({ "autoRenamePlugins": false }), &[]).await;
    let node = configs
        .iter()
        .find(|c| c.name_or_default() == "stub/node")
        .unwrap();
    assert!(node.rule("n/no-deprecated-api").is_some());
}

#[tokio::test]
async fn test_custom_rename_table() {
    let producers = Arc::new(RecordingProducers::new());
    let renames = PluginRenames::new([("n", "nodejs")]).unwrap();
    let configs = factory(&producers, &[])
        .with_renames(renames)
        .compose(&OptionsConfig::default(), Vec::<FragmentJob>::new())
        .unwrap()
        .to_configs()
        .await
        .unwrap();

    let node = configs
        .iter()
        .find(|c| c.name_or_default() == "stub/node")
        .unwrap();
    assert!(node.rule("nodejs/no-deprecated-api").is_some());
}

#[tokio::test]
async fn test_producer_failure_aborts_composition() {
    let producers = Arc::new(RecordingProducers::failing_on("jsdoc"));
    let composer = factory(&producers, &[])
        .compose(&OptionsConfig::default(), Vec::<FragmentJob>::new())
        .unwrap();

    let err = composer.resolve().await.unwrap_err();
    assert!(matches!(err, FlatkitError::ProducerError { ref producer, .. } if producer == "jsdoc"));
}

#[tokio::test]
async fn test_nested_composer_as_user_config() {
    let producers = Arc::new(RecordingProducers::new());
    let nested = flatkit_core::FlatConfigComposer::new()
        .append(ConfigFragment::named("nested/a"))
        .append(ConfigFragment::named("nested/b"));

    let configs = factory(&producers, &[])
        .compose(
            &OptionsConfig::default(),
            [
                FragmentJob::from(ConfigFragment::named("user/first")),
                FragmentJob::from(nested),
            ],
        )
        .unwrap()
        .to_configs()
        .await
        .unwrap();

    let names = names(&configs);
    assert_eq!(
        &names[names.len() - 3..],
        &["user/first", "nested/a", "nested/b"]
    );
}

#[tokio::test]
async fn test_typescript_params() {
    let configs = resolve(
        json!({
            "type": "lib",
            "componentExts": ["vue"],
            "typescript": { "overrides": { "ts-rule": "warn" } },
        }),
        &[],
    )
    .await;

    let typescript = configs
        .iter()
        .find(|c| c.name_or_default() == "stub/typescript")
        .unwrap();
    assert_eq!(
        typescript.settings,
        Some(json!({ "componentExts": ["vue"], "projectType": "lib" }))
    );
    assert_eq!(typescript.rule("ts-rule"), Some(&RuleEntry::warn()));
}
