//! Shared test producers

use async_trait::async_trait;
use flatkit_core::{
    ConfigFragment, ConfigProducers, FlatkitError, GitignoreParams, OptionsOverrides,
    OptionsRegExp, OptionsUnicorn, Result, RulesRecord, SvelteParams, TypescriptParams,
    UserIgnores, rules_from_json,
};
use serde_json::json;
use std::sync::Mutex;

/// Producer set that records every invocation and emits one fragment each
///
/// Each fragment is named `stub/<producer>` and carries the producer's
/// override map as its rules, so tests can observe what was passed in.
#[derive(Default)]
pub struct RecordingProducers {
    calls: Mutex<Vec<String>>,
    fail_on: Option<&'static str>,
}

impl RecordingProducers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make one producer fail when invoked
    pub fn failing_on(producer: &'static str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on: Some(producer),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn emit(&self, producer: &str, rules: RulesRecord) -> Result<Vec<ConfigFragment>> {
        self.calls.lock().unwrap().push(producer.to_string());
        if self.fail_on == Some(producer) {
            return Err(FlatkitError::producer_error(producer, "stub failure"));
        }
        Ok(vec![
            ConfigFragment::named(format!("stub/{producer}")).with_rules(rules),
        ])
    }

    fn overrides(overrides: Option<RulesRecord>) -> RulesRecord {
        overrides.unwrap_or_default()
    }
}

#[async_trait]
impl ConfigProducers for RecordingProducers {
    async fn ignores(&self, user: Option<UserIgnores>) -> Result<Vec<ConfigFragment>> {
        let ignores = user
            .map(|user| user.apply(vec!["**/node_modules".to_string()]))
            .unwrap_or_else(|| vec!["**/node_modules".to_string()]);
        self.calls.lock().unwrap().push("ignores".to_string());
        Ok(vec![ConfigFragment::named("stub/ignores").with_ignores(ignores)])
    }

    async fn gitignore(&self, params: GitignoreParams) -> Result<Vec<ConfigFragment>> {
        let mut fragments = self.emit("gitignore", RulesRecord::new())?;
        fragments[0].settings = Some(json!({ "strict": params.strict }));
        Ok(fragments)
    }

    async fn javascript(&self, options: OptionsOverrides) -> Result<Vec<ConfigFragment>> {
        self.emit("javascript", Self::overrides(options.overrides))
    }

    async fn comments(&self) -> Result<Vec<ConfigFragment>> {
        self.emit("comments", RulesRecord::new())
    }

    async fn node(&self) -> Result<Vec<ConfigFragment>> {
        let rules = rules_from_json(json!({ "n/no-deprecated-api": "error" }))?;
        let mut fragments = self.emit("node", rules)?;
        fragments[0].plugins = Some([("n".to_string(), json!("eslint-plugin-n"))].into());
        Ok(fragments)
    }

    async fn jsdoc(&self) -> Result<Vec<ConfigFragment>> {
        self.emit("jsdoc", RulesRecord::new())
    }

    async fn perfectionist(&self) -> Result<Vec<ConfigFragment>> {
        self.emit("perfectionist", RulesRecord::new())
    }

    async fn imports(&self, options: OptionsOverrides) -> Result<Vec<ConfigFragment>> {
        self.emit("imports", Self::overrides(options.overrides))
    }

    async fn unicorn(&self, options: OptionsUnicorn) -> Result<Vec<ConfigFragment>> {
        self.emit("unicorn", Self::overrides(options.overrides))
    }

    async fn jsx(&self) -> Result<Vec<ConfigFragment>> {
        self.emit("jsx", RulesRecord::new())
    }

    async fn typescript(&self, params: TypescriptParams) -> Result<Vec<ConfigFragment>> {
        let mut fragments = self.emit("typescript", params.overrides())?;
        fragments[0].settings = Some(json!({
            "componentExts": params.component_exts,
            "projectType": params.project_type,
        }));
        Ok(fragments)
    }

    async fn regexp(&self, options: OptionsRegExp) -> Result<Vec<ConfigFragment>> {
        self.emit("regexp", Self::overrides(options.overrides))
    }

    async fn svelte(&self, params: SvelteParams) -> Result<Vec<ConfigFragment>> {
        let mut fragments = self.emit("svelte", params.overrides)?;
        fragments[0].settings = Some(json!({ "typescript": params.typescript }));
        Ok(fragments)
    }

    async fn jsonc(&self, options: OptionsOverrides) -> Result<Vec<ConfigFragment>> {
        self.emit("jsonc", Self::overrides(options.overrides))
    }

    async fn sort_package_json(&self) -> Result<Vec<ConfigFragment>> {
        self.emit("sort-package-json", RulesRecord::new())
    }

    async fn sort_tsconfig(&self) -> Result<Vec<ConfigFragment>> {
        self.emit("sort-tsconfig", RulesRecord::new())
    }

    async fn disables(&self) -> Result<Vec<ConfigFragment>> {
        self.emit("disables", RulesRecord::new())
    }
}
