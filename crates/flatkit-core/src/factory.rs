//! Config factory
//!
//! Turns root options into an ordered list of fragment jobs and wraps them
//! in a [`FlatConfigComposer`]. The order is fixed: ignores come first so
//! they apply to everything after them, and the disables fragment comes last
//! among generated fragments so nothing generated can re-enable what it
//! suppresses. Caller-supplied fragments follow after that.

use std::future::Future;
use std::sync::Arc;

use crate::composer::{FlatConfigComposer, FragmentJob, PluginRenames};
use crate::fragment::ConfigFragment;
use crate::merge::{fused_config, validate_global, with_merged_overrides};
use crate::options::{OptionsConfig, OptionsOverrides, SubOptions, Toggle};
use crate::oracle::{DependencyOracle, NodeModulesOracle};
use crate::producer::{ConfigProducers, GitignoreParams, SvelteParams, TypescriptParams};
use crate::resolve::{
    Integration, get_overrides, is_enabled, is_enabled_with, resolve_sub_options,
};
use crate::result::Result;

/// Package whose presence turns typed-language rules on by default
pub const TYPESCRIPT_PACKAGE: &str = "typescript";

/// Builds composers from root options
#[derive(Clone)]
pub struct FlatConfigFactory {
    producers: Arc<dyn ConfigProducers>,
    oracle: Arc<dyn DependencyOracle>,
    renames: PluginRenames,
}

impl FlatConfigFactory {
    /// Factory with a working-directory presence check and the default renames
    pub fn new(producers: Arc<dyn ConfigProducers>) -> Self {
        Self {
            producers,
            oracle: Arc::new(NodeModulesOracle::from_current_dir()),
            renames: PluginRenames::defaults(),
        }
    }

    pub fn with_oracle(mut self, oracle: Arc<dyn DependencyOracle>) -> Self {
        self.oracle = oracle;
        self
    }

    pub fn with_renames(mut self, renames: PluginRenames) -> Self {
        self.renames = renames;
        self
    }

    /// Schedule the generated jobs and append the caller's jobs after them
    ///
    /// Fails before any producer is scheduled when the root options carry a
    /// `files` key.
    pub fn compose<I>(&self, options: &OptionsConfig, user_configs: I) -> Result<FlatConfigComposer>
    where
        I: IntoIterator,
        I::Item: Into<FragmentJob>,
    {
        let jobs = self.schedule(options)?;

        let mut composer = FlatConfigComposer::from_jobs(jobs).append_all(user_configs);

        if options.auto_rename_plugins.unwrap_or(true) {
            composer = composer.rename_plugins(self.renames.clone());
        }

        Ok(composer)
    }

    /// Generated jobs in their fixed order
    pub fn schedule(&self, options: &OptionsConfig) -> Result<Vec<FragmentJob>> {
        validate_global(options)?;

        let mut jobs = Vec::new();
        let producers = &self.producers;

        let ignores = options.ignores.clone();
        jobs.push(job(producers, "ignores", move |p| async move {
            p.ignores(ignores).await
        }));

        if let Some(params) = gitignore_params(options) {
            jobs.push(job(producers, "gitignore", move |p| async move {
                p.gitignore(params).await
            }));
        }

        let javascript = with_merged_overrides(
            options,
            Integration::Javascript,
            options.javascript.clone().unwrap_or_default(),
        );
        jobs.push(job(producers, "javascript", move |p| async move {
            p.javascript(javascript).await
        }));
        jobs.push(job(producers, "comments", |p| async move { p.comments().await }));
        jobs.push(job(producers, "node", |p| async move { p.node().await }));
        jobs.push(job(producers, "jsdoc", |p| async move { p.jsdoc().await }));
        jobs.push(job(producers, "perfectionist", |p| async move {
            p.perfectionist().await
        }));

        if is_enabled(options.imports.as_ref(), true) {
            let imports = merged(options, Integration::Imports, options.imports.as_ref());
            jobs.push(job(producers, "imports", move |p| async move {
                p.imports(imports).await
            }));
        } else {
            skipped("imports");
        }

        if is_enabled(options.unicorn.as_ref(), true) {
            let unicorn = merged(options, Integration::Unicorn, options.unicorn.as_ref());
            jobs.push(job(producers, "unicorn", move |p| async move {
                p.unicorn(unicorn).await
            }));
        } else {
            skipped("unicorn");
        }

        if options.jsx.unwrap_or(true) {
            jobs.push(job(producers, "jsx", |p| async move { p.jsx().await }));
        } else {
            skipped("jsx");
        }

        let typescript_enabled = is_enabled_with(options.typescript.as_ref(), || {
            self.oracle.is_installed(TYPESCRIPT_PACKAGE)
        });
        if typescript_enabled {
            let params = TypescriptParams {
                options: merged(options, Integration::Typescript, options.typescript.as_ref()),
                component_exts: options.component_exts.clone(),
                project_type: options.project_type.unwrap_or_default(),
            };
            jobs.push(job(producers, "typescript", move |p| async move {
                p.typescript(params).await
            }));
        } else {
            skipped("typescript");
        }

        if is_enabled(options.regexp.as_ref(), true) {
            let regexp = merged(options, Integration::Regexp, options.regexp.as_ref());
            jobs.push(job(producers, "regexp", move |p| async move {
                p.regexp(regexp).await
            }));
        } else {
            skipped("regexp");
        }

        if is_enabled(options.svelte.as_ref(), false) {
            let params = SvelteParams {
                overrides: get_overrides(options, Integration::Svelte),
                typescript: typescript_enabled,
            };
            jobs.push(job(producers, "svelte", move |p| async move {
                p.svelte(params).await
            }));
        } else {
            skipped("svelte");
        }

        if is_enabled(options.jsonc.as_ref(), true) {
            let jsonc: OptionsOverrides =
                merged(options, Integration::Jsonc, options.jsonc.as_ref());
            jobs.push(job(producers, "jsonc", move |p| async move {
                p.jsonc(jsonc).await
            }));
            jobs.push(job(producers, "sort-package-json", |p| async move {
                p.sort_package_json().await
            }));
            jobs.push(job(producers, "sort-tsconfig", |p| async move {
                p.sort_tsconfig().await
            }));
        } else {
            skipped("jsonc");
        }

        jobs.push(job(producers, "disables", |p| async move { p.disables().await }));

        if let Some(fused) = fused_config(options) {
            tracing::debug!("Fusing global keys from root options into one fragment");
            jobs.push(FragmentJob::from(fused));
        }

        tracing::debug!("Scheduled {} fragment jobs", jobs.len());
        Ok(jobs)
    }
}

/// Resolved sub-options with merged overrides for a switch
fn merged<T: SubOptions>(
    options: &OptionsConfig,
    integration: Integration,
    switch: Option<&Toggle<T>>,
) -> T {
    with_merged_overrides(options, integration, resolve_sub_options(switch))
}

fn gitignore_params(options: &OptionsConfig) -> Option<GitignoreParams> {
    match options.gitignore.as_ref() {
        None | Some(Toggle::Enabled) => Some(GitignoreParams::lenient()),
        Some(Toggle::Custom(custom)) => Some(GitignoreParams::from_options(custom)),
        Some(Toggle::Disabled) => {
            skipped("gitignore");
            None
        }
    }
}

fn skipped(integration: &str) {
    tracing::debug!(integration, "Integration disabled, skipping");
}

/// Defer a producer call until the composer resolves
fn job<F, Fut>(
    producers: &Arc<dyn ConfigProducers>,
    integration: &'static str,
    call: F,
) -> FragmentJob
where
    F: FnOnce(Arc<dyn ConfigProducers>) -> Fut,
    Fut: Future<Output = Result<Vec<ConfigFragment>>> + Send + 'static,
{
    tracing::debug!(integration, "Scheduling fragment job");
    FragmentJob::deferred(call(producers.clone()))
}
