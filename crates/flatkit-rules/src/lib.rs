//! Flatkit Rules
//!
//! The built-in fragment producers: one module per integration under
//! [`configs`], the gitignore loader, and shared globs. [`BuiltinProducers`]
//! wires them into the core producer trait.

#![recursion_limit = "512"]

pub mod configs;
pub mod gitignore;
pub mod globs;

use async_trait::async_trait;
use flatkit_core::{
    ConfigFragment, ConfigProducers, GitignoreParams, OptionsOverrides, OptionsRegExp,
    OptionsUnicorn, Result, SvelteParams, TypescriptParams, UserIgnores,
};

/// Producer set backed by the built-in rule tables
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinProducers;

impl BuiltinProducers {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ConfigProducers for BuiltinProducers {
    async fn ignores(&self, user: Option<UserIgnores>) -> Result<Vec<ConfigFragment>> {
        configs::ignores::ignores(user)
    }

    async fn gitignore(&self, params: GitignoreParams) -> Result<Vec<ConfigFragment>> {
        gitignore::gitignore(params).await
    }

    async fn javascript(&self, options: OptionsOverrides) -> Result<Vec<ConfigFragment>> {
        configs::javascript::javascript(options)
    }

    async fn comments(&self) -> Result<Vec<ConfigFragment>> {
        configs::comments::comments()
    }

    async fn node(&self) -> Result<Vec<ConfigFragment>> {
        configs::node::node()
    }

    async fn jsdoc(&self) -> Result<Vec<ConfigFragment>> {
        configs::jsdoc::jsdoc()
    }

    async fn perfectionist(&self) -> Result<Vec<ConfigFragment>> {
        configs::perfectionist::perfectionist()
    }

    async fn imports(&self, options: OptionsOverrides) -> Result<Vec<ConfigFragment>> {
        configs::imports::imports(options)
    }

    async fn unicorn(&self, options: OptionsUnicorn) -> Result<Vec<ConfigFragment>> {
        configs::unicorn::unicorn(options)
    }

    async fn jsx(&self) -> Result<Vec<ConfigFragment>> {
        configs::jsx::jsx()
    }

    async fn typescript(&self, params: TypescriptParams) -> Result<Vec<ConfigFragment>> {
        configs::typescript::typescript(params)
    }

    async fn regexp(&self, options: OptionsRegExp) -> Result<Vec<ConfigFragment>> {
        configs::regexp::regexp(options)
    }

    async fn svelte(&self, params: SvelteParams) -> Result<Vec<ConfigFragment>> {
        configs::svelte::svelte(params)
    }

    async fn jsonc(&self, options: OptionsOverrides) -> Result<Vec<ConfigFragment>> {
        configs::jsonc::jsonc(options)
    }

    async fn sort_package_json(&self) -> Result<Vec<ConfigFragment>> {
        configs::sort::sort_package_json()
    }

    async fn sort_tsconfig(&self) -> Result<Vec<ConfigFragment>> {
        configs::sort::sort_tsconfig()
    }

    async fn disables(&self) -> Result<Vec<ConfigFragment>> {
        configs::disables::disables()
    }
}
