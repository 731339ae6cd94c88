//! Flatkit Core
//!
//! Assembles an ordered list of lint flat-config fragments from a
//! declarative options object. The pieces:
//!
//! - [`resolve`]: turns boolean-or-object switches into concrete sub-options
//!   and merges the two override sources.
//! - [`factory`]: decides which fragment producers run, in a fixed order.
//! - [`merge`]: injects merged overrides and fuses allow-listed root keys.
//! - [`composer`]: the chainable, lazily resolved list with plugin renaming.
//!
//! Fragment producers are supplied through [`ConfigProducers`]; the
//! typed-language default goes through a [`DependencyOracle`].

pub mod composer;
pub mod config;
pub mod error;
pub mod factory;
pub mod fragment;
pub mod merge;
pub mod options;
pub mod oracle;
pub mod producer;
pub mod resolve;
pub mod result;

pub use composer::{ComposerPhase, FlatConfigComposer, FragmentJob, PluginRenames};
pub use config::{ConfigLoader, ProjectFile, options_schema};
pub use error::{ErrorKind, FlatkitError};
pub use factory::{FlatConfigFactory, TYPESCRIPT_PACKAGE};
pub use fragment::{ConfigFragment, PluginMap, RuleEntry, RuleSeverity, RulesRecord, rules_from_json};
pub use merge::{FLAT_CONFIG_PROPS, fused_config, validate_global, with_merged_overrides};
pub use options::{
    GitignoreOptions, GlobalConfig, IgnoresFn, OptionsConfig, OptionsOverrides, OptionsRegExp,
    OptionsTypescript, OptionsUnicorn, ProjectType, RegExpLevel, SubOptions, Toggle, UserIgnores,
};
pub use oracle::{DependencyOracle, NodeModulesOracle, StaticOracle};
pub use producer::{
    ConfigProducers, GITIGNORE_FRAGMENT_NAME, GitignoreParams, SvelteParams, TypescriptParams,
};
pub use resolve::{Integration, get_overrides, resolve_sub_options};
pub use result::Result;

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flatkit=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
