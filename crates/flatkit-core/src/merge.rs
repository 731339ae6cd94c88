//! Override injection and global-key fusion

use crate::error::FlatkitError;
use crate::fragment::ConfigFragment;
use crate::options::{GlobalConfig, OptionsConfig, SubOptions};
use crate::resolve::{Integration, get_overrides};
use crate::result::Result;

/// Flat-config keys that may be fused from the root options
pub const FLAT_CONFIG_PROPS: [&str; 7] = [
    "name",
    "languageOptions",
    "linterOptions",
    "processor",
    "plugins",
    "rules",
    "settings",
];

/// Inject the merged override map into resolved sub-options
///
/// Returns a fresh record; `sub_options` is consumed, never the caller's.
pub fn with_merged_overrides<T: SubOptions>(
    options: &OptionsConfig,
    integration: Integration,
    mut sub_options: T,
) -> T {
    sub_options.set_overrides(get_overrides(options, integration));
    sub_options
}

/// Reject root options that are scoped to files
pub fn validate_global(options: &OptionsConfig) -> Result<()> {
    if options.global.files.is_some() {
        return Err(FlatkitError::FilesInGlobalOptions);
    }
    Ok(())
}

/// Build the fusion fragment from allow-listed root keys
///
/// `None` when the root options carry none of them.
pub fn fused_config(options: &OptionsConfig) -> Option<ConfigFragment> {
    let GlobalConfig {
        name,
        language_options,
        linter_options,
        processor,
        plugins,
        rules,
        settings,
        files: _,
    } = options.global.clone();

    let fused = ConfigFragment {
        name,
        language_options,
        linter_options,
        processor,
        plugins,
        rules,
        settings,
        ..Default::default()
    };

    (fused != ConfigFragment::default()).then_some(fused)
}
