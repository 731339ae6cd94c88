use flatkit_core::{ConfigFragment, Result};
use serde_json::json;

use crate::globs::{GLOB_JSX, GLOB_TSX};

pub const JSX_SETUP: &str = "flatkit/jsx/setup";

/// Enable JSX parsing for JSX/TSX files
pub fn jsx() -> Result<Vec<ConfigFragment>> {
    Ok(vec![
        ConfigFragment::named(JSX_SETUP)
            .with_files([GLOB_JSX, GLOB_TSX])
            .with_language_options(json!({
                "parserOptions": { "ecmaFeatures": { "jsx": true } },
            })),
    ])
}
