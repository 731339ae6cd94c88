use flatkit_core::{ConfigFragment, Result, UserIgnores};

use super::to_strings;
use crate::globs::GLOB_EXCLUDE;

pub const IGNORES: &str = "flatkit/ignores";

/// Global ignores: built-in exclusions extended or rewritten by the caller
pub fn ignores(user: Option<UserIgnores>) -> Result<Vec<ConfigFragment>> {
    let originals = to_strings(GLOB_EXCLUDE);
    let ignores = match user {
        Some(user) => user.apply(originals),
        None => originals,
    };

    Ok(vec![ConfigFragment::named(IGNORES).with_ignores(ignores)])
}
