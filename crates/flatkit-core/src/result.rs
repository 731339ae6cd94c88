//! Result type alias for config composition

use crate::error::FlatkitError;

/// Standard Result type for config composition
pub type Result<T> = std::result::Result<T, FlatkitError>;
