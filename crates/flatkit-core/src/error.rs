//! Error types and handling for config composition

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for flat-config composition
#[derive(Debug, Error)]
pub enum FlatkitError {
    /// The root options carried a `files` key
    #[error(
        "The first argument should not contain the \"files\" property as the options are supposed to be global. Place it in the second or later config instead."
    )]
    FilesInGlobalOptions,

    /// Configuration loading or validation errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// A fragment producer failed or its deferred computation rejected
    #[error("Producer '{producer}' failed: {message}")]
    ProducerError { producer: String, message: String },

    /// A composer operation referenced a fragment name that is not present
    #[error("Config item not found: {name}")]
    ConfigNotFound { name: String },

    /// A plugin renaming table that would not be idempotent
    #[error("Invalid plugin renaming table: {message}")]
    InvalidRenames { message: String },

    /// Resolution was requested again on a composer whose first resolution failed
    #[error("Composer resolution previously failed: {message}")]
    ComposerFailed { message: String },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    InternalError { message: String },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Usage,
    Config,
    Producer,
    Composition,
    Io,
    Internal,
}

impl FlatkitError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FlatkitError::FilesInGlobalOptions => ErrorKind::Usage,
            FlatkitError::ConfigError { .. } => ErrorKind::Config,
            FlatkitError::InvalidRenames { .. } => ErrorKind::Config,
            FlatkitError::ProducerError { .. } => ErrorKind::Producer,
            FlatkitError::ConfigNotFound { .. } => ErrorKind::Composition,
            FlatkitError::ComposerFailed { .. } => ErrorKind::Composition,
            FlatkitError::IoError { .. } => ErrorKind::Io,
            FlatkitError::InternalError { .. } => ErrorKind::Internal,
        }
    }

    /// Usage errors are raised before any asynchronous work starts
    pub fn is_usage_error(&self) -> bool {
        self.kind() == ErrorKind::Usage
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a producer error
    pub fn producer_error(producer: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProducerError {
            producer: producer.into(),
            message: message.into(),
        }
    }

    /// Create a not-found error for a named fragment
    pub fn config_not_found(name: impl Into<String>) -> Self {
        Self::ConfigNotFound { name: name.into() }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    /// Create an internal error
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for FlatkitError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            path: PathBuf::new(),
            source: err,
        }
    }
}
