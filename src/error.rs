//! Error types for the virtual filesystem and its surrounding tooling.

use thiserror::Error;

/// Errors produced by tree operations.
///
/// Every variant is recoverable: a missing path or a name collision is routine
/// user input, so callers surface these as messages rather than aborting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    #[error("No such file or directory: {0}")]
    NotFound(String),

    #[error("An item with this name already exists: {0}")]
    Conflict(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("Is a directory: {0}")]
    IsADirectory(String),
}

/// Errors produced by configuration, seeding, logging and the CLI layer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Seed error: {0}")]
    SeedError(String),

    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
