//! Error types for notelinks.
//!
//! The reference index itself never fails; these cover the fallible edges
//! around it (notebook configuration and collaborator output).

use thiserror::Error;

/// Top-level result type for notelinks operations.
pub type Result<T> = std::result::Result<T, NotelinksError>;

/// Top-level error type for notelinks.
#[derive(Debug, Error)]
pub enum NotelinksError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Errors related to notebook configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("notebook name must not be blank")]
    MissingName,

    #[error("notebook config parse error: {0}")]
    Parse(String),
}
