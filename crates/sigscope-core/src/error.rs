//! Error types for sigscope-core.

use thiserror::Error;

/// Error type for sigscope-core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unknown catalog label: '{0}'")]
    UnknownLabel(String),

    #[error("Invalid signal: {0}")]
    InvalidSignal(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, Error>;
