//! Error types for the kintai ecosystem.

use thiserror::Error;

/// Errors that can occur in kintai operations.
#[derive(Error, Debug)]
pub enum KintaiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No signed-in user: attendance operations need a resolved user id")]
    MissingUser,

    #[error("A punch is already in flight")]
    Busy,

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for kintai operations.
pub type KintaiResult<T> = Result<T, KintaiError>;
