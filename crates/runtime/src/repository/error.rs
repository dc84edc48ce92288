//! Error types raised by store implementations.

use thiserror::Error;

/// Errors surfaced by key-value stores.
///
/// Malformed stored values are not errors: the session repository treats
/// them as absent.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("invalid store key {0:?}")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
