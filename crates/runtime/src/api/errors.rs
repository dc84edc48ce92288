//! Unified error type surfaced by the game service.
//!
//! Wraps session, source and repository failures so clients can show one
//! message without caring which layer produced it.

use game_core::{ErrorSeverity, GameError, SessionError};
use thiserror::Error;

pub use crate::repository::RepositoryError;
pub use crate::source::SourceError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("game service requires a creature source before building")]
    MissingSource,

    #[error("game service requires a store before building")]
    MissingStore,
}

impl RuntimeError {
    /// Whether the player can simply carry on (retype a name, press new game).
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Session(e) => !e.severity().is_internal(),
            Self::Source(SourceError::NotFound(_)) => true,
            Self::Source(e) => e.is_transient(),
            _ => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Session(e) => e.severity(),
            Self::Source(SourceError::NotFound(_)) => ErrorSeverity::Validation,
            _ if self.is_recoverable() => ErrorSeverity::Recoverable,
            _ => ErrorSeverity::Internal,
        }
    }
}
