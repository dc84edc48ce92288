//! Runtime services for the creature guessing game.
//!
//! This crate connects the pure rules in `game-core` to the outside world:
//! where creatures come from, where sessions are saved, and the
//! [`GameService`] that ties both to a live [`game_core::GameSession`].
//!
//! Modules are organized by responsibility:
//! - [`service`] hosts the game service and its builder
//! - [`api`] exposes the error types downstream clients handle
//! - [`source`] provides the local and remote creature sources
//! - [`repository`] provides the key-value stores and session persistence
pub mod api;
pub mod repository;
pub mod service;
pub mod source;

pub use api::{Result, RuntimeError};
pub use repository::{
    BEST_SCORE_KEY, FileStore, InMemoryStore, KeyValueStore, RepositoryError, SAVED_ANSWER_KEY,
    SAVED_GUESSES_KEY, SESSION_KEYS, SavedSession, SessionRepository,
};
pub use service::{GameService, GameServiceBuilder, Rehydrated};
pub use source::{
    CreatureSource, DexSource, RemoteSource, RetryPolicy, SourceError, SourceResult,
};
