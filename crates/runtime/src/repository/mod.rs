//! Persistence of session state.
//!
//! [`KeyValueStore`] is the opaque string store; [`SessionRepository`] maps a
//! [`game_core::GameSession`] onto it.

pub mod error;
pub mod file;
pub mod memory;
pub mod session;
pub mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileStore;
pub use memory::InMemoryStore;
pub use session::{
    BEST_SCORE_KEY, SAVED_ANSWER_KEY, SAVED_GUESSES_KEY, SESSION_KEYS, SavedSession,
    SessionRepository,
};
pub use traits::KeyValueStore;
