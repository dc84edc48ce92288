//! Cross-frontend primitives for presenting the game.
//!
//! Houses the message log, the suggestion list state, and the view-model
//! types that the terminal client and any future graphical client can reuse.
pub mod autocomplete;
pub mod config;
pub mod frontend;
pub mod message;
pub mod view_model;

pub use autocomplete::Autocomplete;
pub use config::{FrontendConfig, MessageConfig, SuggestionConfig};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use view_model::{COLUMNS, Cell, GuessRow, RoundStatus, ScoreSnapshot, UiFrame};
