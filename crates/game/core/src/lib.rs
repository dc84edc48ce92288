//! Rules of the creature guessing game, free of I/O.
//!
//! `game-core` turns raw source data into comparable records, judges a guess
//! against the answer, grades how close it came, and tracks the state of a
//! game. Everything here is deterministic: randomness enters only through a
//! caller-supplied [`RandomSource`], and persistence is left to the runtime.
pub mod compare;
pub mod config;
pub mod dex;
pub mod error;
pub mod grade;
pub mod record;
pub mod rng;
pub mod session;

pub use compare::{
    GenerationJudgment, Judgment, NumericJudgment, ToleranceBand, TypeJudgment, compare,
};
pub use config::GameConfig;
pub use dex::Dex;
pub use error::{ErrorSeverity, GameError};
pub use grade::{Feedback, Grades, Severity, grade};
pub use record::{
    CreatureId, CreatureRecord, Generation, RawCreature, RawValue, TypeSet, canonical_name,
    normalize,
};
pub use rng::{PcgRng, RandomSource};
pub use session::{
    GameSession, GuessEntry, GuessOutcome, SessionError, draw_answer, draw_id,
};
