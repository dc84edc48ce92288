//! View-model snapshots derived from a [`game_core::GameSession`].
use game_core::{CreatureRecord, GameSession, GuessEntry, Severity};

use crate::message::{MessageEntry, MessageLog};

/// Results table header, in cell order.
pub const COLUMNS: [&str; 5] = ["Name", "Height", "Weight", "Types", "Generation"];

/// High-level snapshot of the game used by presentation layers.
#[derive(Clone, Debug, PartialEq)]
pub struct UiFrame {
    /// One row per guess, newest first.
    pub rows: Vec<GuessRow>,
    pub score: ScoreSnapshot,
    pub status: RoundStatus,
    pub messages: Vec<MessageEntry>,
}

impl UiFrame {
    pub fn from_session(session: &GameSession, messages: &MessageLog, message_limit: usize) -> Self {
        let status = if session.answer().is_none() {
            RoundStatus::NoGame
        } else if session.is_won() {
            RoundStatus::Won
        } else {
            RoundStatus::Playing
        };

        Self {
            rows: session.guesses().iter().rev().map(GuessRow::from_entry).collect(),
            score: ScoreSnapshot {
                attempts: session.attempts(),
                best: session.best(),
            },
            status,
            messages: messages.recent(message_limit).cloned().collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    NoGame,
    Playing,
    /// The new-game control is offered only in this state.
    Won,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreSnapshot {
    pub attempts: u32,
    pub best: Option<u32>,
}

impl ScoreSnapshot {
    pub fn best_label(&self) -> String {
        self.best
            .map(|best| best.to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

/// One results-table cell: the guessed value, the verdict, and how close.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub value: String,
    pub verdict: &'static str,
    pub severity: Severity,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GuessRow {
    pub name: String,
    pub image: Option<String>,
    pub height: Cell,
    pub weight: Cell,
    pub types: Cell,
    pub generation: Cell,
}

impl GuessRow {
    pub fn from_entry(entry: &GuessEntry) -> Self {
        let record = &entry.record;
        let judgment = &entry.feedback.judgment;
        let grades = &entry.feedback.grades;

        Self {
            name: record.title(),
            image: record.image().map(str::to_string),
            height: Cell {
                value: measurement(record.height(), "m"),
                verdict: judgment.height.into(),
                severity: grades.height,
            },
            weight: Cell {
                value: measurement(record.weight(), "kg"),
                verdict: judgment.weight.into(),
                severity: grades.weight,
            },
            types: Cell {
                value: type_list(record),
                verdict: judgment.types.into(),
                severity: grades.types,
            },
            generation: Cell {
                value: record.generation().label(),
                verdict: judgment.generation.into(),
                severity: grades.generation,
            },
        }
    }

    /// Value cells in [`COLUMNS`] order, after the name.
    pub fn cells(&self) -> [&Cell; 4] {
        [&self.height, &self.weight, &self.types, &self.generation]
    }
}

fn measurement(value: f64, unit: &str) -> String {
    if value.is_finite() {
        format!("{value:.1} {unit}")
    } else {
        "?".to_string()
    }
}

fn type_list(record: &CreatureRecord) -> String {
    if record.types().is_empty() {
        return "none".to_string();
    }
    record
        .types()
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
