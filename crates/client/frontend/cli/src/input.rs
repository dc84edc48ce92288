//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use client_frontend_core::RoundStatus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Append a character to the guess input.
    Insert(char),
    /// Delete the last character of the guess input.
    Backspace,
    NextSuggestion,
    PreviousSuggestion,
    /// Close the suggestion list, keeping the typed text.
    DismissSuggestions,
    /// Submit the active suggestion or the typed name.
    Submit,
    /// Draw a new answer. Only produced once the round is over.
    NewGame,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into commands depending on the round status.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key(
        &self,
        key: KeyEvent,
        status: RoundStatus,
        suggestions_open: bool,
    ) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            return KeyAction::Quit;
        }

        match status {
            RoundStatus::Playing => self.handle_playing(key, suggestions_open),
            RoundStatus::Won | RoundStatus::NoGame => self.handle_round_over(key),
        }
    }

    fn handle_playing(&self, key: KeyEvent, suggestions_open: bool) -> KeyAction {
        match key.code {
            KeyCode::Enter => KeyAction::Submit,
            KeyCode::Down | KeyCode::Tab => KeyAction::NextSuggestion,
            KeyCode::Up | KeyCode::BackTab => KeyAction::PreviousSuggestion,
            KeyCode::Esc if suggestions_open => KeyAction::DismissSuggestions,
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                KeyAction::Insert(c)
            }
            _ => KeyAction::None,
        }
    }

    /// Won (or never started): the only way forward is a new game.
    fn handle_round_over(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('N') => KeyAction::NewGame,
            KeyCode::Esc | KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}
