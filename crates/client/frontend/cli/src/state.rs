//! Application state for the CLI client.
//!
//! Owns everything the terminal shows besides the game itself: the input
//! line, the suggestion list and the message log. [`AppState::apply`] is the
//! single place where keyboard commands reach the [`GameService`].
use client_frontend_core::{Autocomplete, FrontendConfig, MessageLog, RoundStatus, UiFrame};
use runtime::{GameService, RuntimeError};

use crate::input::KeyAction;

pub struct AppState {
    pub input: String,
    pub suggestions: Autocomplete,
    pub messages: MessageLog,
    suggestion_limit: usize,
}

impl AppState {
    pub fn new(config: &FrontendConfig) -> Self {
        Self {
            input: String::new(),
            suggestions: Autocomplete::new(),
            messages: MessageLog::new(config.messages.capacity),
            suggestion_limit: config.suggestions.limit,
        }
    }

    pub fn frame(&self, service: &GameService, message_limit: usize) -> UiFrame {
        UiFrame::from_session(service.session(), &self.messages, message_limit)
    }

    pub fn status(&self, service: &GameService) -> RoundStatus {
        self.frame(service, 0).status
    }

    /// Applies one command. Returns `true` when the client should exit.
    pub async fn apply(&mut self, action: KeyAction, service: &mut GameService) -> bool {
        match action {
            KeyAction::Quit => return true,
            KeyAction::Insert(c) => {
                self.input.push(c);
                self.refresh_suggestions(service);
            }
            KeyAction::Backspace => {
                self.input.pop();
                self.refresh_suggestions(service);
            }
            KeyAction::NextSuggestion => self.suggestions.next(),
            KeyAction::PreviousSuggestion => self.suggestions.previous(),
            KeyAction::DismissSuggestions => self.suggestions.clear(),
            KeyAction::Submit => self.submit(service).await,
            KeyAction::NewGame => self.new_game(service).await,
            KeyAction::None => {}
        }
        false
    }

    fn refresh_suggestions(&mut self, service: &GameService) {
        let items = service
            .suggest(&self.input)
            .iter()
            .take(self.suggestion_limit)
            .map(|record| record.title())
            .collect();
        self.suggestions.set_items(items);
    }

    async fn submit(&mut self, service: &mut GameService) {
        let Some(name) = self.suggestions.submission(&self.input) else {
            return;
        };

        match service.submit_guess_by_name(&name).await {
            Ok(outcome) => {
                self.input.clear();
                self.suggestions.clear();
                if outcome.won {
                    let answer = service
                        .session()
                        .answer()
                        .map(|record| record.title())
                        .unwrap_or_default();
                    self.messages.success(format!(
                        "{} it is! Solved in {} attempts. Press [n] for a new game.",
                        answer, outcome.attempts
                    ));
                    if outcome.new_best {
                        self.messages.success("New best score!");
                    }
                }
            }
            Err(err) => self.report(err),
        }
    }

    async fn new_game(&mut self, service: &mut GameService) {
        self.input.clear();
        self.suggestions.clear();
        match service.start_new_game().await {
            Ok(_) => self.messages.info("A new creature has been chosen. Good luck!"),
            Err(err) => self.report(err),
        }
    }

    fn report(&mut self, err: RuntimeError) {
        if err.is_recoverable() {
            tracing::debug!("Recoverable error: {}", err);
            self.messages.warn(err.to_string());
        } else {
            tracing::error!("Game service error: {}", err);
            self.messages.error(err.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use client_frontend_core::MessageLevel;
    use game_core::{CreatureId, CreatureRecord, Dex, Generation};
    use runtime::{DexSource, InMemoryStore, RetryPolicy};

    use super::*;

    fn record(id: u32, name: &str, height: f64, types: &[&str]) -> CreatureRecord {
        CreatureRecord::new(
            CreatureId(id),
            name,
            height,
            10.0 * height,
            types.iter().copied(),
            Generation::from_ordinal(1),
        )
    }

    async fn service() -> GameService {
        let dex = Dex::new([
            record(4, "charmander", 0.6, &["fire"]),
            record(6, "charizard", 1.7, &["fire", "flying"]),
            record(7, "squirtle", 0.5, &["water"]),
        ]);
        let mut service = GameService::builder()
            .source(Arc::new(DexSource::new(dex)))
            .store(Arc::new(InMemoryStore::new()))
            .retry(RetryPolicy::none())
            .seed(7)
            .build()
            .unwrap();
        service.rehydrate().await.unwrap();
        service
    }

    async fn type_text(state: &mut AppState, service: &mut GameService, text: &str) {
        for c in text.chars() {
            state.apply(KeyAction::Insert(c), service).await;
        }
    }

    fn last_message(state: &AppState) -> (String, MessageLevel) {
        let entry = state.messages.recent(1).next().unwrap();
        (entry.text.clone(), entry.level)
    }

    #[tokio::test]
    async fn typing_refreshes_suggestions() {
        let mut service = service().await;
        let mut state = AppState::new(&FrontendConfig::default());

        type_text(&mut state, &mut service, "ch").await;
        assert_eq!(state.suggestions.items(), ["Charizard", "Charmander"]);

        state.apply(KeyAction::NextSuggestion, &mut service).await;
        assert_eq!(state.suggestions.active_item(), Some("Charmander"));

        state.apply(KeyAction::Backspace, &mut service).await;
        state.apply(KeyAction::Backspace, &mut service).await;
        assert!(!state.suggestions.is_open());
    }

    #[tokio::test]
    async fn unknown_name_warns_without_a_guess() {
        let mut service = service().await;
        let mut state = AppState::new(&FrontendConfig::default());

        type_text(&mut state, &mut service, "mewtwo").await;
        state.apply(KeyAction::Submit, &mut service).await;

        assert_eq!(service.session().attempts(), 0);
        assert_eq!(last_message(&state).1, MessageLevel::Warning);
        assert_eq!(state.input, "mewtwo");
    }

    #[tokio::test]
    async fn winning_then_starting_over() {
        let mut service = service().await;
        let mut state = AppState::new(&FrontendConfig::default());
        let answer = service.session().answer().unwrap().name().to_string();

        type_text(&mut state, &mut service, &answer).await;
        state.apply(KeyAction::DismissSuggestions, &mut service).await;
        state.apply(KeyAction::Submit, &mut service).await;

        assert_eq!(state.status(&service), RoundStatus::Won);
        assert!(state.input.is_empty());
        assert!(
            state
                .messages
                .recent(2)
                .any(|entry| entry.text.starts_with("New best"))
        );

        state.apply(KeyAction::NewGame, &mut service).await;

        assert_eq!(state.status(&service), RoundStatus::Playing);
        assert_eq!(service.session().attempts(), 0);
        assert_eq!(service.session().best(), Some(1));
        assert_eq!(last_message(&state).1, MessageLevel::Info);
    }

    #[tokio::test]
    async fn quit_stops_the_client() {
        let mut service = service().await;
        let mut state = AppState::new(&FrontendConfig::default());

        assert!(state.apply(KeyAction::Quit, &mut service).await);
        assert!(!state.apply(KeyAction::None, &mut service).await);
    }
}
