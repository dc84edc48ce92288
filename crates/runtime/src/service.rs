//! Game service: the single owner of a [`GameSession`].
//!
//! Every operation is an explicit method a frontend or test can call. Each
//! mutation is applied to a copy of the session, the copy is persisted, and
//! only then does it replace the live session; a failed draw, lookup or
//! write leaves the game exactly as it was.
//!
//! Methods take `&mut self`, so no two mutations can be in flight at once.

use std::sync::Arc;

use game_core::{
    CreatureRecord, GameConfig, GameSession, GuessOutcome, PcgRng, SessionError,
};
use rand::RngCore;

use crate::api::{Result, RuntimeError};
use crate::repository::{KeyValueStore, SessionRepository};
use crate::source::{CreatureSource, RetryPolicy};

/// What [`GameService::rehydrate`] found in the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rehydrated {
    /// A saved game was resumed with this many guesses replayed.
    Resumed { attempts: u32 },
    /// Nothing usable was saved; a new game was started.
    Fresh,
}

pub struct GameService {
    session: GameSession,
    repository: SessionRepository,
    source: Arc<dyn CreatureSource>,
    retry: RetryPolicy,
    rng: PcgRng,
    config: GameConfig,
}

impl GameService {
    pub fn builder() -> GameServiceBuilder {
        GameServiceBuilder::new()
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn source(&self) -> &Arc<dyn CreatureSource> {
        &self.source
    }

    pub fn repository(&self) -> &SessionRepository {
        &self.repository
    }

    /// Restore the saved game, or start a new one when none is usable.
    ///
    /// A saved answer is reused as-is, never redrawn. Saved guesses are
    /// replayed against it without counting as new attempts, and the best
    /// score is loaded unchanged. Malformed values count as absent, but a
    /// store that fails to read the answer or the guesses is an error and
    /// nothing is written over them.
    pub async fn rehydrate(&mut self) -> Result<Rehydrated> {
        let saved = self
            .repository
            .load()
            .inspect_err(|e| tracing::error!("Could not read saved session: {}", e))?;

        if saved.answer.is_none() && !saved.guesses.is_empty() {
            tracing::warn!(
                "Discarding {} saved guesses without a saved answer",
                saved.guesses.len()
            );
        }

        self.session = saved.into_session();

        if self.session.answer().is_some() {
            let attempts = self.session.attempts();
            tracing::info!(
                "Resumed saved game: {} guesses, best {:?}",
                attempts,
                self.session.best()
            );
            return Ok(Rehydrated::Resumed { attempts });
        }

        self.start_new_game().await?;
        Ok(Rehydrated::Fresh)
    }

    /// Draw a new answer, clear the guesses, keep the best score.
    pub async fn start_new_game(&mut self) -> Result<&CreatureRecord> {
        let previous = self.session.answer().map(CreatureRecord::id);
        let answer = self
            .retry
            .draw_answer(self.source.as_ref(), previous, &mut self.rng)
            .await?;

        let mut next = self.session.clone();
        next.begin(answer);
        self.repository.save_game(&next)?;

        self.session = next;
        tracing::info!("Started new game from {} source", self.source.name());

        self.session
            .answer()
            .ok_or(RuntimeError::Session(SessionError::NoActiveGame))
    }

    /// Judge an already resolved record against the answer.
    pub fn submit_guess(&mut self, record: CreatureRecord) -> Result<GuessOutcome> {
        let mut next = self.session.clone();
        let guessed = record.canonical_name().to_string();
        let outcome = next.submit_guess(record)?;

        self.repository
            .save_progress(&next, outcome.new_best.then_some(outcome.attempts))?;

        self.session = next;
        tracing::debug!("Guess {} judged {:?}", guessed, outcome.feedback.judgment);
        if outcome.won {
            tracing::info!(
                "Round won in {} attempts (new best: {})",
                outcome.attempts,
                outcome.new_best
            );
        }

        Ok(outcome)
    }

    /// Resolve a typed name through the source, then judge it.
    ///
    /// Unknown names fail with [`SourceError::NotFound`](crate::SourceError)
    /// and change nothing.
    pub async fn submit_guess_by_name(&mut self, name: &str) -> Result<GuessOutcome> {
        if self.session.is_won() {
            return Err(SessionError::RoundOver.into());
        }
        if self.session.answer().is_none() {
            return Err(SessionError::NoActiveGame.into());
        }

        let record = self.source.fetch_by_name(name).await?;
        self.submit_guess(record)
    }

    /// Names offered for a partially typed guess.
    pub fn suggest(&self, query: &str) -> Vec<CreatureRecord> {
        self.source.suggest(query, self.config.suggestion_limit)
    }

    /// Forget the saved game and best score, then start over.
    pub async fn reset(&mut self) -> Result<&CreatureRecord> {
        self.repository.clear()?;
        self.session = GameSession::new();
        tracing::info!("Cleared saved session");
        self.start_new_game().await
    }
}

/// Builder for [`GameService`].
///
/// A source and a store are required. The random generator is seeded from
/// OS entropy unless a seed is given.
#[derive(Default)]
pub struct GameServiceBuilder {
    source: Option<Arc<dyn CreatureSource>>,
    store: Option<Arc<dyn KeyValueStore>>,
    retry: RetryPolicy,
    seed: Option<u64>,
    config: GameConfig,
}

impl GameServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn source(mut self, source: Arc<dyn CreatureSource>) -> Self {
        self.source = Some(source);
        self
    }

    #[must_use]
    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    #[must_use]
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Assemble the service with an empty session; call
    /// [`GameService::rehydrate`] before playing.
    pub fn build(self) -> Result<GameService> {
        let source = self.source.ok_or(RuntimeError::MissingSource)?;
        let store = self.store.ok_or(RuntimeError::MissingStore)?;
        let seed = self
            .seed
            .unwrap_or_else(|| rand::thread_rng().next_u64());

        Ok(GameService {
            session: GameSession::new(),
            repository: SessionRepository::new(store),
            source,
            retry: self.retry,
            rng: PcgRng::seeded(seed),
            config: self.config,
        })
    }
}
