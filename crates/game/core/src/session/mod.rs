//! Authoritative state of one player's game.
//!
//! [`GameSession`] is pure: it never touches storage. Callers that persist
//! it apply a transition to a clone, write the clone, and only then replace
//! the live value, so a failed write never leaves a half-updated session.
mod draw;

pub use draw::{draw_answer, draw_id};

use crate::error::{ErrorSeverity, GameError};
use crate::grade::Feedback;
use crate::record::CreatureRecord;
use crate::rng::RandomSource;

/// Errors returned by session transitions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("the dataset is empty; no answer can be drawn")]
    EmptyDex,

    #[error("no game is in progress")]
    NoActiveGame,

    #[error("the round is already won; start a new game")]
    RoundOver,
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyDex => ErrorSeverity::Internal,
            Self::NoActiveGame | Self::RoundOver => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyDex => "SESSION_EMPTY_DEX",
            Self::NoActiveGame => "SESSION_NO_ACTIVE_GAME",
            Self::RoundOver => "SESSION_ROUND_OVER",
        }
    }
}

/// A guess together with its feedback against the answer it was made for.
#[derive(Clone, Debug, PartialEq)]
pub struct GuessEntry {
    pub record: CreatureRecord,
    pub feedback: Feedback,
}

impl GuessEntry {
    pub fn new(record: CreatureRecord, answer: &CreatureRecord) -> Self {
        let feedback = Feedback::evaluate(&record, answer);
        Self { record, feedback }
    }

    pub fn is_full_match(&self) -> bool {
        self.feedback.judgment.is_full_match()
    }
}

/// What a submitted guess did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuessOutcome {
    pub feedback: Feedback,
    pub attempts: u32,
    pub won: bool,
    /// The win set a new best score.
    pub new_best: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameSession {
    answer: Option<CreatureRecord>,
    guesses: Vec<GuessEntry>,
    best: Option<u32>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a session from persisted parts.
    ///
    /// Feedback is recomputed from the stored records, so replaying a saved
    /// game reproduces exactly the judgments it had. Guesses without an
    /// answer cannot be judged and are dropped.
    pub fn restore(
        answer: Option<CreatureRecord>,
        guesses: Vec<CreatureRecord>,
        best: Option<u32>,
    ) -> Self {
        let guesses = match &answer {
            Some(answer) => guesses
                .into_iter()
                .map(|record| GuessEntry::new(record, answer))
                .collect(),
            None => Vec::new(),
        };
        Self {
            answer,
            guesses,
            best,
        }
    }

    pub fn answer(&self) -> Option<&CreatureRecord> {
        self.answer.as_ref()
    }

    pub fn guesses(&self) -> &[GuessEntry] {
        &self.guesses
    }

    /// Guess records in submission order, as persisted.
    pub fn guess_records(&self) -> impl Iterator<Item = &CreatureRecord> {
        self.guesses.iter().map(|entry| &entry.record)
    }

    /// Attempts in the current game; always the number of guesses.
    pub fn attempts(&self) -> u32 {
        u32::try_from(self.guesses.len()).unwrap_or(u32::MAX)
    }

    /// Lowest winning attempt count across all games, if any game was won.
    pub fn best(&self) -> Option<u32> {
        self.best
    }

    /// The round is won once the latest guess fully matches.
    pub fn is_won(&self) -> bool {
        self.guesses.last().is_some_and(GuessEntry::is_full_match)
    }

    /// Draws a new answer from `records` and clears the guesses.
    ///
    /// The previous answer is not drawn again unless it is the only choice.
    /// The best score is kept.
    pub fn start_new_game<R: RandomSource + ?Sized>(
        &mut self,
        records: &[CreatureRecord],
        rng: &mut R,
    ) -> Result<&CreatureRecord, SessionError> {
        let previous = self.answer.as_ref().map(CreatureRecord::id);
        let answer = draw_answer(records, previous, rng)
            .ok_or(SessionError::EmptyDex)?
            .clone();
        Ok(self.begin(answer))
    }

    /// Starts a game with an answer chosen elsewhere.
    pub fn begin(&mut self, answer: CreatureRecord) -> &CreatureRecord {
        self.guesses.clear();
        self.answer.insert(answer)
    }

    /// Judges `record` against the answer and appends it.
    ///
    /// A full match ends the round and updates the best score when this game
    /// took strictly fewer attempts.
    pub fn submit_guess(&mut self, record: CreatureRecord) -> Result<GuessOutcome, SessionError> {
        if self.is_won() {
            return Err(SessionError::RoundOver);
        }
        let answer = self.answer.as_ref().ok_or(SessionError::NoActiveGame)?;

        let entry = GuessEntry::new(record, answer);
        let feedback = entry.feedback;
        let won = entry.is_full_match();
        self.guesses.push(entry);

        let attempts = self.attempts();
        let new_best = won && self.best.is_none_or(|best| attempts < best);
        if new_best {
            self.best = Some(attempts);
        }

        Ok(GuessOutcome {
            feedback,
            attempts,
            won,
            new_best,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{GenerationJudgment, NumericJudgment};
    use crate::record::{CreatureId, Generation};
    use crate::rng::PcgRng;

    fn record(id: u32, height: f64, weight: f64, types: &[&str], generation: u32) -> CreatureRecord {
        CreatureRecord::new(
            CreatureId(id),
            &format!("mon{id}"),
            height,
            weight,
            types.iter().copied(),
            Generation::from_ordinal(generation),
        )
    }

    fn answer() -> CreatureRecord {
        record(1, 1.0, 10.0, &["grass"], 1)
    }

    fn miss() -> CreatureRecord {
        record(2, 3.0, 10.0, &["grass"], 1)
    }

    fn hit() -> CreatureRecord {
        record(3, 1.1, 10.0, &["grass"], 1)
    }

    #[test]
    fn guess_without_game_is_rejected() {
        let mut session = GameSession::new();
        assert_eq!(session.submit_guess(hit()), Err(SessionError::NoActiveGame));
    }

    #[test]
    fn win_records_best_score() {
        let mut session = GameSession::new();
        session.begin(answer());

        let first = session.submit_guess(miss()).unwrap();
        assert!(!first.won);
        assert_eq!(first.feedback.judgment.height, NumericJudgment::TooHigh);
        assert_eq!(session.best(), None);

        let second = session.submit_guess(hit()).unwrap();
        assert!(second.won);
        assert!(second.new_best);
        assert_eq!(second.attempts, 2);
        assert_eq!(session.best(), Some(2));
        assert!(session.is_won());
    }

    #[test]
    fn guesses_after_a_win_are_rejected() {
        let mut session = GameSession::new();
        session.begin(answer());
        session.submit_guess(hit()).unwrap();

        assert_eq!(session.submit_guess(miss()), Err(SessionError::RoundOver));
        assert_eq!(session.attempts(), 1);
    }

    #[test]
    fn best_only_improves_on_strictly_fewer_attempts() {
        let mut session = GameSession::restore(None, Vec::new(), Some(2));

        session.begin(answer());
        session.submit_guess(miss()).unwrap();
        let tied = session.submit_guess(hit()).unwrap();
        assert!(tied.won && !tied.new_best);
        assert_eq!(session.best(), Some(2));

        session.begin(answer());
        let better = session.submit_guess(hit()).unwrap();
        assert!(better.new_best);
        assert_eq!(session.best(), Some(1));
    }

    #[test]
    fn new_game_clears_guesses_keeps_best_and_changes_answer() {
        let records = vec![answer(), miss(), hit()];
        let mut rng = PcgRng::seeded(3);
        let mut session = GameSession::new();

        let first = session.start_new_game(&records, &mut rng).unwrap().id();
        let guess = session.answer().cloned().unwrap();
        session.submit_guess(guess).unwrap();
        let best = session.best();

        let second = session.start_new_game(&records, &mut rng).unwrap().id();
        assert_ne!(first, second);
        assert_eq!(session.attempts(), 0);
        assert_eq!(session.best(), best);
        assert!(!session.is_won());
    }

    #[test]
    fn new_game_on_empty_dex_fails() {
        let mut rng = PcgRng::seeded(3);
        assert_eq!(
            GameSession::new().start_new_game(&[], &mut rng).err(),
            Some(SessionError::EmptyDex)
        );
    }

    #[test]
    fn restore_replays_identical_feedback() {
        let mut live = GameSession::new();
        live.begin(answer());
        live.submit_guess(miss()).unwrap();
        live.submit_guess(record(4, 0.5, 30.0, &["fire"], 4)).unwrap();

        let restored = GameSession::restore(
            live.answer().cloned(),
            live.guess_records().cloned().collect(),
            live.best(),
        );

        assert_eq!(restored, live);
        assert_eq!(restored.attempts(), 2);
        assert_eq!(
            restored.guesses()[1].feedback.judgment.generation,
            GenerationJudgment::TooLate
        );
    }

    #[test]
    fn restore_drops_guesses_without_answer() {
        let restored = GameSession::restore(None, vec![miss(), hit()], Some(4));
        assert_eq!(restored.attempts(), 0);
        assert_eq!(restored.best(), Some(4));
        assert!(restored.answer().is_none());
    }
}
