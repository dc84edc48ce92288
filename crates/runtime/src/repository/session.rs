//! Typed persistence of a [`GameSession`] on top of a [`KeyValueStore`].
//!
//! Three keys are used: the answer, the guess sequence and the best score.
//! Each is written as JSON. Values that fail to parse are logged and treated
//! as absent so a corrupted save never blocks a fresh start. Writes that
//! belong to one mutation are committed together: a failed write puts back
//! the keys already written.

use std::sync::Arc;

use game_core::{CreatureRecord, GameSession};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::repository::{KeyValueStore, RepositoryError, Result};

pub const SAVED_ANSWER_KEY: &str = "saved-answer";
pub const SAVED_GUESSES_KEY: &str = "saved-guess-sequence";
pub const BEST_SCORE_KEY: &str = "best-score";

/// Every key this repository writes.
pub const SESSION_KEYS: [&str; 3] = [SAVED_ANSWER_KEY, SAVED_GUESSES_KEY, BEST_SCORE_KEY];

/// Persisted parts of a session, as read back from the store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SavedSession {
    pub answer: Option<CreatureRecord>,
    pub guesses: Vec<CreatureRecord>,
    pub best: Option<u32>,
}

impl SavedSession {
    /// Rebuild the live session; feedback is recomputed from the records.
    pub fn into_session(self) -> GameSession {
        GameSession::restore(self.answer, self.guesses, self.best)
    }
}

#[derive(Clone)]
pub struct SessionRepository {
    store: Arc<dyn KeyValueStore>,
}

impl SessionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// Read everything that was saved.
    ///
    /// Malformed values come back as absent. A store failure on the answer or
    /// the guesses is an error; one on the best score only loses the best
    /// score, which is logged and left unset.
    pub fn load(&self) -> Result<SavedSession> {
        let best = self.read(BEST_SCORE_KEY).unwrap_or_else(|e| {
            tracing::warn!("Could not read {}, best score unknown: {}", BEST_SCORE_KEY, e);
            None
        });

        Ok(SavedSession {
            answer: self.read(SAVED_ANSWER_KEY)?,
            guesses: self.read(SAVED_GUESSES_KEY)?.unwrap_or_default(),
            best,
        })
    }

    /// Write the answer and the guess sequence as one unit.
    ///
    /// Guesses are written before the answer, so even a failed undo never
    /// pairs saved guesses with an answer they were not judged against.
    pub fn save_game(&self, session: &GameSession) -> Result<()> {
        let answer = session.answer().map(encode).transpose()?;
        self.commit(&[
            (SAVED_GUESSES_KEY, Some(encode_guesses(session)?)),
            (SAVED_ANSWER_KEY, answer),
        ])
    }

    /// Write the guess sequence after a guess, and the best score when the
    /// guess set a new one. The best score goes first.
    pub fn save_progress(&self, session: &GameSession, new_best: Option<u32>) -> Result<()> {
        let guesses = (SAVED_GUESSES_KEY, Some(encode_guesses(session)?));
        match new_best {
            Some(best) => self.commit(&[(BEST_SCORE_KEY, Some(encode(&best)?)), guesses]),
            None => self.commit(&[guesses]),
        }
    }

    pub fn save_best(&self, best: u32) -> Result<()> {
        self.commit(&[(BEST_SCORE_KEY, Some(encode(&best)?))])
    }

    /// Remove every session key, best score included.
    pub fn clear(&self) -> Result<()> {
        for key in SESSION_KEYS {
            self.store.remove(key)?;
        }
        Ok(())
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!("Ignoring malformed {} value: {}", key, e);
                Ok(None)
            }
        }
    }

    /// Apply `values` in order; `None` removes the key.
    ///
    /// The previous values are read up front. When a write fails, the keys
    /// already written are put back and the write error is returned.
    fn commit(&self, values: &[(&str, Option<String>)]) -> Result<()> {
        let previous = values
            .iter()
            .map(|(key, _)| self.store.get(key))
            .collect::<Result<Vec<_>>>()?;

        for (done, (key, value)) in values.iter().enumerate() {
            if let Err(e) = self.put(key, value.as_deref()) {
                for ((key, _), old) in values[..done].iter().zip(&previous[..done]).rev() {
                    if let Err(undo) = self.put(key, old.as_deref()) {
                        tracing::warn!("Could not restore {} after a failed write: {}", key, undo);
                    }
                }
                return Err(e);
            }
        }
        Ok(())
    }

    fn put(&self, key: &str, value: Option<&str>) -> Result<()> {
        match value {
            Some(value) => self.store.set(key, value),
            None => self.store.remove(key),
        }
    }
}

fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| RepositoryError::Json(e.to_string()))
}

fn encode_guesses(session: &GameSession) -> Result<String> {
    let guesses: Vec<&CreatureRecord> = session.guess_records().collect();
    encode(&guesses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryStore;
    use game_core::{CreatureId, Generation};

    fn record(id: u32, name: &str) -> CreatureRecord {
        CreatureRecord::new(
            CreatureId(id),
            name,
            1.0,
            10.0,
            ["grass"],
            Generation::from_ordinal(1),
        )
    }

    fn repository(entries: &[(&str, &str)]) -> SessionRepository {
        SessionRepository::new(Arc::new(InMemoryStore::with_entries(
            entries.iter().copied(),
        )))
    }

    #[test]
    fn empty_store_loads_nothing() {
        assert_eq!(repository(&[]).load().unwrap(), SavedSession::default());
    }

    #[test]
    fn round_trips_a_session() {
        let repo = repository(&[]);
        let mut session = GameSession::new();
        session.begin(record(1, "bulbasaur"));
        session.submit_guess(record(4, "charmander")).unwrap();

        repo.save_game(&session).unwrap();
        repo.save_best(3).unwrap();

        let saved = repo.load().unwrap();
        assert_eq!(saved.best, Some(3));
        assert_eq!(saved.guesses.len(), 1);

        let restored = saved.into_session();
        assert_eq!(restored.answer(), session.answer());
        assert_eq!(restored.guesses(), session.guesses());
    }

    #[test]
    fn malformed_values_are_absent() {
        let repo = repository(&[
            (SAVED_ANSWER_KEY, "{not json"),
            (SAVED_GUESSES_KEY, "42"),
            (BEST_SCORE_KEY, "\"three\""),
        ]);

        assert_eq!(repo.load().unwrap(), SavedSession::default());
    }

    #[test]
    fn clear_removes_every_key() {
        let repo = repository(&[(BEST_SCORE_KEY, "2"), ("other", "kept")]);
        repo.clear().unwrap();
        assert_eq!(repo.store().keys().unwrap(), ["other"]);
    }
}
