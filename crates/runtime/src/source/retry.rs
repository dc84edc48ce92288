//! Bounded retry for answer draws.

use std::time::Duration;

use game_core::{CreatureId, CreatureRecord, RandomSource};

use crate::source::{CreatureSource, SourceError, SourceResult};

/// How many times to try drawing an answer and how long to pause between
/// attempts.
///
/// Only transient failures (see [`SourceError::is_transient`]) are retried;
/// anything else aborts at once. Each attempt draws afresh, so a missing
/// identifier is not asked for twice in a row by chance alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(200);

    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// Single attempt, no pause.
    pub fn none() -> Self {
        Self::new(1, Duration::ZERO)
    }

    pub async fn draw_answer(
        &self,
        source: &dyn CreatureSource,
        exclude: Option<CreatureId>,
        rng: &mut (dyn RandomSource + Send),
    ) -> SourceResult<CreatureRecord> {
        let mut attempt = 1;
        loop {
            match source.draw_answer(exclude, rng).await {
                Ok(record) => return Ok(record),
                Err(e) if !e.is_transient() => return Err(e),
                Err(e) if attempt >= self.max_attempts => {
                    return Err(SourceError::Exhausted {
                        attempts: attempt,
                        last: Box::new(e),
                    });
                }
                Err(e) => {
                    tracing::warn!(
                        "Answer draw from {} failed (attempt {}/{}): {}",
                        source.name(),
                        attempt,
                        self.max_attempts,
                        e
                    );
                    if !self.delay.is_zero() {
                        tokio::time::sleep(self.delay).await;
                    }
                    attempt += 1;
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS, Self::DEFAULT_DELAY)
    }
}
