/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Maximum number of name suggestions offered for a partial guess.
    pub suggestion_limit: usize,
}

impl GameConfig {
    // ===== numeric tolerance band (fractions of the answer value) =====
    /// Lower edge of the match band: a guess at or above `0.8 × answer`.
    pub const BAND_LOWER: f64 = 0.8;
    /// Upper edge of the match band: a guess at or below `1.2 × answer`.
    pub const BAND_UPPER: f64 = 1.2;

    // ===== severity thresholds on relative deviation |guess - answer| / answer =====
    // Deviation up to 0.20 is the match band itself and grades Exact.
    pub const CLOSE_DEVIATION: f64 = 0.35;
    pub const MID_DEVIATION: f64 = 0.50;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

    pub fn new() -> Self {
        Self {
            suggestion_limit: Self::DEFAULT_SUGGESTION_LIMIT,
        }
    }

    pub fn with_suggestion_limit(suggestion_limit: usize) -> Self {
        Self {
            suggestion_limit: suggestion_limit.max(1),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
