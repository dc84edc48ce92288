//! Frontend configuration structures and loaders.
//!
//! UI-specific settings shared across frontend implementations.

use std::env;

#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub suggestions: SuggestionConfig,
    pub messages: MessageConfig,
}

impl FrontendConfig {
    pub const fn new(suggestions: SuggestionConfig, messages: MessageConfig) -> Self {
        Self {
            suggestions,
            messages,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DEX_SUGGESTION_LIMIT` - Names offered while typing (default: 10)
    /// - `CLI_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(limit) = read_env::<usize>("DEX_SUGGESTION_LIMIT") {
            config.suggestions.limit = limit.max(1);
        }

        if let Some(capacity) = read_env::<usize>("CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct SuggestionConfig {
    pub limit: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            limit: game_core::GameConfig::DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
