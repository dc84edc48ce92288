//! Runtime configuration structures and loaders.
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use runtime::RetryPolicy;
use runtime::source::remote::{DEFAULT_API_URL, DEFAULT_MAX_ID};

/// Where creature data comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SourceKind {
    /// The JSON dataset on disk.
    #[default]
    Local,
    /// A PokeAPI-compatible HTTP service.
    Remote,
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "remote" => Ok(Self::Remote),
            other => Err(format!("unknown data source {other:?}")),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SourceKind::Local => "local",
            SourceKind::Remote => "remote",
        };
        write!(f, "{}", label)
    }
}

/// Configuration required to assemble a game service.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub source: SourceKind,
    /// Directory holding `pokedex.json`; searched for when unset.
    pub data_dir: Option<PathBuf>,
    pub api_url: String,
    /// Highest identifier drawn from the remote source.
    pub max_id: u32,
    pub retry: RetryPolicy,
    /// Directory of the persistent store; platform data dir when unset.
    pub save_data_dir: Option<PathBuf>,
    /// Log session name; timestamp based when unset.
    pub session_id: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            data_dir: None,
            api_url: DEFAULT_API_URL.to_string(),
            max_id: DEFAULT_MAX_ID,
            retry: RetryPolicy::default(),
            save_data_dir: None,
            session_id: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DEX_SOURCE` - `local` or `remote` (default: local)
    /// - `DEX_DATA_DIR` - Directory containing `pokedex.json`
    /// - `DEX_API_URL` - Remote API base URL (default: PokeAPI v2)
    /// - `DEX_MAX_ID` - Highest identifier drawn remotely (default: 1025)
    /// - `DEX_RETRY_ATTEMPTS` - Attempts per remote answer draw (default: 3)
    /// - `DEX_RETRY_DELAY_MS` - Pause between attempts (default: 200)
    /// - `SAVE_DATA_DIR` - Directory for save data (default: platform-specific)
    /// - `GAME_SESSION_ID` - Log session identifier (default: auto-generated)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut config = Self::default();

        if let Some(value) = read("DEX_SOURCE") {
            match value.parse() {
                Ok(kind) => config.source = kind,
                Err(e) => tracing::warn!("Ignoring DEX_SOURCE: {}", e),
            }
        }

        config.data_dir = read("DEX_DATA_DIR").map(PathBuf::from);

        if let Some(url) = read("DEX_API_URL") {
            config.api_url = url;
        }

        if let Some(max_id) = read_parsed::<u32>(&read, "DEX_MAX_ID") {
            config.max_id = max_id.max(1);
        }

        let attempts =
            read_parsed(&read, "DEX_RETRY_ATTEMPTS").unwrap_or(RetryPolicy::DEFAULT_MAX_ATTEMPTS);
        let delay = read_parsed(&read, "DEX_RETRY_DELAY_MS")
            .map(Duration::from_millis)
            .unwrap_or(RetryPolicy::DEFAULT_DELAY);
        config.retry = RetryPolicy::new(attempts, delay);

        config.save_data_dir = read("SAVE_DATA_DIR").map(PathBuf::from);
        config.session_id = read("GAME_SESSION_ID");

        config
    }
}

fn read_parsed<T>(read: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
{
    read(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> RuntimeConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RuntimeConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let config = config(&[]);
        assert_eq!(config.source, SourceKind::Local);
        assert_eq!(config.api_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.max_id, 1025);
        assert_eq!(config.retry, RetryPolicy::new(3, Duration::from_millis(200)));
        assert!(config.save_data_dir.is_none());
    }

    #[test]
    fn reads_every_variable() {
        let config = config(&[
            ("DEX_SOURCE", "Remote"),
            ("DEX_DATA_DIR", "/srv/dex"),
            ("DEX_API_URL", "http://localhost:8080"),
            ("DEX_MAX_ID", "151"),
            ("DEX_RETRY_ATTEMPTS", "5"),
            ("DEX_RETRY_DELAY_MS", "10"),
            ("SAVE_DATA_DIR", "/tmp/saves"),
            ("GAME_SESSION_ID", "run-1"),
        ]);

        assert_eq!(config.source, SourceKind::Remote);
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/dex")));
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.max_id, 151);
        assert_eq!(config.retry, RetryPolicy::new(5, Duration::from_millis(10)));
        assert_eq!(config.save_data_dir, Some(PathBuf::from("/tmp/saves")));
        assert_eq!(config.session_id.as_deref(), Some("run-1"));
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let config = config(&[
            ("DEX_SOURCE", "carrier-pigeon"),
            ("DEX_MAX_ID", "lots"),
            ("DEX_RETRY_ATTEMPTS", "0"),
            ("SAVE_DATA_DIR", "  "),
        ]);

        assert_eq!(config.source, SourceKind::Local);
        assert_eq!(config.max_id, 1025);
        assert_eq!(config.retry.max_attempts, 1);
        assert!(config.save_data_dir.is_none());
    }
}
