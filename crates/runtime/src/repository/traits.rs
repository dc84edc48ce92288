//! Store contract for persisted session values.

use crate::repository::Result;

/// String-keyed store of string values.
///
/// Keys are short identifiers (`[a-z0-9_-]+`); values are JSON documents,
/// but the store itself never looks inside them.
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, `None` when nothing was stored.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// All keys currently stored, sorted.
    fn keys(&self) -> Result<Vec<String>>;
}

/// Rejects keys that could escape a store directory or collide on disk.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(crate::repository::RepositoryError::InvalidKey(key.to_string()))
    }
}
