//! Creature data sources.
//!
//! The game rules only see [`CreatureRecord`]s. Where they come from is
//! behind [`CreatureSource`]: the bundled dataset ([`DexSource`]) or a remote
//! HTTP API ([`RemoteSource`]). Both hand raw data to
//! [`game_core::normalize`] so records look the same whichever source is used.

pub mod error;
pub mod local;
pub mod remote;
pub mod retry;

pub use error::SourceError;
pub use local::DexSource;
pub use remote::RemoteSource;
pub use retry::RetryPolicy;

use async_trait::async_trait;
use game_core::{CreatureId, CreatureRecord, RandomSource};

pub type SourceResult<T> = std::result::Result<T, SourceError>;

/// Capability shared by every creature data source.
#[async_trait]
pub trait CreatureSource: Send + Sync {
    /// Short label for logs and the status line.
    fn name(&self) -> &'static str;

    async fn fetch_by_id(&self, id: CreatureId) -> SourceResult<CreatureRecord>;

    /// Look up a creature by name in any casing or spacing.
    async fn fetch_by_name(&self, name: &str) -> SourceResult<CreatureRecord>;

    async fn list_all(&self) -> SourceResult<Vec<CreatureRecord>>;

    /// Draw a random answer, avoiding `exclude` when another choice exists.
    ///
    /// The default lists every record and draws among them.
    async fn draw_answer(
        &self,
        exclude: Option<CreatureId>,
        rng: &mut (dyn RandomSource + Send),
    ) -> SourceResult<CreatureRecord> {
        let records = self.list_all().await?;
        game_core::draw_answer(&records, exclude, rng)
            .cloned()
            .ok_or(SourceError::Empty)
    }

    /// Names offered while the player types. Sources without a local index
    /// offer none.
    fn suggest(&self, _query: &str, _limit: usize) -> Vec<CreatureRecord> {
        Vec::new()
    }
}
