//! Source backed by an in-memory dataset.

use std::sync::Arc;

use async_trait::async_trait;
use game_core::{CreatureId, CreatureRecord, Dex, RandomSource};

use crate::source::{CreatureSource, SourceError, SourceResult};

#[derive(Clone)]
pub struct DexSource {
    dex: Arc<Dex>,
}

impl DexSource {
    pub fn new(dex: impl Into<Arc<Dex>>) -> Self {
        Self { dex: dex.into() }
    }

    pub fn dex(&self) -> &Dex {
        &self.dex
    }
}

#[async_trait]
impl CreatureSource for DexSource {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn fetch_by_id(&self, id: CreatureId) -> SourceResult<CreatureRecord> {
        self.dex
            .get(id)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(id.0.to_string()))
    }

    async fn fetch_by_name(&self, name: &str) -> SourceResult<CreatureRecord> {
        self.dex
            .find_by_name(name)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(name.trim().to_string()))
    }

    async fn list_all(&self) -> SourceResult<Vec<CreatureRecord>> {
        Ok(self.dex.records().to_vec())
    }

    async fn draw_answer(
        &self,
        exclude: Option<CreatureId>,
        rng: &mut (dyn RandomSource + Send),
    ) -> SourceResult<CreatureRecord> {
        game_core::draw_answer(self.dex.records(), exclude, rng)
            .cloned()
            .ok_or(SourceError::Empty)
    }

    fn suggest(&self, query: &str, limit: usize) -> Vec<CreatureRecord> {
        self.dex.suggest(query, limit).into_iter().cloned().collect()
    }
}
