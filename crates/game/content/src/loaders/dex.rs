//! Dataset loader.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use game_core::{CreatureId, Dex, RawCreature, normalize};

use crate::loaders::{LoadResult, read_file};

/// Loader for creature datasets in JSON.
///
/// File format: an object keyed by identifier.
///
/// ```json
/// {
///     "1": { "id": 1, "name": "bulbasaur", "height": 0.7, "weight": 6.9,
///            "types": ["grass", "poison"], "generation": 1,
///            "img_url": "https://..." }
/// }
/// ```
///
/// Entries whose key is not a number fall back to their own `id` field; an
/// entry with neither gets id 0.
pub struct DexLoader;

impl DexLoader {
    pub fn load(path: &Path) -> LoadResult<Dex> {
        let content = read_file(path)?;
        let dex = Self::parse(&content)
            .with_context(|| format!("Failed to parse dataset {}", path.display()))?;

        tracing::debug!("Loaded {} creatures from {}", dex.len(), path.display());
        Ok(dex)
    }

    pub fn parse(content: &str) -> LoadResult<Dex> {
        let raw: BTreeMap<String, RawCreature> = serde_json::from_str(content)?;

        let records = raw.iter().map(|(key, creature)| {
            let fallback = key.trim().parse().map(CreatureId).unwrap_or(CreatureId(0));
            normalize(creature, fallback)
        });
        Ok(Dex::new(records))
    }
}
