//! Source backed by a PokeAPI-compatible HTTP service.
//!
//! Two requests per creature: `GET {base}/pokemon/{id|name}` for the body
//! and types, then the species document it links to for the generation.
//! Heights and weights arrive in tenths (decimeters, hectograms) and are
//! converted to meters and kilograms here, rounded to one decimal.

use async_trait::async_trait;
use game_core::{
    CreatureId, CreatureRecord, Generation, RandomSource, RawCreature, RawValue, canonical_name,
    draw_id, normalize,
};
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::source::{CreatureSource, SourceError, SourceResult};

pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

/// Highest identifier drawn when the upstream count is unknown.
pub const DEFAULT_MAX_ID: u32 = 1025;

#[derive(Deserialize)]
struct PokemonDoc {
    id: u32,
    name: String,
    height: f64,
    weight: f64,
    types: Vec<TypeSlot>,
    species: NamedRef,
    #[serde(default)]
    sprites: Sprites,
}

#[derive(Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    kind: NamedRef,
}

#[derive(Deserialize)]
struct NamedRef {
    name: String,
    url: String,
}

#[derive(Default, Deserialize)]
struct Sprites {
    front_default: Option<String>,
}

#[derive(Deserialize)]
struct SpeciesDoc {
    generation: NamedRef,
}

#[derive(Deserialize)]
struct SpeciesCount {
    count: u32,
}

#[derive(Clone, Debug)]
pub struct RemoteSource {
    client: reqwest::Client,
    base_url: String,
    max_id: u32,
}

impl RemoteSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_id: DEFAULT_MAX_ID,
        }
    }

    /// Sets the highest identifier drawn as an answer (builder pattern).
    #[must_use]
    pub fn with_max_id(mut self, max_id: u32) -> Self {
        self.max_id = max_id.max(1);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn max_id(&self) -> u32 {
        self.max_id
    }

    /// Fetch one creature in raw form, units already converted.
    ///
    /// `key` is an identifier or a canonical name.
    pub async fn fetch_raw(&self, key: &str) -> SourceResult<RawCreature> {
        let pokemon: PokemonDoc = self
            .get_json(&format!("{}/pokemon/{}", self.base_url, key), key)
            .await?;
        let species: SpeciesDoc = self.get_json(&pokemon.species.url, key).await?;

        let generation = generation_of(&species.generation);
        Ok(RawCreature {
            id: pokemon.id.into(),
            name: pokemon.name.into(),
            height: tenths_to_unit(pokemon.height).into(),
            weight: tenths_to_unit(pokemon.weight).into(),
            types: pokemon
                .types
                .into_iter()
                .map(|slot| slot.kind.name)
                .collect::<Vec<_>>()
                .into(),
            generation: match generation.ordinal() {
                Some(ordinal) => u32::from(ordinal).into(),
                None => species.generation.name.into(),
            },
            img_url: pokemon
                .sprites
                .front_default
                .map(RawValue::from)
                .unwrap_or_default(),
        })
    }

    /// Number of species the service knows about.
    pub async fn species_count(&self) -> SourceResult<u32> {
        let url = format!("{}/pokemon-species?limit=0", self.base_url);
        let body: SpeciesCount = self.get_json(&url, "pokemon-species").await?;
        Ok(body.count)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, key: &str) -> SourceResult<T> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(key.to_string()));
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(SourceError::RateLimited);
        }
        if status.is_server_error() {
            return Err(SourceError::Server(status.as_u16()));
        }
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| SourceError::Malformed(e.to_string()))
    }
}

/// Decimeters to meters, hectograms to kilograms, to one decimal.
fn tenths_to_unit(value: f64) -> f64 {
    value.round() / 10.0
}

/// Generation from its resource name (`generation-iv`), falling back to the
/// trailing number of its URL (`.../generation/4/`).
fn generation_of(reference: &NamedRef) -> Generation {
    let from_name = Generation::parse_label(&reference.name);
    if from_name.is_known() {
        return from_name;
    }
    reference
        .url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|tail| tail.parse().ok())
        .map(Generation::from_ordinal)
        .unwrap_or(Generation::UNKNOWN)
}

#[async_trait]
impl CreatureSource for RemoteSource {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn fetch_by_id(&self, id: CreatureId) -> SourceResult<CreatureRecord> {
        let raw = self.fetch_raw(&id.0.to_string()).await?;
        Ok(normalize(&raw, id))
    }

    async fn fetch_by_name(&self, name: &str) -> SourceResult<CreatureRecord> {
        let key = canonical_name(name);
        if key.is_empty() {
            return Err(SourceError::NotFound(String::new()));
        }
        let raw = self.fetch_raw(&key).await?;
        Ok(normalize(&raw, CreatureId(0)))
    }

    async fn list_all(&self) -> SourceResult<Vec<CreatureRecord>> {
        Err(SourceError::Unsupported("listing every creature"))
    }

    async fn draw_answer(
        &self,
        exclude: Option<CreatureId>,
        rng: &mut (dyn RandomSource + Send),
    ) -> SourceResult<CreatureRecord> {
        let id = draw_id(self.max_id, exclude, rng).ok_or(SourceError::Empty)?;
        tracing::debug!("Drawing answer {} from {}", id, self.base_url);
        self.fetch_by_id(id).await
    }
}
