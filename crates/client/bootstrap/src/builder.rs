//! Builds the data source, store and game service used by front-ends.
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use game_core::GameConfig;
use game_content::{ContentFactory, DEX_FILE_NAME};
use runtime::{
    CreatureSource, DexSource, FileStore, GameService, KeyValueStore, Rehydrated, RemoteSource,
};

use crate::config::{RuntimeConfig, SourceKind};

/// Builder that assembles a rehydrated game service for clients.
pub struct ServiceBuilder {
    config: RuntimeConfig,
    store: Option<Arc<dyn KeyValueStore>>,
    seed: Option<u64>,
    game_config: GameConfig,
}

impl ServiceBuilder {
    pub fn new(config: RuntimeConfig) -> Self {
        Self {
            config,
            store: None,
            seed: None,
            game_config: GameConfig::default(),
        }
    }

    /// Provide a custom store instead of the file store (e.g., in-memory).
    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Fix the answer sequence, for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Rules configuration (suggestion limit) for the service.
    pub fn game_config(mut self, game_config: GameConfig) -> Self {
        self.game_config = game_config;
        self
    }

    pub async fn build(self) -> Result<ServiceSetup> {
        let source = build_source(&self.config)?;

        let store: Arc<dyn KeyValueStore> = match self.store {
            Some(store) => store,
            None => {
                let dir = save_dir(&self.config);
                let store = FileStore::new(&dir)
                    .with_context(|| format!("Failed to open save data at {}", dir.display()))?;
                tracing::info!("Saving sessions to {}", dir.display());
                Arc::new(store)
            }
        };

        let mut builder = GameService::builder()
            .source(source)
            .store(store)
            .retry(self.config.retry)
            .config(self.game_config);
        if let Some(seed) = self.seed {
            builder = builder.seed(seed);
        }

        let mut service = builder.build()?;
        let rehydrated = service
            .rehydrate()
            .await
            .context("Failed to start a game")?;

        Ok(ServiceSetup {
            config: self.config,
            service,
            rehydrated,
        })
    }
}

pub struct ServiceSetup {
    pub config: RuntimeConfig,
    pub service: GameService,
    pub rehydrated: Rehydrated,
}

/// Directory of the persistent store for `config`.
pub fn save_dir(config: &RuntimeConfig) -> PathBuf {
    config
        .save_data_dir
        .clone()
        .unwrap_or_else(crate::dirs::data_dir)
}

fn build_source(config: &RuntimeConfig) -> Result<Arc<dyn CreatureSource>> {
    match config.source {
        SourceKind::Local => {
            let data_dir = resolve_data_dir(config.data_dir.as_deref())?;
            let dex = ContentFactory::new(&data_dir).load_dex()?;
            anyhow::ensure!(
                !dex.is_empty(),
                "Dataset at {} has no creatures",
                data_dir.display()
            );
            tracing::info!("Loaded {} creatures from {}", dex.len(), data_dir.display());
            Ok(Arc::new(DexSource::new(dex)))
        }
        SourceKind::Remote => {
            tracing::info!("Using remote creature data at {}", config.api_url);
            Ok(Arc::new(
                RemoteSource::new(&config.api_url).with_max_id(config.max_id),
            ))
        }
    }
}

/// Find the dataset directory.
///
/// An explicit directory is used as given. Otherwise the first of these
/// holding a dataset wins: the bundled data directory, `data/` next to the
/// executable, `data/` in the working directory.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }

    let mut candidates = vec![game_content::bundled_data_dir()];
    if let Ok(exe) = std::env::current_exe()
        && let Some(parent) = exe.parent()
    {
        candidates.push(parent.join("data"));
    }
    candidates.push(PathBuf::from("data"));

    candidates
        .into_iter()
        .find(|dir| dir.join(DEX_FILE_NAME).is_file())
        .context("No dataset found; set DEX_DATA_DIR to a directory containing pokedex.json")
}
