//! Content factory for loading datasets from a data directory.

use std::path::{Path, PathBuf};

use game_core::Dex;

use crate::DEX_FILE_NAME;
use crate::loaders::{DexLoader, LoadResult};

/// Content factory that loads game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// └── pokedex.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the dataset bundled with this crate.
    pub fn bundled() -> Self {
        Self::new(crate::bundled_data_dir())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn dex_path(&self) -> PathBuf {
        self.data_dir.join(DEX_FILE_NAME)
    }

    /// Load the dataset from `pokedex.json`.
    pub fn load_dex(&self) -> LoadResult<Dex> {
        DexLoader::load(&self.dex_path())
    }
}
