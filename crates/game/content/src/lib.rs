//! Static creature datasets and their loaders.
//!
//! The bundled dataset lives under `data/` as `pokedex.json`: a JSON object
//! mapping each identifier to a raw record. Loaders normalize every entry
//! into a [`game_core::Dex`]; content never appears in session state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ContentFactory, DexLoader, LoadResult};

/// File name of the dataset inside a data directory.
pub const DEX_FILE_NAME: &str = "pokedex.json";

/// Directory holding the dataset shipped with this crate.
pub fn bundled_data_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}
