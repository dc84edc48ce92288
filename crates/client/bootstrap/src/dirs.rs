//! Platform-specific directories.

use std::path::PathBuf;

const APP_NAME: &str = "dexdle";

/// Where saved sessions live.
///
/// - macOS: `~/Library/Application Support/dexdle`
/// - Linux: `~/.local/share/dexdle` (or `$XDG_DATA_HOME/dexdle`)
/// - Windows: `%APPDATA%\dexdle`
/// - Fallback: `./save_data`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

/// Root of per-session log directories.
///
/// - macOS: `~/Library/Caches/dexdle/logs`
/// - Linux: `~/.cache/dexdle/logs` (or `$XDG_CACHE_HOME/dexdle/logs`)
/// - Windows: `%LOCALAPPDATA%\dexdle\logs`
/// - Fallback: `/tmp/dexdle/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join(APP_NAME))
        .join("logs")
}
