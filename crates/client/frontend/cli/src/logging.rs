//! File logging for the terminal client.
//!
//! The TUI owns stdout/stderr, so every event goes to
//! `<log_dir>/<session>/client.log` through a non-blocking appender.
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE_NAME: &str = "client.log";

/// Active logging session. Dropping it flushes and stops the file writer.
pub struct LogSession {
    pub session_id: String,
    pub log_file: PathBuf,
    _guard: WorkerGuard,
}

/// Installs the global subscriber writing to a per-session log file.
///
/// `RUST_LOG` refines the filter; the default level is `info`.
pub fn init(session_id: Option<&str>) -> Result<LogSession> {
    let session_id = session_id
        .map(str::to_string)
        .unwrap_or_else(default_session_id);

    let session_log_dir = client_bootstrap::dirs::log_dir().join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(true); // colorized `tail -f`

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    let log_file = session_log_dir.join(LOG_FILE_NAME);
    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}", log_file.display());

    Ok(LogSession {
        session_id,
        log_file,
        _guard: guard,
    })
}

fn default_session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{}", timestamp)
}
