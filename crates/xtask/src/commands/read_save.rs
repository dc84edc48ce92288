//! Read and inspect the persisted game session
//!
//! Loads the save keys through the same repository the client uses, so the
//! summary shows exactly what a resumed game would see.

use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use client_bootstrap::{RuntimeConfig, builder::save_dir};
use runtime::{FileStore, KeyValueStore, SESSION_KEYS, SavedSession, SessionRepository};

/// Inspect the persisted game session
#[derive(Parser)]
pub struct ReadSave {
    /// Custom save directory (defaults to SAVE_DATA_DIR or the platform location)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Answer, score and the replayed guesses with their feedback
    Summary,
    /// Stored values per key, pretty-printed
    Json,
}

impl ReadSave {
    pub fn execute(self) -> Result<()> {
        let data_dir = self
            .data_dir
            .unwrap_or_else(|| save_dir(&RuntimeConfig::from_env()));

        if !data_dir.exists() {
            anyhow::bail!(
                "Save directory not found: {}\n\nRun the client first to create a session.",
                data_dir.display()
            );
        }

        let store: Arc<dyn KeyValueStore> = Arc::new(
            FileStore::new(&data_dir)
                .with_context(|| format!("Failed to open {}", data_dir.display()))?,
        );

        println!(
            "{} {}",
            style("Save Directory:").bold().cyan(),
            data_dir.display()
        );
        println!(
            "{} {}",
            style("Keys:").bold().cyan(),
            store.keys()?.join(", ")
        );
        println!();

        let output = match self.format {
            OutputFormat::Summary => {
                let saved = SessionRepository::new(store).load()?;
                summary(&saved)
            }
            OutputFormat::Json => raw_values(store.as_ref())?,
        };
        print!("{}", output);

        Ok(())
    }
}

fn summary(saved: &SavedSession) -> String {
    let mut out = String::new();

    match &saved.answer {
        Some(answer) => {
            let _ = writeln!(
                out,
                "Answer:   {} ({}, {})",
                answer.title(),
                answer.id(),
                answer.generation().label()
            );
        }
        None => {
            let _ = writeln!(out, "Answer:   none saved");
        }
    }
    let best = saved
        .best
        .map(|best| best.to_string())
        .unwrap_or_else(|| "-".to_string());
    let _ = writeln!(out, "Best:     {}", best);

    let session = saved.clone().into_session();
    let _ = writeln!(
        out,
        "Guesses:  {}{}",
        session.attempts(),
        if session.is_won() { " (won)" } else { "" }
    );

    for (n, entry) in session.guesses().iter().enumerate() {
        let judgment = &entry.feedback.judgment;
        let _ = writeln!(
            out,
            "  {:>2}. {:<14} height {:<9} weight {:<9} types {:<13} generation {}",
            n + 1,
            entry.record.title(),
            judgment.height,
            judgment.weight,
            judgment.types,
            judgment.generation
        );
    }

    out
}

/// Every session key with its stored value; malformed JSON is shown verbatim.
fn raw_values(store: &dyn KeyValueStore) -> Result<String> {
    let mut out = String::new();
    for key in SESSION_KEYS {
        let _ = writeln!(out, "{}", style(key).bold().yellow());
        match store.get(key)? {
            None => {
                let _ = writeln!(out, "  (absent)");
            }
            Some(raw) => match serde_json::from_str::<serde_json::Value>(&raw) {
                Ok(value) => {
                    let _ = writeln!(out, "{}", serde_json::to_string_pretty(&value)?);
                }
                Err(_) => {
                    let _ = writeln!(out, "  (malformed) {}", raw);
                }
            },
        }
    }
    Ok(out)
}
