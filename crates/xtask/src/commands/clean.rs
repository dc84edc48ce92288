//! Clean save data and logs command
//!
//! Removes dexdle's persistent data:
//! - Logs (cache directory)
//! - Save data (SAVE_DATA_DIR or the platform data directory)
//!
//! Always prompts for confirmation before deletion unless `--yes` is given.

use anyhow::{Context, Result};
use clap::Parser;
use client_bootstrap::{RuntimeConfig, builder::save_dir, dirs};
use console::style;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Clean save data and logs
#[derive(Parser, Debug)]
pub struct Clean {
    /// Clean only logs (cache directory)
    #[arg(long)]
    pub logs: bool,

    /// Clean only save data (data directory)
    #[arg(long)]
    pub data: bool,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Specific log session to clean (only works with --logs)
    #[arg(long)]
    pub session: Option<String>,
}

impl Clean {
    pub fn execute(self) -> Result<()> {
        let targets = self.targets(&dirs::log_dir(), &save_dir(&RuntimeConfig::from_env()))?;

        if targets.is_empty() {
            println!(
                "{}",
                style("Nothing to clean - directories don't exist yet").dim()
            );
            return Ok(());
        }

        println!("{}", style("Clean dexdle data").yellow().bold());
        println!();
        println!("The following will be deleted:");
        for (label, path) in &targets {
            println!("  {} {}", style("→").cyan(), style(label).bold());
            println!("    {}", style(path.display()).dim());
        }
        println!();

        if !self.yes && !confirm()? {
            println!("{}", style("Cancelled").dim());
            return Ok(());
        }

        for (label, path) in targets {
            print!("Deleting {}... ", label);
            io::stdout().flush()?;

            std::fs::remove_dir_all(&path)
                .with_context(|| format!("Failed to delete: {}", path.display()))?;

            println!("{}", style("✓").green());
        }

        println!();
        println!("{}", style("✓ Cleanup complete!").green().bold());

        Ok(())
    }

    /// Existing directories selected by the flags; no flag means both.
    fn targets(&self, log_dir: &Path, data_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
        if self.session.is_some() && !self.logs {
            anyhow::bail!("--session can only be used with --logs");
        }

        let clean_logs = self.logs || !self.data;
        let clean_data = self.data || !self.logs;
        let mut targets = Vec::new();

        if clean_logs {
            if let Some(ref session_id) = self.session {
                let session_dir = log_dir.join(session_id);
                if !session_dir.exists() {
                    anyhow::bail!("Session not found: {}", session_id);
                }
                targets.push((format!("Session logs ({})", session_id), session_dir));
            } else if log_dir.exists() {
                targets.push(("All logs".to_string(), log_dir.to_path_buf()));
            }
        }

        if clean_data && data_dir.exists() {
            targets.push(("Save data".to_string(), data_dir.to_path_buf()));
        }

        Ok(targets)
    }
}

/// Prompt user for confirmation
fn confirm() -> Result<bool> {
    print!("{} ", style("Proceed? [y/N]").yellow().bold());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes")
}
