//! Development tasks for dexdle
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Clean, FetchDex, ReadSave};

/// Development tasks for dexdle
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for dexdle", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Build the creature dataset from the remote API
    FetchDex(FetchDex),

    /// Inspect the persisted game session
    ReadSave(ReadSave),

    /// Clean save data and logs
    Clean(Clean),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (for SAVE_DATA_DIR and other env vars)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.command {
        Command::FetchDex(cmd) => cmd.execute().await,
        Command::ReadSave(cmd) => cmd.execute(),
        Command::Clean(cmd) => cmd.execute(),
    }
}
