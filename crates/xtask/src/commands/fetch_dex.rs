//! Build the creature dataset from the remote API
//!
//! Fetches every identifier in `FROM..=MAX`, converts units at the source
//! boundary and writes `{ "<id>": record }` JSON that the local source loads.

use std::collections::BTreeMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use game_content::{DEX_FILE_NAME, bundled_data_dir};
use game_core::RawCreature;
use runtime::source::remote::{DEFAULT_API_URL, DEFAULT_MAX_ID};
use runtime::{RemoteSource, SourceResult};

/// Progress line every this many identifiers.
const PROGRESS_EVERY: u32 = 50;

/// Build the creature dataset from the remote API
#[derive(Parser, Debug)]
pub struct FetchDex {
    /// Output file (defaults to the bundled dataset)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Remote API base URL
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// First identifier to fetch
    #[arg(long, default_value_t = 1)]
    from: u32,

    /// Highest identifier to fetch (defaults to the API's species count)
    #[arg(long)]
    max: Option<u32>,

    /// Attempts per identifier
    #[arg(long, default_value_t = 3)]
    attempts: u32,

    /// Pause between attempts in milliseconds
    #[arg(long, default_value_t = 200)]
    pause_ms: u64,
}

impl FetchDex {
    pub async fn execute(self) -> Result<()> {
        let source = RemoteSource::new(&self.api_url);

        let max = match self.max {
            Some(max) => max,
            None => match source.species_count().await {
                Ok(count) if count > 0 => count,
                Ok(_) | Err(_) => {
                    eprintln!(
                        "{} Species count unavailable, using {}",
                        style("!").yellow().bold(),
                        DEFAULT_MAX_ID
                    );
                    DEFAULT_MAX_ID
                }
            },
        };
        anyhow::ensure!(
            self.from >= 1 && self.from <= max,
            "Nothing to fetch: --from {} is outside 1..={}",
            self.from,
            max
        );

        let output = self
            .output
            .unwrap_or_else(|| bundled_data_dir().join(DEX_FILE_NAME));

        println!("{}", style("Fetching creature dataset").green().bold());
        println!("  API:    {}", style(&self.api_url).cyan());
        println!("  Range:  {}..={}", self.from, max);
        println!("  Output: {}", style(output.display()).dim());
        println!();

        let pause = Duration::from_millis(self.pause_ms);
        let source = &source;
        let mut dataset = BTreeMap::new();
        let mut failed = Vec::new();

        for id in self.from..=max {
            let key = id.to_string();
            let key = key.as_str();
            match fetch_with_retry(self.attempts, pause, move || source.fetch_raw(key)).await {
                Ok(raw) => {
                    dataset.insert(id, raw);
                }
                Err(err) => {
                    eprintln!("{} #{}: {}", style("✗").red().bold(), id, err);
                    failed.push(id);
                }
            }

            if id % PROGRESS_EVERY == 0 {
                println!("  {} {}/{}", style("→").cyan(), id, max);
            }
        }

        write_dataset(&output, &dataset)?;

        println!();
        println!(
            "{} Wrote {} creatures to {}",
            style("✓").green().bold(),
            dataset.len(),
            output.display()
        );
        if !failed.is_empty() {
            println!(
                "{} {} identifiers failed: {:?}",
                style("!").yellow().bold(),
                failed.len(),
                failed
            );
        }

        Ok(())
    }
}

/// Runs `fetch` up to `attempts` times, pausing between failures.
///
/// Every error is retried, network and malformed responses included, so
/// this does not reuse `RetryPolicy`, which only retries transient draw
/// failures.
pub(crate) async fn fetch_with_retry<T, F, Fut>(
    attempts: u32,
    pause: Duration,
    mut fetch: F,
) -> SourceResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = SourceResult<T>>,
{
    let attempts = attempts.max(1);
    let mut attempt = 1;
    loop {
        match fetch().await {
            Ok(value) => return Ok(value),
            Err(_) if attempt < attempts => {
                attempt += 1;
                tokio::time::sleep(pause).await;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Integer keys serialize as JSON strings, in numeric order.
pub(crate) fn write_dataset(path: &Path, dataset: &BTreeMap<u32, RawCreature>) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(dataset).context("Failed to serialize dataset")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}
