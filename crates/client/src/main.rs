//! dexdle client binary.
//!
//! Composition root: loads configuration, starts file logging, assembles a
//! rehydrated game service and hands it to the selected frontend.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Examples
//!
//! ```bash
//! # Play from the bundled dataset
//! cargo run -p dexdle-client
//!
//! # Play against the remote API
//! DEX_SOURCE=remote cargo run -p dexdle-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, ...)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_bootstrap::{RuntimeConfig, ServiceBuilder};
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use dexdle_client::Client;
    use game_core::GameConfig;
    use runtime::Rehydrated;

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging; the guard flushes the file writer on exit
    let log_session = logging::init(runtime_config.session_id.as_deref())?;

    tracing::info!("Starting dexdle client");
    tracing::info!("Creature source: {}", runtime_config.source);

    // 3. Build and rehydrate the game service
    let setup = ServiceBuilder::new(runtime_config)
        .game_config(GameConfig::with_suggestion_limit(
            frontend_config.suggestions.limit,
        ))
        .build()
        .await?;

    let greeting = match setup.rehydrated {
        Rehydrated::Resumed { attempts } => {
            format!("Welcome back! Your game resumes after {attempts} guesses.")
        }
        Rehydrated::Fresh => "A creature has been chosen. Start guessing!".to_string(),
    };

    // 4. Build Frontend and Client
    let frontend = CliFrontend::new(frontend_config, cli_config).with_greeting(greeting);
    let client = Client::builder()
        .service(setup.service)
        .frontend(frontend)
        .build()?;

    client.run().await?;

    tracing::info!("Client shutdown complete: session={}", log_session.session_id);
    Ok(())
}

