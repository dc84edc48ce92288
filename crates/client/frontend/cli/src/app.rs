//! Glue code tying the game service and the terminal UI together.
use anyhow::Result;
use async_trait::async_trait;
use client_frontend_core::{Frontend, FrontendConfig};
use runtime::GameService;

use crate::config::CliConfig;
use crate::presentation::{EventLoop, terminal};
use crate::state::AppState;

/// Terminal frontend.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
    greeting: Option<String>,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
            greeting: None,
        }
    }

    /// First line shown in the message log.
    #[must_use]
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = Some(greeting.into());
        self
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, mut service: GameService) -> Result<()> {
        tracing::info!("CLI client starting...");

        let mut state = AppState::new(&self.frontend_config);
        state.messages.info(
            self.greeting
                .clone()
                .unwrap_or_else(|| "Guess the hidden creature!".to_string()),
        );

        let event_loop = EventLoop::new(state, self.cli_config.ui.clone());

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        event_loop.run(&mut terminal, &mut service).await?;

        terminal::restore()?;
        tracing::info!("CLI client exiting");

        Ok(())
    }
}
