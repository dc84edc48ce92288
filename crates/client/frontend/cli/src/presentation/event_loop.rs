//! Pumps user input and rendering for the CLI client.
use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use runtime::GameService;
use tokio::time::{self, Duration};

use crate::config::UiConfig;
use crate::input::{InputHandler, KeyAction};
use crate::presentation::{terminal::Tui, ui};
use crate::state::AppState;

const FRAME_INTERVAL_MS: u64 = 16;

pub struct EventLoop {
    input: InputHandler,
    state: AppState,
    ui: UiConfig,
}

impl EventLoop {
    pub(crate) fn new(state: AppState, ui: UiConfig) -> Self {
        Self {
            input: InputHandler::new(),
            state,
            ui,
        }
    }

    /// Runs until the player quits.
    ///
    /// Each key is applied to completion (including any awaited lookup)
    /// before the next one is read, so no two session mutations overlap.
    pub async fn run(mut self, terminal: &mut Tui, service: &mut GameService) -> Result<()> {
        self.render(terminal, service)?;

        loop {
            time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)).await;
            if !event::poll(Duration::from_millis(0))? {
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key_press(key, service).await {
                        break;
                    }
                    self.render(terminal, service)?;
                }
                Event::Resize(_, _) => self.render(terminal, service)?,
                _ => {}
            }
        }

        Ok(())
    }

    async fn handle_key_press(&mut self, key: KeyEvent, service: &mut GameService) -> bool {
        let status = self.state.status(service);
        let action = self
            .input
            .handle_key(key, status, self.state.suggestions.is_open());

        if action == KeyAction::Quit {
            tracing::info!("Quit requested");
        }
        self.state.apply(action, service).await
    }

    fn render(&self, terminal: &mut Tui, service: &GameService) -> Result<()> {
        let message_limit = usize::from(self.ui.message_panel_height.saturating_sub(2));
        let frame = self.state.frame(service, message_limit);
        ui::render(
            terminal,
            &ui::RenderContext {
                frame: &frame,
                input: &self.state.input,
                suggestions: &self.state.suggestions,
                ui: &self.ui,
            },
        )
    }
}
