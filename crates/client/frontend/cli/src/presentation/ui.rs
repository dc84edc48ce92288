//! Composes the widgets into the full terminal layout.
use anyhow::Result;
use client_frontend_core::{Autocomplete, RoundStatus, UiFrame};
use ratatui::layout::{Constraint, Direction, Layout};

use crate::config::UiConfig;
use crate::presentation::{terminal::Tui, theme::RatatuiTheme, widgets};

/// Everything one draw needs.
pub struct RenderContext<'a> {
    pub frame: &'a UiFrame,
    pub input: &'a str,
    pub suggestions: &'a Autocomplete,
    pub ui: &'a UiConfig,
}

/// Layout, top to bottom: header, input, suggestions (only while open),
/// results table, messages, footer.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme::new();

    terminal.draw(|frame| {
        let suggestion_height = if ctx.suggestions.is_open() {
            ctx.ui.suggestion_panel_height
        } else {
            0
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                           // Header
                Constraint::Length(3),                           // Input
                Constraint::Length(suggestion_height),           // Suggestions
                Constraint::Min(4),                              // Results
                Constraint::Length(ctx.ui.message_panel_height), // Messages
                Constraint::Length(3),                           // Footer
            ])
            .split(frame.area());

        let playing = ctx.frame.status == RoundStatus::Playing;

        widgets::header::render(frame, chunks[0], ctx.frame, &theme);
        widgets::guess_input::render_input(frame, chunks[1], ctx.input, playing);
        if suggestion_height > 0 {
            widgets::guess_input::render_suggestions(frame, chunks[2], ctx.suggestions, &theme);
        }
        widgets::results::render(frame, chunks[3], ctx.frame, &theme);
        widgets::messages::render(frame, chunks[4], &ctx.frame.messages, &theme);
        widgets::footer::render(frame, chunks[5], ctx.frame.status, &theme);
    })?;

    Ok(())
}
