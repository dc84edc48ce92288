//! Footer widget displaying context-sensitive key bindings.

use client_frontend_core::RoundStatus;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Displays controls for the current round status. The new-game control
/// only appears once the round is over.
pub fn render(frame: &mut Frame, area: Rect, status: RoundStatus, theme: &RatatuiTheme) {
    let line = match status {
        RoundStatus::Playing => Line::from(vec![
            Span::raw("[Type] Name | "),
            Span::raw("[Up/Down] Suggestions | "),
            Span::raw("[Enter] Guess | "),
            Span::raw("[Esc] Close list / Quit"),
        ]),
        RoundStatus::Won | RoundStatus::NoGame => Line::from(vec![
            Span::styled("[n/Enter] New game", theme.style_highlight()),
            Span::raw(" | "),
            Span::raw("[q/Esc] Quit"),
        ]),
    };

    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
