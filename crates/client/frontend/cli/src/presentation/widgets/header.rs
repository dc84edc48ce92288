//! Header widget: title and score readout.

use client_frontend_core::{MessageLevel, RoundStatus, UiFrame};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, ui: &UiFrame, theme: &RatatuiTheme) {
    let status = match ui.status {
        RoundStatus::Playing => Span::raw("Guess the creature"),
        RoundStatus::Won => Span::styled(
            "Solved!",
            theme.emphasize(theme.style_message(MessageLevel::Success)),
        ),
        RoundStatus::NoGame => Span::raw("No game in progress"),
    };

    let line = Line::from(vec![
        Span::styled("DEXDLE", theme.style_header()),
        Span::raw("  |  "),
        status,
        Span::raw("  |  "),
        Span::raw(format!("Attempts: {}", ui.score.attempts)),
        Span::raw("  "),
        Span::raw(format!("Best: {}", ui.score.best_label())),
    ]);

    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
