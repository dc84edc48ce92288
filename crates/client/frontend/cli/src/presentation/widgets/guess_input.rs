//! Guess input line and the suggestion list below it.

use client_frontend_core::Autocomplete;
use ratatui::{
    Frame,
    layout::{Position, Rect},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Renders the input box and places the cursor after the typed text.
pub fn render_input(frame: &mut Frame, area: Rect, input: &str, enabled: bool) {
    let title = if enabled {
        " Your guess "
    } else {
        " Round over "
    };
    let paragraph = Paragraph::new(input).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);

    if enabled {
        let width = u16::try_from(input.chars().count()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(width)
            .min(area.right().saturating_sub(2));
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}

pub fn render_suggestions(
    frame: &mut Frame,
    area: Rect,
    suggestions: &Autocomplete,
    theme: &RatatuiTheme,
) {
    let items: Vec<ListItem> = suggestions
        .items()
        .iter()
        .map(|name| ListItem::new(name.as_str()))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Suggestions "))
        .highlight_style(theme.style_highlight())
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(suggestions.active());
    frame.render_stateful_widget(list, area, &mut state);
}
