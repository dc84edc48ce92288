//! Results table: one row per guess, one colored cell per judged attribute.

use client_frontend_core::{COLUMNS, Cell as FeedbackCell, GuessRow, UiFrame};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::presentation::theme::RatatuiTheme;

/// Each row shows the value on the first line and the verdict below it.
const ROW_HEIGHT: u16 = 2;

pub fn render(frame: &mut Frame, area: Rect, ui: &UiFrame, theme: &RatatuiTheme) {
    let header = Row::new(COLUMNS.iter().map(|title| Cell::from(*title)))
        .style(theme.style_header())
        .bottom_margin(1);

    let rows = ui.rows.iter().map(|row| guess_row(row, theme));
    let widths = [Constraint::Ratio(1, COLUMNS.len() as u32); COLUMNS.len()];

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Guesses ({}) ", ui.rows.len())),
        );

    frame.render_widget(table, area);
}

fn guess_row<'a>(row: &'a GuessRow, theme: &RatatuiTheme) -> Row<'a> {
    let mut cells = Vec::with_capacity(COLUMNS.len());
    cells.push(Cell::from(row.name.as_str()).style(theme.emphasize(Style::default())));
    cells.extend(row.cells().into_iter().map(|cell| feedback_cell(cell, theme)));
    Row::new(cells).height(ROW_HEIGHT).bottom_margin(1)
}

fn feedback_cell<'a>(cell: &'a FeedbackCell, theme: &RatatuiTheme) -> Cell<'a> {
    let text = Text::from(vec![
        Line::from(cell.value.as_str()),
        Line::from(cell.verdict),
    ]);
    Cell::from(text).style(theme.style_severity(cell.severity))
}
