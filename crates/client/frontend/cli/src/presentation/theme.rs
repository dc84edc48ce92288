//! Ratatui styling for the terminal UI.
//!
//! Severity tiers and message levels map to colors here and nowhere else.

use client_frontend_core::MessageLevel;
use game_core::Severity;
use ratatui::style::{Color, Modifier, Style};

/// xterm-256 orange; `Color::Rgb` needs truecolor support.
const ORANGE: Color = Color::Indexed(208);

/// Ratatui-specific theme for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    pub fn severity_color(&self, severity: Severity) -> Color {
        match severity {
            Severity::Exact => Color::Green,
            Severity::Close => Color::Yellow,
            Severity::Mid => ORANGE,
            Severity::Far => Color::Red,
        }
    }

    /// Result cells: dark text on the tier color.
    pub fn style_severity(&self, severity: Severity) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.severity_color(severity))
    }

    pub fn style_message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Success => Style::default().fg(Color::Green),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    pub fn style_header(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn style_highlight(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn emphasize(&self, base_style: Style) -> Style {
        base_style.add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tier_has_a_distinct_color() {
        let theme = RatatuiTheme::new();
        let colors = [Severity::Exact, Severity::Close, Severity::Mid, Severity::Far]
            .map(|severity| theme.severity_color(severity));

        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(colors[0], Color::Green);
        assert_eq!(colors[3], Color::Red);
    }
}
