//! Empty, loading, and failure states
//!
//! Display messages when there's no content to show.

use ratatui::{
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Paragraph, Wrap},
};

/// Create a centered empty state display
///
/// `hint` is displayed in gray below the title.
pub fn empty_state(title: &str, hint: Option<&str>) -> Paragraph<'static> {
    let mut lines = vec![Line::from(""), Line::from(title.to_string()).centered()];

    if let Some(hint_text) = hint {
        lines.push(Line::from(""));
        lines.push(Line::from(hint_text.to_string()).dark_gray().centered());
    }

    Paragraph::new(lines)
}

/// A directory without entries
pub fn empty_directory_state() -> Paragraph<'static> {
    empty_state("This directory is empty.", None)
}

/// Inline failure state for a view whose fetch failed
pub fn fetch_error_state(message: &str) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(""),
        Line::styled("Failed to load", Style::default().fg(Color::Red).bold()).centered(),
        Line::from(""),
        Line::from(message.to_string()).centered(),
        Line::from(""),
        Line::from("Press Ctrl+L to retry").dark_gray().centered(),
    ])
    .wrap(Wrap { trim: true })
}
