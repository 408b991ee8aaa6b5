//! Help panel widget
//!
//! Key bindings grouped by the view they apply to.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::keys::{self, KeyBindEntry};

/// All help panel lines
pub fn build_help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("Key bindings:".bold()), Line::from("")];

    for (title, entries) in [
        ("Global", keys::GLOBAL_KEYS),
        ("Tree View", keys::TREE_KEYS),
        ("Blob View", keys::BLOB_KEYS),
        ("Commit Form", keys::COMMIT_FORM_KEYS),
    ] {
        push_section(&mut lines, title, entries);
    }

    lines
}

fn push_section(lines: &mut Vec<Line<'static>>, title: &str, entries: &[KeyBindEntry]) {
    lines.push(Line::from(format!("{title}:")).underlined());
    for entry in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:14}", entry.key), Style::default().fg(Color::Yellow)),
            Span::raw(entry.description),
        ]));
    }
    lines.push(Line::from(""));
}

/// Render help content showing key bindings
///
/// `scroll` beyond the content length is clamped by ratatui's Paragraph.
pub fn render_help_panel(frame: &mut Frame, area: Rect, scroll: u16) {
    let title = Line::from(" Grove - Help ").bold().white().centered();

    frame.render_widget(
        Paragraph::new(build_help_lines())
            .block(Block::default().borders(Borders::ALL).title(title))
            .scroll((scroll, 0)),
        area,
    );
}
