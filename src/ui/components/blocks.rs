//! Block components for UI rendering

use ratatui::{
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders},
};

/// Bordered block with a bold title on the left
pub fn view_block(title: impl Into<String>, color: Color) -> Block<'static> {
    Block::default().borders(Borders::ALL).title(Line::styled(
        format!(" {} ", title.into()),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

/// Bordered block with a left title and an extra right-aligned title
pub fn view_block_with_badge(
    title: impl Into<String>,
    color: Color,
    badge: Option<Line<'static>>,
) -> Block<'static> {
    let block = view_block(title, color);
    match badge {
        Some(badge) => block.title(badge.right_aligned()),
        None => block,
    }
}
