//! Loading placeholder rows for tables

use ratatui::{
    style::Style,
    widgets::{Cell, Row},
};

use crate::ui::{symbols, theme};

/// Placeholder rows shown while a listing loads
///
/// Widths vary per row but are deterministic so renders are stable.
pub fn skeleton_rows(count: usize, columns: usize) -> Vec<Row<'static>> {
    const WIDTHS: [usize; 5] = [12, 18, 9, 15, 6];

    (0..count)
        .map(|row| {
            let cells = (0..columns).map(|col| {
                let width = WIDTHS[(row + col * 2) % WIDTHS.len()];
                Cell::from(symbols::skeleton::FILL.to_string().repeat(width))
            });
            Row::new(cells).style(Style::default().fg(theme::tree_view::SKELETON))
        })
        .collect()
}
