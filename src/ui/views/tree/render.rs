//! Tree View rendering

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Row, Table},
};

use super::TreeView;
use crate::model::{DirectoryEntry, EntryKind, LoadState};
use crate::ui::{components, symbols, theme, widgets};

const COLUMN_WIDTHS: [Constraint; 3] = [
    Constraint::Percentage(30),
    Constraint::Fill(1),
    Constraint::Length(16),
];

impl TreeView {
    /// Render the listing; relative times are computed against `now_ms`
    pub fn render(&self, frame: &mut Frame, area: Rect, now_ms: i64) {
        let block = components::view_block("Files", theme::location::REPOSITORY);

        match &self.rows {
            LoadState::Failed(message) => {
                frame.render_widget(components::fetch_error_state(message).block(block), area);
            }
            LoadState::Loaded(rows) if rows.is_empty() => {
                frame.render_widget(components::empty_directory_state().block(block), area);
            }
            LoadState::Loading => {
                let rows = widgets::skeleton_rows(area.height.saturating_sub(3) as usize, 3);
                frame.render_widget(self.table(rows).block(block), area);
            }
            LoadState::Loaded(rows) => {
                // Borders (2) + header (1)
                let visible = area.height.saturating_sub(3) as usize;
                let mut selection = self.selection;
                selection.scroll_into_view(visible);

                let table_rows = rows
                    .iter()
                    .enumerate()
                    .skip(selection.offset())
                    .take(visible)
                    .map(|(idx, entry)| build_row(entry, idx == selection.selected(), now_ms))
                    .collect();
                frame.render_widget(self.table(table_rows).block(block), area);
            }
        }
    }

    fn table(&self, rows: Vec<Row<'static>>) -> Table<'static> {
        let header = Row::new(["Name", "Last commit", "Last update"]).style(
            Style::default()
                .fg(theme::tree_view::HEADER)
                .add_modifier(Modifier::BOLD),
        );
        Table::new(rows, COLUMN_WIDTHS).header(header)
    }
}

fn build_row(entry: &DirectoryEntry, is_selected: bool, now_ms: i64) -> Row<'static> {
    let (icon, color) = match entry.kind {
        EntryKind::Tree if entry.is_parent_entry() => {
            (symbols::icons::PARENT, theme::tree_view::PARENT)
        }
        EntryKind::Tree => (symbols::icons::DIRECTORY, theme::tree_view::DIRECTORY),
        EntryKind::Blob => (symbols::icons::FILE, theme::tree_view::FILE),
    };
    let marker = if is_selected {
        symbols::markers::SELECTED
    } else {
        symbols::markers::UNSELECTED
    };

    let name = Line::from(vec![
        Span::raw(marker),
        Span::styled(format!("{} {}", icon, entry.name), Style::default().fg(color)),
    ]);
    let message = Span::styled(
        entry.last_commit_message.clone(),
        Style::default().fg(theme::tree_view::MESSAGE),
    );
    let updated = Span::styled(
        entry.last_update(now_ms),
        Style::default().fg(theme::tree_view::TIMESTAMP),
    );

    let row = Row::new([Cell::from(name), Cell::from(message), Cell::from(updated)]);
    if is_selected {
        row.style(
            Style::default()
                .fg(theme::selection::FG)
                .bg(theme::selection::BG)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        row
    }
}
