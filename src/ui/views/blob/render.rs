//! Blob View rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::BlobView;
use crate::model::LoadState;
use crate::ui::{components, symbols, theme};

impl BlobView {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let title = self.location().file_name().unwrap_or_default().to_string();
        let badge = self.is_dirty().then(|| {
            Line::styled(
                format!(" {} modified ", symbols::markers::MODIFIED),
                Style::default().fg(theme::blob_view::DIRTY),
            )
        });
        let block = components::view_block_with_badge(title, theme::location::REPOSITORY, badge);

        let editor = match &self.content {
            LoadState::Loading => {
                frame.render_widget(components::empty_state("Loading...", None).block(block), area);
                return;
            }
            LoadState::Failed(message) => {
                frame.render_widget(components::fetch_error_state(message).block(block), area);
                return;
            }
            LoadState::Loaded(editor) => editor,
        };

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if editor.session.is_dirty() {
            let [text_area, button_area] =
                Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
            frame.render_widget(&editor.textarea, text_area);
            frame.render_widget(Paragraph::new(commit_button()), button_area);
        } else {
            frame.render_widget(&editor.textarea, inner);
        }
    }
}

fn commit_button() -> Line<'static> {
    Line::from(vec![
        Span::styled(
            " Commit changes ",
            Style::default()
                .fg(Color::Black)
                .bg(theme::blob_view::COMMIT_BUTTON_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Ctrl+S ", Style::default().fg(Color::DarkGray)),
    ])
    .right_aligned()
}
