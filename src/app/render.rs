//! Rendering logic for the application

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use super::state::{App, View};
use crate::keys::{self, HintContext, OverlayHintKind};
use crate::model::LoadState;
use crate::ui::components::{self, DialogKind};
use crate::ui::theme;
use crate::ui::widgets::{
    LOCATION_BAR_HEIGHT, render_error_banner, render_help_panel, render_location_bar,
    render_status_bar,
};

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        self.last_frame_height.set(area.height);

        let [title_area, main_area, status_area] = Layout::vertical([
            Constraint::Length(LOCATION_BAR_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let notification = self.notification.as_ref().filter(|n| !n.is_expired());
        render_location_bar(frame, title_area, self.repo_name(), &self.route, notification);

        match self.current_view {
            View::Tree => match &self.tree_view {
                Some(view) => view.render(frame, main_area, chrono::Utc::now().timestamp_millis()),
                None => self.render_redirect(frame, main_area),
            },
            View::Blob => {
                if let Some(view) = &self.blob_view {
                    view.render(frame, main_area);
                }
            }
            View::Help => render_help_panel(frame, main_area, self.help_scroll),
        }

        let hints = keys::current_hints(self.current_view, &self.hint_context());
        render_status_bar(frame, status_area, &hints);

        if let Some(form) = &self.commit_form {
            form.render(frame, area);
        }

        // Errors stay visible above overlays
        if let Some(ref error) = self.error_message {
            render_error_banner(frame, error, status_area.height);
        }

        if let Some(dialog) = &self.active_dialog {
            dialog.render(frame, area);
        }
    }

    /// `/` before the redirect target is known
    fn render_redirect(&self, frame: &mut Frame, area: Rect) {
        let block = components::view_block("Files", theme::location::REPOSITORY);
        let content = match &self.info {
            LoadState::Failed(message) => components::fetch_error_state(message),
            _ => components::empty_state("Loading repository...", None),
        };
        frame.render_widget(content.block(block), area);
    }

    fn hint_context(&self) -> HintContext {
        let overlay = match (&self.active_dialog, &self.commit_form) {
            (Some(dialog), _) => Some(match dialog.kind {
                DialogKind::Confirm { .. } => OverlayHintKind::Confirm,
                DialogKind::Select { .. } => OverlayHintKind::Select,
            }),
            (None, Some(_)) => Some(OverlayHintKind::CommitForm),
            (None, None) => None,
        };

        HintContext {
            dirty: self.has_unsaved_changes(),
            below_root: self.route.location().is_some_and(|loc| !loc.is_root()),
            overlay,
        }
    }
}
