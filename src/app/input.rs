//! Input handling for the application

use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use super::state::{App, View};
use crate::keys;
use crate::model::Route;
use crate::ui::components::{DialogCallback, DialogResult};
use crate::ui::views::{BlobAction, TreeAction};
use crate::ui::widgets::LOCATION_BAR_HEIGHT;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear error message on any key press
        self.error_message = None;

        if keys::is_force_quit(&key) {
            self.request_quit();
            return;
        }

        // Overlays take all input
        if let Some(dialog) = self.active_dialog.as_mut() {
            if let Some(result) = dialog.handle_key(key) {
                let callback = dialog.callback_id.clone();
                self.active_dialog = None;
                self.handle_dialog_result(callback, result);
            }
            return;
        }
        if let Some(form) = self.commit_form.as_mut() {
            if let Some(action) = form.handle_key(key) {
                self.handle_commit_form_action(action);
            }
            return;
        }

        if self.handle_global_key(&key) {
            return;
        }

        match self.current_view {
            View::Tree => self.handle_tree_key(key),
            View::Blob => self.handle_blob_key(key),
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_global_key(&mut self, key: &KeyEvent) -> bool {
        if keys::is_refresh_key(key) {
            self.refresh();
        } else if keys::is_history_back(key) {
            self.go_back();
        } else if keys::is_history_forward(key) {
            self.go_forward();
        } else {
            return false;
        }
        true
    }

    fn handle_tree_key(&mut self, key: KeyEvent) {
        match key.code {
            keys::QUIT => self.request_quit(),
            keys::HELP => self.show_help(),
            keys::BRANCH => self.open_branch_selector(),
            keys::PATH_JUMP => self.open_path_selector(),
            keys::BACK => self.go_back(),
            keys::FORWARD => self.go_forward(),
            keys::COPY_PATH => self.copy_route_path(),
            _ => {
                let visible = self.tree_visible_rows();
                let Some(view) = self.tree_view.as_mut() else {
                    return;
                };
                match view.handle_key_with_height(key, visible) {
                    TreeAction::Navigate(target) => self.request_navigation(target),
                    TreeAction::None => {}
                }
            }
        }
    }

    fn handle_blob_key(&mut self, key: KeyEvent) {
        if keys::is_branch_key(&key) {
            self.open_branch_selector();
            return;
        }
        if keys::is_path_key(&key) {
            self.open_path_selector();
            return;
        }
        if keys::is_copy_key(&key) {
            self.copy_route_path();
            return;
        }

        let Some(view) = self.blob_view.as_mut() else {
            return;
        };
        let parent = Route::Tree(view.location().parent());
        let action = view.handle_key(key);
        self.sync_guard();

        match action {
            BlobAction::Back => self.request_navigation(parent),
            BlobAction::OpenCommitForm => self.open_commit_form(),
            BlobAction::None => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            keys::QUIT | keys::ESC | keys::HELP => self.close_help(),
            code if keys::is_move_down(code) => {
                self.help_scroll = self.help_scroll.saturating_add(1);
            }
            code if keys::is_move_up(code) => {
                self.help_scroll = self.help_scroll.saturating_sub(1);
            }
            KeyCode::Char('g') => self.help_scroll = 0,
            _ => {}
        }
    }

    fn handle_dialog_result(&mut self, callback: DialogCallback, result: DialogResult) {
        let DialogResult::Confirmed(value) = result else {
            debug!(?callback, "dialog cancelled");
            return;
        };

        match (callback, value) {
            (DialogCallback::DiscardAndNavigate { target }, _) => self.navigate_to(target),
            (DialogCallback::DiscardAndTraverse { forward }, _) => self.traverse(forward),
            (DialogCallback::DiscardAndQuit, _) => self.quit(),
            (DialogCallback::SwitchBranch, Some(branch)) => self.switch_branch(&branch),
            (DialogCallback::JumpToPath, Some(path)) => self.jump_to_path(&path),
            (DialogCallback::SwitchBranch | DialogCallback::JumpToPath, None) => {}
        }
    }

    /// Listing rows that fit on screen (title bar, status bar, borders, header)
    fn tree_visible_rows(&self) -> usize {
        self.last_frame_height
            .get()
            .saturating_sub(LOCATION_BAR_HEIGHT + 4) as usize
    }
}
