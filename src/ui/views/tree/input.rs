//! Tree View key handling

use crossterm::event::KeyEvent;

use super::{TreeAction, TreeView};
use crate::keys;
use crate::model::Route;

impl TreeView {
    /// Handle key event
    pub fn handle_key(&mut self, key: KeyEvent) -> TreeAction {
        self.handle_key_with_height(key, Self::DEFAULT_VISIBLE_COUNT)
    }

    /// Handle key event with explicit visible height
    pub fn handle_key_with_height(&mut self, key: KeyEvent, visible_count: usize) -> TreeAction {
        match key.code {
            code if keys::is_move_down(code) => {
                self.selection.next(self.row_count(), visible_count);
                TreeAction::None
            }
            code if keys::is_move_up(code) => {
                self.selection.prev(visible_count);
                TreeAction::None
            }
            keys::GO_TOP => {
                self.selection.first();
                TreeAction::None
            }
            keys::GO_BOTTOM => {
                self.selection.last(self.row_count(), visible_count);
                TreeAction::None
            }
            keys::OPEN => match self.selected_entry() {
                Some(entry) => TreeAction::Navigate(entry.target(self.location())),
                None => TreeAction::None,
            },
            code if keys::is_parent(code) && !self.location().is_root() => {
                TreeAction::Navigate(Route::Tree(self.location().parent()))
            }
            // Global and app-level keys (q, ?, b, p, [, ], y) are handled in app/input.rs
            _ => TreeAction::None,
        }
    }
}
