//! Navigation guard
//!
//! In-app route changes are checked against the blob view's session at the
//! moment they are requested. Process exit is checked against a separate
//! flag that follows the session's dirtiness.

use tracing::debug;

use super::state::App;
use crate::ui::components::{Dialog, DialogCallback};

/// Question asked before unsaved changes are discarded
pub const UNSAVED_CHANGES_MESSAGE: &str =
    "You have unsaved changes. Are you sure you want to leave?";

/// Exit guard, armed while there are unsaved changes
#[derive(Debug, Default)]
pub struct NavigationGuard {
    unload_armed: bool,
}

impl NavigationGuard {
    pub fn is_armed(&self) -> bool {
        self.unload_armed
    }

    /// Arm or disarm to match the session
    pub fn sync(&mut self, dirty: bool) {
        if self.unload_armed != dirty {
            debug!(armed = dirty, "exit guard changed");
            self.unload_armed = dirty;
        }
    }
}

impl App {
    /// Whether leaving the current route needs confirmation
    pub(crate) fn has_unsaved_changes(&self) -> bool {
        self.blob_view.as_ref().is_some_and(|view| view.is_dirty())
    }

    /// Re-align the exit guard with the session
    pub(crate) fn sync_guard(&mut self) {
        let dirty = self.has_unsaved_changes();
        self.guard.sync(dirty);
    }

    /// Ask before discarding the session; `callback` runs on "Yes"
    pub(crate) fn confirm_discard(&mut self, callback: DialogCallback) {
        debug!(?callback, "navigation blocked by unsaved changes");
        self.active_dialog = Some(Dialog::confirm(
            "Unsaved changes",
            UNSAVED_CHANGES_MESSAGE,
            None,
            callback,
        ));
    }

    /// Quit, or ask first while the exit guard is armed
    pub(crate) fn request_quit(&mut self) {
        if self.guard.is_armed() {
            self.confirm_discard(DialogCallback::DiscardAndQuit);
        } else {
            self.quit();
        }
    }
}
