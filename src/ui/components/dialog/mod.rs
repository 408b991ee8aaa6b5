//! Dialog components for confirmation and selection
//!
//! - Confirm dialog: Yes/No question (discarding unsaved changes)
//! - Select dialog: pick one item (branch selector, breadcrumb jump)

mod confirm;
mod select;
#[cfg(test)]
mod tests;

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use crate::model::Route;

/// What the app does with a dialog's result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogCallback {
    /// Leave the dirty blob view for `target`, discarding the edit session
    DiscardAndNavigate {
        /// Route that was requested
        target: Route,
    },
    /// Leave the dirty blob view through history (back or forward)
    DiscardAndTraverse {
        /// True for forward, false for back
        forward: bool,
    },
    /// Quit the application, discarding the edit session
    DiscardAndQuit,
    /// Switch to the selected branch (Select dialog, value = branch name)
    SwitchBranch,
    /// Jump to the selected breadcrumb (Select dialog, value = route path)
    JumpToPath,
}

/// Selection item for Select dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectItem {
    /// Display label
    pub label: String,
    /// Internal value (returned on confirm)
    pub value: String,
}

impl SelectItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Dialog kind and content
#[derive(Debug, Clone)]
pub enum DialogKind {
    /// Yes/No confirmation
    Confirm {
        title: String,
        message: String,
        /// Optional detail text (warning, etc.)
        detail: Option<String>,
    },
    /// Single selection; Enter returns the item under the cursor
    Select {
        title: String,
        message: String,
        items: Vec<SelectItem>,
    },
}

/// Dialog result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResult {
    /// Confirmed; holds the selected value for Select dialogs
    Confirmed(Option<String>),
    /// Cancelled
    Cancelled,
}

/// Dialog state
#[derive(Debug, Clone)]
pub struct Dialog {
    pub kind: DialogKind,
    /// Cursor position (Select dialog)
    pub cursor: usize,
    pub callback_id: DialogCallback,
}

impl Dialog {
    /// Create a Confirm dialog
    pub fn confirm(
        title: impl Into<String>,
        message: impl Into<String>,
        detail: Option<String>,
        callback_id: DialogCallback,
    ) -> Self {
        Self {
            kind: DialogKind::Confirm {
                title: title.into(),
                message: message.into(),
                detail,
            },
            cursor: 0,
            callback_id,
        }
    }

    /// Create a Select dialog with the cursor on `initial` (clamped)
    pub fn select(
        title: impl Into<String>,
        message: impl Into<String>,
        items: Vec<SelectItem>,
        initial: usize,
        callback_id: DialogCallback,
    ) -> Self {
        let cursor = initial.min(items.len().saturating_sub(1));
        Self {
            kind: DialogKind::Select {
                title: title.into(),
                message: message.into(),
                items,
            },
            cursor,
            callback_id,
        }
    }

    /// Handle key input, returns Some(result) when the dialog should close
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<DialogResult> {
        match &self.kind {
            DialogKind::Confirm { .. } => self.handle_confirm_key(key),
            DialogKind::Select { .. } => self.handle_select_key(key),
        }
    }

    /// Render the dialog centered on screen
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match &self.kind {
            DialogKind::Confirm {
                title,
                message,
                detail,
            } => self.render_confirm(frame, area, title, message, detail.as_deref()),
            DialogKind::Select {
                title,
                message,
                items,
            } => self.render_select(frame, area, title, message, items),
        }
    }
}

/// Calculate a centered rectangle within the given area
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [_, middle, _] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(height), Constraint::Fill(1)])
            .areas(area);
    let [_, center, _] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(width), Constraint::Fill(1)])
            .areas(middle);
    center
}
