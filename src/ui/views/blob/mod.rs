//! Blob View
//!
//! Shows a file in an editor and tracks unsaved changes in an
//! [`EditSession`]. The editor reports the full text after every modifying
//! key; the session decides whether that text is a change.

mod input;
mod render;

use ratatui::style::{Color, Style};
use tui_textarea::TextArea;

use crate::model::{EditSession, LoadState, RepositoryLocation};

/// Action returned from BlobView key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlobAction {
    /// Leave for the containing directory
    Back,
    /// Open the commit form (only offered while dirty)
    OpenCommitForm,
    /// No action
    None,
}

/// Editor widget together with the session it feeds
#[derive(Debug)]
pub(super) struct BlobEditor {
    pub(super) session: EditSession,
    pub(super) textarea: TextArea<'static>,
}

impl BlobEditor {
    fn new(text: String) -> Self {
        // Splitting on '\n' keeps empty and trailing lines so that joining
        // the editor lines reproduces the text exactly
        let lines = text.split('\n').map(str::to_string).collect();
        let mut textarea = TextArea::new(lines);
        textarea.set_cursor_line_style(Style::default());
        textarea.set_line_number_style(Style::default().fg(Color::DarkGray));

        Self {
            session: EditSession::new(text),
            textarea,
        }
    }

    fn editor_text(&self) -> String {
        self.textarea.lines().join("\n")
    }
}

/// Blob View state
#[derive(Debug)]
pub struct BlobView {
    location: RepositoryLocation,
    pub(super) content: LoadState<BlobEditor>,
}

impl BlobView {
    /// Create a view in the loading state
    pub fn new(location: RepositoryLocation) -> Self {
        Self {
            location,
            content: LoadState::Loading,
        }
    }

    pub fn location(&self) -> &RepositoryLocation {
        &self.location
    }

    pub fn is_loading(&self) -> bool {
        self.content.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.content.error()
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.content.loaded().map(|editor| &editor.session)
    }

    pub fn is_dirty(&self) -> bool {
        self.session().is_some_and(EditSession::is_dirty)
    }

    /// Text currently in the editor
    pub fn editor_text(&self) -> Option<String> {
        self.content.loaded().map(BlobEditor::editor_text)
    }

    /// Start a clean session on freshly fetched text
    pub fn set_content(&mut self, text: String) {
        self.content = LoadState::Loaded(BlobEditor::new(text));
    }

    /// Apply a refetch of the same route
    ///
    /// Edits made since the fetch was queued are kept.
    pub fn refresh_content(&mut self, text: String) -> bool {
        if self.is_dirty() {
            return false;
        }
        self.set_content(text);
        true
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.content = LoadState::Failed(message.into());
    }

    /// Record a successful push of `committed`
    pub fn commit_succeeded(&mut self, committed: &str) {
        if let Some(editor) = self.content.loaded_mut() {
            editor.session.rebase(committed);
        }
    }

    /// Feed an editor change event to the session
    pub fn on_editor_change(&mut self, value: Option<String>) {
        if let Some(editor) = self.content.loaded_mut() {
            editor.session.on_editor_change(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn loaded(text: &str) -> BlobView {
        let mut view = BlobView::new(RepositoryLocation::from_route_params(
            "main",
            Some("src/app.ts"),
        ));
        view.set_content(text.to_string());
        view
    }

    fn press(view: &mut BlobView, code: KeyCode) -> BlobAction {
        view.handle_key(KeyEvent::from(code))
    }

    fn ctrl(view: &mut BlobView, c: char) -> BlobAction {
        view.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn test_editor_preserves_text_exactly() {
        let view = loaded("a\n\nb\n");
        assert_eq!(view.editor_text().as_deref(), Some("a\n\nb\n"));
        assert!(!view.is_dirty());
    }

    #[test]
    fn test_typing_makes_dirty() {
        let mut view = loaded("a\n\nb\n");
        press(&mut view, KeyCode::Char('x'));
        assert!(view.is_dirty());
        assert_eq!(
            view.session().and_then(EditSession::pending),
            Some("xa\n\nb\n")
        );
    }

    #[test]
    fn test_reverting_edit_makes_clean() {
        let mut view = loaded("abc");
        press(&mut view, KeyCode::Char('x'));
        assert!(view.is_dirty());
        press(&mut view, KeyCode::Backspace);
        assert!(!view.is_dirty());
    }

    #[test]
    fn test_cursor_movement_does_not_dirty() {
        let mut view = loaded("abc\ndef");
        press(&mut view, KeyCode::Down);
        press(&mut view, KeyCode::Right);
        assert!(!view.is_dirty());
    }

    #[test]
    fn test_esc_goes_back() {
        let mut view = loaded("abc");
        assert_eq!(press(&mut view, KeyCode::Esc), BlobAction::Back);
    }

    #[test]
    fn test_commit_key_only_when_dirty() {
        let mut view = loaded("abc");
        assert_eq!(ctrl(&mut view, 's'), BlobAction::None);
        press(&mut view, KeyCode::Char('x'));
        assert_eq!(ctrl(&mut view, 's'), BlobAction::OpenCommitForm);
    }

    #[test]
    fn test_commit_succeeded_cleans_session() {
        let mut view = loaded("abc");
        press(&mut view, KeyCode::Char('x'));
        let text = view.editor_text().unwrap();
        view.commit_succeeded(&text);
        assert!(!view.is_dirty());
        assert_eq!(view.session().map(EditSession::original), Some("xabc"));
    }

    #[test]
    fn test_refresh_keeps_pending_edits() {
        let mut view = loaded("abc");
        press(&mut view, KeyCode::Char('x'));
        assert!(!view.refresh_content("server".to_string()));
        assert_eq!(view.editor_text().as_deref(), Some("xabc"));
    }

    #[test]
    fn test_keys_ignored_while_loading() {
        let mut view = BlobView::new(RepositoryLocation::from_route_params("main", Some("a")));
        assert_eq!(press(&mut view, KeyCode::Char('x')), BlobAction::None);
        assert!(view.session().is_none());
    }
}
