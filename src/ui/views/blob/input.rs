//! Blob View key handling

use crossterm::event::KeyEvent;

use super::{BlobAction, BlobView};
use crate::keys;

impl BlobView {
    /// Handle key event
    ///
    /// Keys that are not view actions go to the editor. A key that changes
    /// the text reports the full editor content to the session.
    pub fn handle_key(&mut self, key: KeyEvent) -> BlobAction {
        if key.code == keys::ESC {
            return BlobAction::Back;
        }
        if keys::is_commit_key(&key) {
            return if self.is_dirty() {
                BlobAction::OpenCommitForm
            } else {
                BlobAction::None
            };
        }

        if let Some(editor) = self.content.loaded_mut()
            && editor.textarea.input(key)
        {
            let text = editor.editor_text();
            editor.session.on_editor_change(Some(text));
        }
        BlobAction::None
    }
}
