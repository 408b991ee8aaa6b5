//! Edit session for a blob
//!
//! Tracks the text loaded from the server and the editor's pending override.
//! The session is Clean when there is no override; an override equal to the
//! original text is never stored.

/// Pending edits of one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    original: String,
    current: Option<String>,
}

impl EditSession {
    /// Start a clean session on the loaded text
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            current: None,
        }
    }

    /// Apply an editor change event
    ///
    /// `None` is the editor's "no value" signal and clears pending edits, as
    /// does a value equal to the original text.
    pub fn on_editor_change(&mut self, value: Option<String>) {
        self.current = value.filter(|v| *v != self.original);
    }

    pub fn is_dirty(&self) -> bool {
        self.current.is_some()
    }

    /// Text last loaded from or committed to the server
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Pending text, `None` when clean
    pub fn pending(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Text currently shown in the editor
    pub fn content(&self) -> &str {
        self.current.as_deref().unwrap_or(&self.original)
    }

    /// Make `committed` the new baseline after a successful push
    pub fn rebase(&mut self, committed: impl Into<String>) {
        self.original = committed.into();
        self.current = None;
    }
}
