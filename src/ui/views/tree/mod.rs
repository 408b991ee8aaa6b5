//! Tree View
//!
//! Directory listing of one repository location.

mod input;
mod render;

use crate::model::{DirectoryEntry, FilesResponse, LoadState, RepositoryLocation, Route, build_listing};
use crate::ui::navigation::Selection;

/// Action returned from TreeView key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeAction {
    /// Navigate to another route (row activation or parent directory)
    Navigate(Route),
    /// No action
    None,
}

/// Tree View state
#[derive(Debug)]
pub struct TreeView {
    location: RepositoryLocation,
    pub(super) rows: LoadState<Vec<DirectoryEntry>>,
    pub(super) selection: Selection,
}

impl TreeView {
    /// Default visible count for scroll calculations
    pub(super) const DEFAULT_VISIBLE_COUNT: usize = 20;

    /// Create a view in the loading state
    pub fn new(location: RepositoryLocation) -> Self {
        Self {
            location,
            rows: LoadState::Loading,
            selection: Selection::default(),
        }
    }

    pub fn location(&self) -> &RepositoryLocation {
        &self.location
    }

    pub fn is_loading(&self) -> bool {
        self.rows.is_loading()
    }

    /// Rows of a loaded listing
    pub fn rows(&self) -> Option<&[DirectoryEntry]> {
        self.rows.loaded().map(Vec::as_slice)
    }

    /// Fetch error shown inline
    pub fn error(&self) -> Option<&str> {
        self.rows.error()
    }

    /// Apply a listing response
    pub fn set_listing(&mut self, files: FilesResponse) {
        let rows = build_listing(&self.location, files);
        self.selection.clamp(rows.len());
        self.rows = LoadState::Loaded(rows);
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.rows = LoadState::Failed(message.into());
    }

    pub fn selected_index(&self) -> usize {
        self.selection.selected()
    }

    pub fn selected_entry(&self) -> Option<&DirectoryEntry> {
        self.rows()
            .and_then(|rows| rows.get(self.selection.selected()))
    }

    fn row_count(&self) -> usize {
        self.rows().map_or(0, <[DirectoryEntry]>::len)
    }
}
