//! Directory listing view model
//!
//! Merges the server's `trees` and `blobs` collections into the rows shown by
//! the tree view. Server order is kept; rows are never sorted by name.

use serde::Deserialize;

use super::location::RepositoryLocation;
use super::relative_time::format_relative_time_at;
use super::route::Route;

/// Name of the synthetic row that leads to the parent directory
pub const PARENT_ENTRY_NAME: &str = "..";

/// One entry as returned by `GET /tree/...`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileInfo {
    pub name: String,
    pub last_commit_message: String,
    pub last_commit_timestamp: String,
    #[serde(default)]
    pub last_commit_id: String,
}

/// Body of `GET /tree/...`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FilesResponse {
    #[serde(default)]
    pub trees: Vec<FileInfo>,
    #[serde(default)]
    pub blobs: Vec<FileInfo>,
}

/// Kind of a directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Directory
    Tree,
    /// File
    Blob,
}

/// A row of the directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub kind: EntryKind,
    pub last_commit_message: String,
    /// Epoch seconds as text; empty for the synthetic parent row
    pub last_commit_timestamp: String,
    pub last_commit_id: String,
}

impl DirectoryEntry {
    fn from_info(info: FileInfo, kind: EntryKind) -> Self {
        Self {
            name: info.name,
            kind,
            last_commit_message: info.last_commit_message,
            last_commit_timestamp: info.last_commit_timestamp,
            last_commit_id: info.last_commit_id,
        }
    }

    /// The synthetic `..` row
    pub fn parent_entry() -> Self {
        Self {
            name: PARENT_ENTRY_NAME.to_string(),
            kind: EntryKind::Tree,
            last_commit_message: String::new(),
            last_commit_timestamp: String::new(),
            last_commit_id: String::new(),
        }
    }

    pub fn is_parent_entry(&self) -> bool {
        self.kind == EntryKind::Tree && self.name == PARENT_ENTRY_NAME
    }

    /// Route opened when this row is activated from `location`
    pub fn target(&self, location: &RepositoryLocation) -> Route {
        match self.kind {
            EntryKind::Tree if self.is_parent_entry() => Route::Tree(location.parent()),
            EntryKind::Tree => Route::Tree(location.child(&self.name)),
            EntryKind::Blob => Route::Blob(location.child(&self.name)),
        }
    }

    /// Relative "last update" text; empty when the row has no timestamp
    pub fn last_update(&self, now_ms: i64) -> String {
        if self.last_commit_timestamp.is_empty() {
            String::new()
        } else {
            format_relative_time_at(&self.last_commit_timestamp, now_ms)
        }
    }
}

/// Build the ordered rows for `location`
///
/// Order: `..` (only below the root), then trees, then blobs, each in the
/// order the server sent them.
pub fn build_listing(location: &RepositoryLocation, files: FilesResponse) -> Vec<DirectoryEntry> {
    let mut rows = Vec::with_capacity(files.trees.len() + files.blobs.len() + 1);

    if !location.is_root() {
        rows.push(DirectoryEntry::parent_entry());
    }

    rows.extend(
        files
            .trees
            .into_iter()
            .map(|info| DirectoryEntry::from_info(info, EntryKind::Tree)),
    );
    rows.extend(
        files
            .blobs
            .into_iter()
            .map(|info| DirectoryEntry::from_info(info, EntryKind::Blob)),
    );

    rows
}
