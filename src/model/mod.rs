//! Data models for Grove
//!
//! UI-independent structures: locations and routes, listings, edit sessions,
//! commit drafts and repository metadata.

mod commit;
mod listing;
mod load;
mod location;
mod notification;
mod relative_time;
mod repository;
mod route;
mod session;

pub use commit::{CommitDraft, CommitRequest};
pub use listing::{
    DirectoryEntry, EntryKind, FileInfo, FilesResponse, PARENT_ENTRY_NAME, build_listing,
};
pub use load::LoadState;
pub use location::{Breadcrumb, RepositoryLocation, decode_component, encode_component};
pub use notification::{Notification, NotificationKind};
pub use relative_time::{INVALID_TIME, format_relative_time, format_relative_time_at};
pub use repository::{BranchSet, RepositoryInfo, default_route};
pub use route::{Route, RouteError};
pub use session::EditSession;
