//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct and view management
//! - `input`: Key event handling
//! - `render`: UI rendering
//! - `navigation`: Route changes and history
//! - `loader`: Route-tagged fetch queue
//! - `guard`: Unsaved-changes protection
//! - `commit`: Commit form and push

mod clipboard;
mod commit;
mod guard;
mod input;
mod loader;
mod navigation;
mod refresh;
mod render;
mod state;

pub use clipboard::ClipboardError;
pub use guard::{NavigationGuard, UNSAVED_CHANGES_MESSAGE};
pub use loader::{FetchResult, PendingFetch, RouteTicket};
pub use state::{App, View};
