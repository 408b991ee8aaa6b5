//! Reusable UI components
//!
//! Common building blocks for views and overlays.

pub mod blocks;
pub mod commit_form;
pub mod dialog;
pub mod empty_state;
pub mod message;

pub use blocks::*;
pub use commit_form::{CommitField, CommitForm, CommitFormAction};
pub use dialog::{Dialog, DialogCallback, DialogKind, DialogResult, SelectItem};
pub use empty_state::*;
pub use message::*;
