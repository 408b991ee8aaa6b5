//! View components
//!
//! Each view renders one kind of route.

mod blob;
mod tree;

pub use blob::{BlobAction, BlobView};
pub use tree::{TreeAction, TreeView};
