//! Grove - terminal browser for a Git repository served over HTTP
//!
//! Browse a repository's tree across branches, edit a file, and commit the
//! change back through the backend API.
//!
//! This library provides:
//! - [`api`]: Backend trait and HTTP client
//! - [`app`]: Application state and logic
//! - [`config`]: Command line and config file
//! - [`keys`]: Key binding definitions
//! - [`model`]: Domain models
//! - [`ui`]: User interface components

pub mod api;
pub mod app;
pub mod config;
pub mod keys;
pub mod model;
pub mod ui;
