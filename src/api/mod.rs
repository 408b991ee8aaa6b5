//! Backend API layer
//!
//! The backend resolves branches, lists trees, serves blob contents and
//! performs commits. This module defines the [`Backend`] seam and its HTTP
//! implementation.

pub mod constants;
mod http;

pub use http::HttpBackend;

use thiserror::Error;

use crate::model::{BranchSet, CommitRequest, FilesResponse, RepositoryInfo, RepositoryLocation};

/// Errors returned by backend requests
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Operations the client needs from the repository backend
///
/// Calls block the calling thread. The app never calls them from the UI
/// thread; each request runs on a worker and reports back over a channel.
pub trait Backend: Send + Sync {
    /// `GET /info`
    fn info(&self) -> Result<RepositoryInfo, ApiError>;

    /// `GET /branches`
    fn branches(&self) -> Result<BranchSet, ApiError>;

    /// `GET /tree/{branch}/{path?}`
    fn tree(&self, location: &RepositoryLocation) -> Result<FilesResponse, ApiError>;

    /// `GET /blob/{branch}/{path}`
    fn blob(&self, location: &RepositoryLocation) -> Result<String, ApiError>;

    /// `POST /blob/{branch}/{path}`; `Ok` only on a success status
    fn push_blob(&self, location: &RepositoryLocation, request: &CommitRequest)
    -> Result<(), ApiError>;
}
