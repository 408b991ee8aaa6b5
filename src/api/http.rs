//! HTTP implementation of [`Backend`]

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, debug_span, warn};

use super::constants::{MAX_ERROR_BODY, endpoints};
use super::{ApiError, Backend};
use crate::model::{BranchSet, CommitRequest, FilesResponse, RepositoryInfo, RepositoryLocation};

/// Backend reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a backend for the given base URL (e.g. `http://localhost:3001/api`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a backend with a custom reqwest client
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn info_url(&self) -> String {
        format!("{}{}", self.base_url, endpoints::INFO)
    }

    fn branches_url(&self) -> String {
        format!("{}{}", self.base_url, endpoints::BRANCHES)
    }

    /// `/tree/{branch}` at the root, `/tree/{branch}/{path}` below it
    pub(crate) fn tree_url(&self, location: &RepositoryLocation) -> String {
        if location.is_root() {
            format!("{}{}/{}", self.base_url, endpoints::TREE, location.encoded_branch())
        } else {
            format!(
                "{}{}/{}/{}",
                self.base_url,
                endpoints::TREE,
                location.encoded_branch(),
                location.encoded_splat()
            )
        }
    }

    pub(crate) fn blob_url(&self, location: &RepositoryLocation) -> String {
        format!(
            "{}{}/{}/{}",
            self.base_url,
            endpoints::BLOB,
            location.encoded_branch(),
            location.encoded_splat()
        )
    }

    fn get(&self, url: &str) -> Result<Response, ApiError> {
        debug!(%url, "GET");
        let response = self.client.get(url).send()?;
        check_status(response)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let _span = debug_span!("request", method = "GET", %url).entered();
        self.get(url)?
            .json::<T>()
            .map_err(|e| ApiError::Decode(format!("{}: {}", url, e)))
    }
}

/// Turn a non-success status into [`ApiError::Status`]
fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    let body: String = body.trim().chars().take(MAX_ERROR_BODY).collect();
    warn!(status = status.as_u16(), %body, "backend request rejected");
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

impl Backend for HttpBackend {
    fn info(&self) -> Result<RepositoryInfo, ApiError> {
        self.get_json(&self.info_url())
    }

    fn branches(&self) -> Result<BranchSet, ApiError> {
        self.get_json(&self.branches_url())
    }

    fn tree(&self, location: &RepositoryLocation) -> Result<FilesResponse, ApiError> {
        self.get_json(&self.tree_url(location))
    }

    fn blob(&self, location: &RepositoryLocation) -> Result<String, ApiError> {
        let url = self.blob_url(location);
        let _span = debug_span!("request", method = "GET", %url).entered();
        self.get(&url)?
            .text()
            .map_err(|e| ApiError::Decode(format!("{}: {}", url, e)))
    }

    fn push_blob(
        &self,
        location: &RepositoryLocation,
        request: &CommitRequest,
    ) -> Result<(), ApiError> {
        let url = self.blob_url(location);
        let _span = debug_span!("request", method = "POST", %url).entered();
        debug!(%url, "POST");
        let response = self.client.post(&url).json(request).send()?;
        check_status(response).map(|_| ())
    }
}
