//! Backend endpoint constants

/// Base URL used when none is configured
pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";

/// Endpoint path prefixes (relative to the base URL)
pub mod endpoints {
    pub const INFO: &str = "/info";
    pub const BRANCHES: &str = "/branches";
    pub const TREE: &str = "/tree";
    pub const BLOB: &str = "/blob";
}

/// Upper bound on the error body kept in [`super::ApiError::Status`]
pub const MAX_ERROR_BODY: usize = 200;
