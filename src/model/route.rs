//! Routes: the addressable, shareable form of every screen
//!
//! Valid shapes are `/`, `/tree/{branch}/{*path}` and `/blob/{branch}/{*path}`.

use thiserror::Error;

use super::location::{RepositoryLocation, decode_component, encode_component};

/// Errors produced when parsing a route path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Unsupported route: {0}")]
    Unsupported(String),

    #[error("Blob route has no file path: {0}")]
    MissingPath(String),

    #[error("Route contains invalid percent-encoding: {0}")]
    Decode(String),
}

/// A screen in the application
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// Entry point; redirects to the main branch's tree root
    Root,
    /// Directory listing
    Tree(RepositoryLocation),
    /// File view/edit
    Blob(RepositoryLocation),
}

impl Route {
    /// Parse a route path such as `/tree/main/src`
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim();
        if trimmed.is_empty() || trimmed == "/" {
            return Ok(Route::Root);
        }

        let rest = trimmed.strip_prefix('/').unwrap_or(trimmed);
        let (kind, rest) = rest
            .split_once('/')
            .ok_or_else(|| RouteError::Unsupported(path.to_string()))?;
        let (branch, splat) = match rest.split_once('/') {
            Some((branch, splat)) => (branch, splat),
            None => (rest, ""),
        };
        if branch.is_empty() {
            return Err(RouteError::Unsupported(path.to_string()));
        }

        let decode = |s: &str| decode_component(s).ok_or_else(|| RouteError::Decode(path.to_string()));
        let branch = decode(branch)?;
        let segments = splat
            .split('/')
            .filter(|s| !s.is_empty())
            .map(decode)
            .collect::<Result<Vec<_>, _>>()?;
        if is_dot_segment(&branch) || segments.iter().any(|s| is_dot_segment(s)) {
            return Err(RouteError::Unsupported(path.to_string()));
        }
        let location = RepositoryLocation::from_route_params(branch, None);
        let location = segments.iter().fold(location, |loc, s| loc.child(s));

        match kind {
            "tree" => Ok(Route::Tree(location)),
            "blob" if location.is_root() => Err(RouteError::MissingPath(path.to_string())),
            "blob" => Ok(Route::Blob(location)),
            _ => Err(RouteError::Unsupported(path.to_string())),
        }
    }

    /// Canonical path for this route
    ///
    /// The tree root renders as `/tree/{branch}/`.
    pub fn to_path(&self) -> String {
        match self {
            Route::Root => "/".to_string(),
            Route::Tree(loc) => format!("/tree/{}/{}", loc.encoded_branch(), loc.encoded_splat()),
            Route::Blob(loc) => format!("/blob/{}/{}", loc.encoded_branch(), loc.encoded_splat()),
        }
    }

    /// Location shown by this route (`None` for the redirecting root)
    pub fn location(&self) -> Option<&RepositoryLocation> {
        match self {
            Route::Root => None,
            Route::Tree(loc) | Route::Blob(loc) => Some(loc),
        }
    }

    /// Same screen on another branch (path and kind are kept)
    pub fn with_branch(&self, branch: &str) -> Self {
        match self {
            Route::Root => Route::Tree(RepositoryLocation::root(branch)),
            Route::Tree(loc) => Route::Tree(loc.with_branch(branch)),
            Route::Blob(loc) => Route::Blob(loc.with_branch(branch)),
        }
    }
}

/// `.` and `..` name no entry of their own
fn is_dot_segment(segment: &str) -> bool {
    segment == "." || segment == ".."
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_path())
    }
}
