//! Repository location model
//!
//! A location is a branch plus the slash-delimited path inside it. It is rebuilt
//! from the route on every navigation and never mutated in place.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters escaped in a single path component (same set as `encodeURIComponent`)
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one path component (branch name or path segment)
pub fn encode_component(component: &str) -> String {
    utf8_percent_encode(component, COMPONENT).to_string()
}

/// Decode one percent-encoded path component
///
/// Returns `None` when the decoded bytes are not valid UTF-8.
pub fn decode_component(component: &str) -> Option<String> {
    percent_decode_str(component)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}

/// A branch and a path within it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryLocation {
    branch: String,
    /// Path segments; never contains empty strings. Empty = repository root.
    segments: Vec<String>,
}

/// One element of the breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    /// Text shown for this element
    pub label: String,
    /// Location this element points at
    pub location: RepositoryLocation,
    /// Whether the element is a link (false only for the current location)
    pub navigable: bool,
}

impl RepositoryLocation {
    /// Location of the repository root on `branch`
    pub fn root(branch: impl Into<String>) -> Self {
        Self {
            branch: branch.into(),
            segments: Vec::new(),
        }
    }

    /// Build a location from route parameters
    ///
    /// Empty elements produced by leading, trailing or doubled slashes are
    /// dropped, so `None`, `""` and `"/"` all mean the root.
    pub fn from_route_params(branch: impl Into<String>, splat: Option<&str>) -> Self {
        let segments = splat
            .unwrap_or_default()
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            branch: branch.into(),
            segments,
        }
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Last path segment (file or directory name), `None` at the root
    pub fn file_name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Unencoded splat (`src/app.ts`), empty at the root
    pub fn splat(&self) -> String {
        self.segments.join("/")
    }

    /// Branch name encoded for use as a single path component
    pub fn encoded_branch(&self) -> String {
        encode_component(&self.branch)
    }

    /// Splat with each segment encoded separately
    pub fn encoded_splat(&self) -> String {
        self.segments
            .iter()
            .map(|s| encode_component(s))
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Location of an entry inside this directory
    ///
    /// An empty name yields the location unchanged.
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        if !name.is_empty() {
            segments.push(name.to_string());
        }
        Self {
            branch: self.branch.clone(),
            segments,
        }
    }

    /// Containing directory; the root is its own parent
    pub fn parent(&self) -> Self {
        let mut segments = self.segments.clone();
        segments.pop();
        Self {
            branch: self.branch.clone(),
            segments,
        }
    }

    /// Same path on another branch
    ///
    /// The path may not exist there; that is reported by the backend when the
    /// new location is fetched.
    pub fn with_branch(&self, branch: impl Into<String>) -> Self {
        Self {
            branch: branch.into(),
            segments: self.segments.clone(),
        }
    }

    /// Breadcrumb trail from the repository root down to this location
    ///
    /// The first element is labelled with the repository name. Only the last
    /// element is non-navigable.
    pub fn breadcrumbs(&self, repo_name: &str) -> Vec<Breadcrumb> {
        let mut crumbs = Vec::with_capacity(self.segments.len() + 1);
        crumbs.push(Breadcrumb {
            label: repo_name.to_string(),
            location: Self::root(self.branch.clone()),
            navigable: true,
        });

        for depth in 1..=self.segments.len() {
            crumbs.push(Breadcrumb {
                label: self.segments[depth - 1].clone(),
                location: Self {
                    branch: self.branch.clone(),
                    segments: self.segments[..depth].to_vec(),
                },
                navigable: true,
            });
        }

        if let Some(last) = crumbs.last_mut() {
            last.navigable = false;
        }
        crumbs
    }
}
