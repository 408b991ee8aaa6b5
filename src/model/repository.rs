//! Repository-wide data loaded once per start

use serde::Deserialize;

use super::location::RepositoryLocation;
use super::route::Route;

/// Body of `GET /info`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RepositoryInfo {
    pub name: String,
    #[serde(default)]
    pub main_branch: Option<String>,
}

/// Branches available in the repository, in server order
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct BranchSet(Vec<String>);

impl BranchSet {
    pub fn new(branches: Vec<String>) -> Self {
        Self(branches)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, branch: &str) -> bool {
        self.0.iter().any(|b| b == branch)
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }
}

/// Target of the `/` redirect: the main branch's tree root
///
/// Falls back to the first listed branch when the backend reports no main
/// branch. `None` when neither is known.
pub fn default_route(info: &RepositoryInfo, branches: &BranchSet) -> Option<Route> {
    info.main_branch
        .as_deref()
        .or_else(|| branches.first())
        .map(|branch| Route::Tree(RepositoryLocation::root(branch)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_info() {
        let info: RepositoryInfo = serde_json::from_str(r#"{"name": "demo.git"}"#).unwrap();
        assert_eq!(info.name, "demo.git");
        assert_eq!(info.main_branch, None);
    }

    #[test]
    fn test_deserialize_branches() {
        let branches: BranchSet = serde_json::from_str(r#"["main", "dev"]"#).unwrap();
        assert_eq!(branches.iter().collect::<Vec<_>>(), ["main", "dev"]);
        assert!(branches.contains("dev"));
    }

    #[test]
    fn test_default_route_prefers_main_branch() {
        let info = RepositoryInfo {
            name: "demo".to_string(),
            main_branch: Some("trunk".to_string()),
        };
        let branches = BranchSet::new(vec!["dev".to_string(), "trunk".to_string()]);
        assert_eq!(
            default_route(&info, &branches),
            Some(Route::Tree(RepositoryLocation::root("trunk")))
        );
    }

    #[test]
    fn test_default_route_falls_back_to_first_branch() {
        let info = RepositoryInfo::default();
        let branches = BranchSet::new(vec!["dev".to_string()]);
        assert_eq!(
            default_route(&info, &branches),
            Some(Route::Tree(RepositoryLocation::root("dev")))
        );
        assert_eq!(default_route(&info, &BranchSet::default()), None);
    }
}
