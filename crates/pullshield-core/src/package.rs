//! Package page addressing.
//!
//! A `PackageRef` is derived purely from the request path and never
//! persisted. GitHub hosts container package pages under two shapes:
//! repo-scoped (`/{owner}/{repo}/pkgs/container/{pkg}`) and user-scoped
//! (`/users/{owner}/packages/container/package/{pkg}`).

/// Identity of the package being looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRef {
    pub owner: String,
    pub repo: Option<String>,
    pub package: String,
}

impl PackageRef {
    pub fn repo_scoped(owner: String, repo: String, package: String) -> Self {
        Self {
            owner,
            repo: Some(repo),
            package,
        }
    }

    pub fn user_scoped(owner: String, package: String) -> Self {
        Self {
            owner,
            repo: None,
            package,
        }
    }

    /// The package page address for this ref on the given host.
    pub fn page_url(&self, base: &str) -> String {
        match &self.repo {
            Some(repo) => format!(
                "{base}/{owner}/{repo}/pkgs/container/{package}",
                owner = self.owner,
                package = self.package,
            ),
            None => format!(
                "{base}/users/{owner}/packages/container/package/{package}",
                owner = self.owner,
                package = self.package,
            ),
        }
    }

    /// Ordered candidate URLs to probe for this ref.
    ///
    /// One variant per ref today; the list shape is the contract so further
    /// naming variants can be probed without touching aggregation.
    pub fn candidate_urls(&self, base: &str) -> Vec<String> {
        vec![self.page_url(base)]
    }
}
