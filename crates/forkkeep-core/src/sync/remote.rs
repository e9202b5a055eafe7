//! The upstream repository reference

use serde::{Deserialize, Serialize};

pub const DEFAULT_REMOTE_NAME: &str = "upstream";
pub const DEFAULT_REMOTE_URL: &str = "https://github.com/RaphiMC/ThinGL";
pub const DEFAULT_REMOTE_BRANCH: &str = "main";

/// Identifies the upstream remote and the branch to integrate from.
///
/// If a remote called `name` already exists it is used as-is; `url` is only
/// consulted when the remote has to be registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSpec {
    pub name: String,
    pub url: String,
    pub branch: String,
}

impl RemoteSpec {
    pub fn new(name: impl Into<String>, url: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            branch: branch.into(),
        }
    }

    /// Short name of the remote-tracking ref, e.g. `upstream/main`.
    pub fn tracking_ref(&self) -> String {
        format!("{}/{}", self.name, self.branch)
    }
}

impl Default for RemoteSpec {
    fn default() -> Self {
        Self::new(DEFAULT_REMOTE_NAME, DEFAULT_REMOTE_URL, DEFAULT_REMOTE_BRANCH)
    }
}
