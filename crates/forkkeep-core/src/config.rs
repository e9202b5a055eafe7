//! Fork configuration
//!
//! Every setting has a built-in default, so a fork without
//! `.forkkeep/config.toml` behaves exactly like one with an empty file.
//!
//! ```toml
//! [rewrite]
//! root = "src/main/java/net/raphimc/thingl/resource"
//! extensions = ["java"]
//!
//! [upstream]
//! remote = "upstream"
//! url = "https://github.com/RaphiMC/ThinGL"
//! branch = "main"
//! integration_branch = "main"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use forkkeep_fs::{ConfigStore, ExtensionFilter, ForkPath, NormalizedPath};

use crate::rewrite::{DEFAULT_PATTERN, DEFAULT_REPLACEMENT, RewriteEngine, RewriteRule};
use crate::sync::{
    DEFAULT_INTEGRATION_BRANCH, DEFAULT_REMOTE_BRANCH, DEFAULT_REMOTE_NAME, DEFAULT_REMOTE_URL,
    RemoteSpec, SyncOrchestrator,
};
use crate::Result;

/// Source subtree rewritten by default, relative to the repository root.
pub const DEFAULT_REWRITE_ROOT: &str = "src/main/java/net/raphimc/thingl/resource";

/// Settings for the rewrite engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RewriteConfig {
    /// Directory to rewrite, relative to the repository root
    pub root: String,
    /// Extensions of eligible files, without the dot
    pub extensions: Vec<String>,
    /// Regular expression to replace
    pub pattern: String,
    /// Literal replacement text
    pub replacement: String,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            root: DEFAULT_REWRITE_ROOT.to_string(),
            extensions: vec!["java".to_string()],
            pattern: DEFAULT_PATTERN.to_string(),
            replacement: DEFAULT_REPLACEMENT.to_string(),
        }
    }
}

/// Settings for upstream synchronization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UpstreamConfig {
    pub remote: String,
    pub url: String,
    pub branch: String,
    pub integration_branch: String,
    /// Defaults to `Update Upstream (<url>)`
    pub commit_message: Option<String>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            remote: DEFAULT_REMOTE_NAME.to_string(),
            url: DEFAULT_REMOTE_URL.to_string(),
            branch: DEFAULT_REMOTE_BRANCH.to_string(),
            integration_branch: DEFAULT_INTEGRATION_BRANCH.to_string(),
            commit_message: None,
        }
    }
}

impl UpstreamConfig {
    pub fn commit_message(&self) -> String {
        self.commit_message
            .clone()
            .unwrap_or_else(|| format!("Update Upstream ({})", self.url))
    }
}

/// Complete forkkeep configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForkConfig {
    pub rewrite: RewriteConfig,
    pub upstream: UpstreamConfig,
}

impl ForkConfig {
    /// Path of the config file for a repository rooted at `repo_root`.
    pub fn path(repo_root: &NormalizedPath) -> NormalizedPath {
        repo_root.join(ForkPath::ConfigFile.as_str())
    }

    /// Load `.forkkeep/config.toml` beneath `repo_root`, or defaults if absent.
    pub fn load(repo_root: &NormalizedPath) -> Result<Self> {
        Self::load_from(&Self::path(repo_root))
    }

    /// Load an explicit config file, or defaults if it does not exist.
    pub fn load_from(path: &NormalizedPath) -> Result<Self> {
        let config = ConfigStore::new().load_optional(path)?;
        Ok(config.unwrap_or_default())
    }

    pub fn rewrite_rule(&self) -> Result<RewriteRule> {
        RewriteRule::new(&self.rewrite.pattern, self.rewrite.replacement.clone())
    }

    /// Directory the rewrite engine walks. Relative roots resolve against
    /// `repo_root`.
    pub fn rewrite_root(&self, repo_root: &NormalizedPath) -> NormalizedPath {
        if Path::new(&self.rewrite.root).is_absolute() {
            NormalizedPath::new(&self.rewrite.root)
        } else {
            repo_root.join(&self.rewrite.root)
        }
    }

    /// Build the rewrite engine for a repository rooted at `repo_root`.
    pub fn rewrite_engine(&self, repo_root: &NormalizedPath) -> Result<RewriteEngine> {
        Ok(RewriteEngine::new(
            self.rewrite_root(repo_root),
            self.rewrite_rule()?,
            ExtensionFilter::new(self.rewrite.extensions.iter().cloned()),
        ))
    }

    pub fn remote_spec(&self) -> RemoteSpec {
        RemoteSpec::new(
            self.upstream.remote.clone(),
            self.upstream.url.clone(),
            self.upstream.branch.clone(),
        )
    }

    pub fn orchestrator(&self) -> SyncOrchestrator {
        SyncOrchestrator::new(
            self.remote_spec(),
            self.upstream.integration_branch.clone(),
            self.upstream.commit_message(),
        )
    }
}
