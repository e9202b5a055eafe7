//! The version-control operations the sync pipeline depends on

use crate::Result;

/// Version-control operations needed to integrate an upstream branch.
///
/// Each method maps to one externally observable git action. Implementations
/// must not consult the process working directory; the repository they act on
/// is fixed at construction.
pub trait GitOps {
    /// Names of all configured remotes.
    fn remote_names(&self) -> Result<Vec<String>>;

    /// URL of a configured remote, `None` if no such remote exists.
    fn remote_url(&self, name: &str) -> Result<Option<String>>;

    /// Register a new remote.
    fn add_remote(&mut self, name: &str, url: &str) -> Result<()>;

    /// Fetch `branch` from `remote` into the tracking ref `<remote>/<branch>`.
    fn fetch(&mut self, remote: &str, branch: &str) -> Result<()>;

    /// The checked-out branch name, or `HEAD` when detached.
    fn current_branch(&self) -> Result<String>;

    /// Merge `source_ref` into the index and working tree without committing.
    ///
    /// A merge is staged even when fast-forward would be possible. When the
    /// current branch already contains `source_ref`, nothing is staged and
    /// the call succeeds.
    fn stage_merge(&mut self, source_ref: &str) -> Result<()>;

    /// Commit the staged merge with `message`, returning the new commit id.
    fn commit_merge(&mut self, message: &str) -> Result<String>;
}
