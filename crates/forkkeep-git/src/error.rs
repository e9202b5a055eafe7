//! Error types for forkkeep-git

use std::path::PathBuf;

/// Result type for forkkeep-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in forkkeep-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] forkkeep_fs::Error),

    #[error("Not a git repository: {path}")]
    NotARepository { path: PathBuf },

    #[error("Remote '{name}' not found")]
    RemoteNotFound { name: String },

    #[error("Could not add remote '{name}' ({url}): {message}")]
    RemoteAddFailed {
        name: String,
        url: String,
        message: String,
    },

    #[error("Fetch of '{branch}' from '{remote}' failed: {message}")]
    FetchFailed {
        remote: String,
        branch: String,
        message: String,
    },

    #[error("Reference '{name}' not found")]
    ReferenceNotFound { name: String },

    #[error("Cannot merge while a {state} is in progress")]
    OperationInProgress { state: String },

    #[error("Refusing to merge unrelated histories: '{source_ref}' shares no commit with HEAD")]
    UnrelatedHistories { source_ref: String },

    #[error("Merge of '{source_ref}' resulted in conflicts: {}", .paths.join(", "))]
    MergeConflict {
        source_ref: String,
        paths: Vec<String>,
    },

    #[error("Merge has unresolved conflicts; resolve them before committing")]
    UnresolvedConflicts,

    #[error("Nothing to commit: no merge in progress")]
    NothingToCommit,
}
