//! Error types for forkkeep-core

/// Result type for forkkeep-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in forkkeep-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The rewrite pattern is not a valid regular expression
    #[error("Invalid rewrite pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// The replacement would be matched again on the next run
    #[error(
        "Replacement '{replacement}' matches pattern '{pattern}'; the rewrite would not be idempotent"
    )]
    NonIdempotentRule {
        pattern: String,
        replacement: String,
    },

    /// A sync stage failed in a way that stops the pipeline
    #[error("{stage} failed: {source}")]
    Stage {
        stage: &'static str,
        source: forkkeep_git::Error,
    },

    /// Filesystem error from forkkeep-fs
    #[error(transparent)]
    Fs(#[from] forkkeep_fs::Error),
}
