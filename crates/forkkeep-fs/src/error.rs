//! Error types for forkkeep-fs

use std::path::PathBuf;

/// Result type for forkkeep-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in forkkeep-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The filesystem path this error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Io { path, .. } | Self::ConfigParse { path, .. } | Self::LockFailed { path } => {
                Some(path)
            }
            Self::UnsupportedFormat { .. } => None,
        }
    }
}
