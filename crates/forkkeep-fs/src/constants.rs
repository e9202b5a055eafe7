//! Fixed filesystem markers used by forkkeep.

use std::path::Path;

/// Well-known paths inside a fork checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForkPath {
    /// The fork's configuration file
    ConfigFile,
}

impl ForkPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigFile => ".forkkeep/config.toml",
        }
    }
}

impl AsRef<Path> for ForkPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl std::fmt::Display for ForkPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
