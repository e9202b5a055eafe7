//! Filesystem layer for forkkeep
//!
//! Provides normalized paths, whole-file text I/O with atomic replacement,
//! TOML configuration loading and eligible source-file discovery.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;
pub mod walk;

pub use config::ConfigStore;
pub use constants::ForkPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use walk::{ExtensionFilter, FileFilter, eligible_files};
