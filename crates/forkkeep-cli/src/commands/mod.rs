//! Command implementations for forkkeep-cli

pub mod diff;
pub mod rewrite;
pub mod upstream;

pub use diff::run_diff;
pub use rewrite::run_rewrite;
pub use upstream::run_upstream;
