//! Upstream synchronization
//!
//! Keeps the fork's integration branch current with an upstream branch while
//! always recording the integration as a dedicated merge commit.

mod orchestrator;
mod outcome;
mod remote;

pub use orchestrator::{DEFAULT_INTEGRATION_BRANCH, Stage, SyncOrchestrator};
pub use outcome::{MergeFailureKind, RemoteStatus, SyncOutcome, SyncReport};
pub use remote::{DEFAULT_REMOTE_BRANCH, DEFAULT_REMOTE_NAME, DEFAULT_REMOTE_URL, RemoteSpec};
