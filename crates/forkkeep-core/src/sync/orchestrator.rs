//! The upstream sync pipeline
//!
//! ```text
//! RemoteCheck -> Fetch -> BranchGate -> MergeAndCommit -> Finished
//!                              \-----------------------> Finished (skipped)
//! ```
//!
//! Failures in the first three stages are fatal and surface as
//! [`Error::Stage`]. Failures while merging are contained and end the run with
//! [`SyncOutcome::MergeFailed`].

use forkkeep_git::GitOps;

use super::{MergeFailureKind, RemoteSpec, RemoteStatus, SyncOutcome, SyncReport};
use crate::{Error, Result};

pub const DEFAULT_INTEGRATION_BRANCH: &str = "main";

/// A position in the sync pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    RemoteCheck,
    Fetch { remote: RemoteStatus },
    BranchGate { remote: RemoteStatus },
    MergeAndCommit { remote: RemoteStatus },
    Finished(SyncReport),
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::RemoteCheck => "remote check",
            Self::Fetch { .. } => "fetch",
            Self::BranchGate { .. } => "branch gate",
            Self::MergeAndCommit { .. } => "merge",
            Self::Finished(_) => "finished",
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

/// Integrates an upstream branch into the fork's integration branch.
#[derive(Debug, Clone)]
pub struct SyncOrchestrator {
    remote: RemoteSpec,
    integration_branch: String,
    commit_message: String,
}

impl SyncOrchestrator {
    pub fn new(
        remote: RemoteSpec,
        integration_branch: impl Into<String>,
        commit_message: impl Into<String>,
    ) -> Self {
        Self {
            remote,
            integration_branch: integration_branch.into(),
            commit_message: commit_message.into(),
        }
    }

    pub fn remote(&self) -> &RemoteSpec {
        &self.remote
    }

    pub fn integration_branch(&self) -> &str {
        &self.integration_branch
    }

    pub fn commit_message(&self) -> &str {
        &self.commit_message
    }

    /// Drive the pipeline from [`Stage::RemoteCheck`] to completion.
    pub fn run<G: GitOps + ?Sized>(&self, git: &mut G) -> Result<SyncReport> {
        let mut stage = Stage::RemoteCheck;
        loop {
            match self.advance(git, stage)? {
                Stage::Finished(report) => return Ok(report),
                next => stage = next,
            }
        }
    }

    /// Execute `stage` and return the stage that follows it.
    ///
    /// A finished stage is returned unchanged.
    pub fn advance<G: GitOps + ?Sized>(&self, git: &mut G, stage: Stage) -> Result<Stage> {
        let name = stage.name();
        let fatal = |source| Error::Stage {
            stage: name,
            source,
        };

        match stage {
            Stage::RemoteCheck => {
                let remote = self.ensure_remote(git).map_err(fatal)?;
                Ok(Stage::Fetch { remote })
            }
            Stage::Fetch { remote } => {
                git.fetch(&self.remote.name, &self.remote.branch)
                    .map_err(fatal)?;
                tracing::info!(tracking = %self.remote.tracking_ref(), "Fetched upstream");
                Ok(Stage::BranchGate { remote })
            }
            Stage::BranchGate { remote } => {
                let branch = git.current_branch().map_err(fatal)?;
                if branch != self.integration_branch {
                    tracing::info!(
                        branch = %branch,
                        integration = %self.integration_branch,
                        "Not on the integration branch, skipping merge"
                    );
                    return Ok(Stage::Finished(SyncReport {
                        remote,
                        outcome: SyncOutcome::Skipped { branch },
                    }));
                }
                Ok(Stage::MergeAndCommit { remote })
            }
            Stage::MergeAndCommit { remote } => {
                let outcome = match self.merge_and_commit(git) {
                    Ok(commit) => {
                        tracing::info!(commit = %commit, "Upstream merged");
                        SyncOutcome::Merged { commit }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Merge failed or nothing to merge");
                        SyncOutcome::MergeFailed {
                            kind: MergeFailureKind::of(&e),
                            diagnostic: e.to_string(),
                        }
                    }
                };
                Ok(Stage::Finished(SyncReport { remote, outcome }))
            }
            finished @ Stage::Finished(_) => Ok(finished),
        }
    }

    fn ensure_remote<G: GitOps + ?Sized>(&self, git: &mut G) -> forkkeep_git::Result<RemoteStatus> {
        if git.remote_names()?.iter().any(|n| *n == self.remote.name) {
            tracing::debug!(remote = %self.remote.name, "Remote already configured");
            return Ok(RemoteStatus::AlreadyPresent);
        }

        git.add_remote(&self.remote.name, &self.remote.url)?;
        tracing::info!(remote = %self.remote.name, url = %self.remote.url, "Added remote");
        Ok(RemoteStatus::Added)
    }

    fn merge_and_commit<G: GitOps + ?Sized>(&self, git: &mut G) -> forkkeep_git::Result<String> {
        git.stage_merge(&self.remote.tracking_ref())?;
        git.commit_merge(&self.commit_message)
    }
}
