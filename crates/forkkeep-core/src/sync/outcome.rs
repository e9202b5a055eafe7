//! Result types of an upstream sync run

use serde::Serialize;

/// What the remote check found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteStatus {
    /// The remote was missing and has been registered
    Added,
    /// A remote with that name was already configured and was left untouched
    AlreadyPresent,
}

/// Why a staged merge did not produce a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeFailureKind {
    /// Upstream changes conflict with the fork
    Conflict,
    /// Upstream had no new history
    NothingToMerge,
    /// Upstream shares no commit with the fork, usually a misconfigured remote
    UnrelatedHistories,
    /// Any other failure while staging or committing
    Other,
}

impl MergeFailureKind {
    pub fn of(error: &forkkeep_git::Error) -> Self {
        match error {
            forkkeep_git::Error::MergeConflict { .. } | forkkeep_git::Error::UnresolvedConflicts => {
                Self::Conflict
            }
            forkkeep_git::Error::NothingToCommit => Self::NothingToMerge,
            forkkeep_git::Error::UnrelatedHistories { .. } => Self::UnrelatedHistories,
            _ => Self::Other,
        }
    }
}

/// How a sync run ended. None of these is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SyncOutcome {
    /// Upstream was merged and committed
    Merged { commit: String },
    /// The checked-out branch is not the integration branch
    Skipped { branch: String },
    /// Staging or committing the merge failed; the working tree is left as
    /// the merge left it
    MergeFailed {
        kind: MergeFailureKind,
        diagnostic: String,
    },
}

/// Everything a completed sync run reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub remote: RemoteStatus,
    #[serde(flatten)]
    pub outcome: SyncOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_kind_classification() {
        let conflict = forkkeep_git::Error::MergeConflict {
            source_ref: "upstream/main".into(),
            paths: vec!["README.md".into()],
        };
        assert_eq!(MergeFailureKind::of(&conflict), MergeFailureKind::Conflict);
        assert_eq!(
            MergeFailureKind::of(&forkkeep_git::Error::UnresolvedConflicts),
            MergeFailureKind::Conflict
        );
        assert_eq!(
            MergeFailureKind::of(&forkkeep_git::Error::NothingToCommit),
            MergeFailureKind::NothingToMerge
        );
        assert_eq!(
            MergeFailureKind::of(&forkkeep_git::Error::UnrelatedHistories {
                source_ref: "upstream/main".into()
            }),
            MergeFailureKind::UnrelatedHistories
        );
        assert_eq!(
            MergeFailureKind::of(&forkkeep_git::Error::OperationInProgress {
                state: "rebase".into()
            }),
            MergeFailureKind::Other
        );
    }
}
