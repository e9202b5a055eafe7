//! SyncOrchestrator against real repositories

use forkkeep_core::{
    MergeFailureKind, RemoteSpec, RemoteStatus, SyncOrchestrator, SyncOutcome,
};
use forkkeep_fs::NormalizedPath;
use forkkeep_git::{Git2Repo, GitOps};
use forkkeep_test_utils::git::{UpstreamFork, parents_of, real_git_repo_with_file};
use pretty_assertions::assert_eq;

const MESSAGE: &str = "Update Upstream (https://github.com/RaphiMC/ThinGL)";

fn orchestrator_for(fixture: &UpstreamFork) -> SyncOrchestrator {
    SyncOrchestrator::new(
        RemoteSpec::new("upstream", fixture.upstream_url(), "main"),
        "main",
        MESSAGE,
    )
}

fn open(fixture: &UpstreamFork) -> Git2Repo {
    Git2Repo::open(NormalizedPath::new(fixture.fork_root())).unwrap()
}

#[test]
fn test_merges_upstream_with_dedicated_commit() {
    let fixture = UpstreamFork::new();
    let fork_head = fixture.git_fork(&["rev-parse", "HEAD"]);
    let upstream_head =
        fixture.commit_upstream("src/Shader.java", "class Shader {}\n", "Add Shader");

    let report = orchestrator_for(&fixture).run(&mut open(&fixture)).unwrap();

    assert_eq!(report.remote, RemoteStatus::Added);
    let commit = match report.outcome {
        SyncOutcome::Merged { commit } => commit,
        other => panic!("Expected Merged, got {other:?}"),
    };
    assert_eq!(fixture.git_fork(&["rev-parse", "HEAD"]), commit);
    // Fast-forward was possible, a merge commit was still created
    assert_eq!(
        parents_of(fixture.fork_root(), "HEAD"),
        vec![fork_head, upstream_head]
    );
    assert_eq!(fixture.git_fork(&["log", "-1", "--format=%s"]), MESSAGE);
}

#[test]
fn test_existing_remote_url_not_changed() {
    let fixture = UpstreamFork::new();
    fixture.git_fork(&["remote", "add", "upstream", &fixture.upstream_url()]);

    let orchestrator = SyncOrchestrator::new(
        RemoteSpec::new("upstream", "https://example.com/other.git", "main"),
        "main",
        MESSAGE,
    );
    let mut repo = open(&fixture);
    let report = orchestrator.run(&mut repo).unwrap();

    assert_eq!(report.remote, RemoteStatus::AlreadyPresent);
    assert_eq!(
        repo.remote_url("upstream").unwrap(),
        Some(fixture.upstream_url())
    );
}

#[test]
fn test_feature_branch_fetches_but_never_merges() {
    let fixture = UpstreamFork::new();
    fixture.git_fork(&["checkout", "-b", "feature/gl-commands"]);
    let fork_head = fixture.git_fork(&["rev-parse", "HEAD"]);
    let upstream_head =
        fixture.commit_upstream("src/Shader.java", "class Shader {}\n", "Add Shader");

    let report = orchestrator_for(&fixture).run(&mut open(&fixture)).unwrap();

    assert_eq!(
        report.outcome,
        SyncOutcome::Skipped {
            branch: "feature/gl-commands".into()
        }
    );
    assert_eq!(
        fixture.git_fork(&["rev-parse", "refs/remotes/upstream/main"]),
        upstream_head
    );
    assert_eq!(fixture.git_fork(&["rev-parse", "HEAD"]), fork_head);
    assert!(!fixture.fork_merge_in_progress());
}

#[test]
fn test_conflicting_history_is_contained() {
    let fixture = UpstreamFork::new();
    let fork_head = fixture.commit_fork("README.md", "# ThinGL fork\n", "Fork readme");
    fixture.commit_upstream("README.md", "# ThinGL\n", "Upstream readme");

    let report = orchestrator_for(&fixture).run(&mut open(&fixture)).unwrap();

    match report.outcome {
        SyncOutcome::MergeFailed { kind, diagnostic } => {
            assert_eq!(kind, MergeFailureKind::Conflict);
            assert!(diagnostic.contains("README.md"), "{diagnostic}");
        }
        other => panic!("Expected MergeFailed, got {other:?}"),
    }
    assert_eq!(fixture.git_fork(&["rev-parse", "HEAD"]), fork_head);
    // Left for manual resolution
    assert!(fixture.fork_merge_in_progress());
}

#[test]
fn test_no_new_upstream_history() {
    let fixture = UpstreamFork::new();
    let fork_head = fixture.git_fork(&["rev-parse", "HEAD"]);

    let report = orchestrator_for(&fixture).run(&mut open(&fixture)).unwrap();

    assert!(matches!(
        report.outcome,
        SyncOutcome::MergeFailed {
            kind: MergeFailureKind::NothingToMerge,
            ..
        }
    ));
    assert_eq!(fixture.git_fork(&["rev-parse", "HEAD"]), fork_head);
}

#[test]
fn test_second_run_after_merge_has_nothing_to_merge() {
    let fixture = UpstreamFork::new();
    fixture.commit_upstream("src/Shader.java", "class Shader {}\n", "Add Shader");
    let orchestrator = orchestrator_for(&fixture);

    let first = orchestrator.run(&mut open(&fixture)).unwrap();
    let second = orchestrator.run(&mut open(&fixture)).unwrap();

    assert!(matches!(first.outcome, SyncOutcome::Merged { .. }));
    assert_eq!(second.remote, RemoteStatus::AlreadyPresent);
    assert!(matches!(
        second.outcome,
        SyncOutcome::MergeFailed {
            kind: MergeFailureKind::NothingToMerge,
            ..
        }
    ));
}

#[test]
fn test_unreachable_upstream_is_fatal() {
    let fixture = UpstreamFork::new();
    let missing = fixture.fork_root().join("missing-upstream");
    let orchestrator = SyncOrchestrator::new(
        RemoteSpec::new("upstream", missing.to_string_lossy(), "main"),
        "main",
        MESSAGE,
    );

    let err = orchestrator.run(&mut open(&fixture)).unwrap_err();
    assert!(err.to_string().starts_with("fetch failed"), "{err}");
}

#[test]
fn test_existing_remote_with_unrelated_history_is_not_merged() {
    let fixture = UpstreamFork::new();
    let fork_head = fixture.git_fork(&["rev-parse", "HEAD"]);
    let foreign = tempfile::TempDir::new().unwrap();
    real_git_repo_with_file(foreign.path(), "Foreign.java", "class Foreign {}\n");
    fixture.git_fork(&["remote", "add", "upstream", &foreign.path().to_string_lossy()]);

    let report = orchestrator_for(&fixture).run(&mut open(&fixture)).unwrap();

    assert_eq!(report.remote, RemoteStatus::AlreadyPresent);
    match report.outcome {
        SyncOutcome::MergeFailed { kind, diagnostic } => {
            assert_eq!(kind, MergeFailureKind::UnrelatedHistories);
            assert!(diagnostic.contains("unrelated histories"), "{diagnostic}");
        }
        other => panic!("Expected MergeFailed, got {other:?}"),
    }
    assert_eq!(fixture.git_fork(&["rev-parse", "HEAD"]), fork_head);
    assert!(!fixture.fork_merge_in_progress());
}
