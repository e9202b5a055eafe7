//! Fork maintenance end to end
//!
//! Drives both halves of the workflow against a real upstream/fork pair:
//! pull upstream into the integration branch, then rewrite the call sites
//! it brought in.

use forkkeep_core::{ForkConfig, RemoteStatus, SyncOutcome};
use forkkeep_fs::NormalizedPath;
use forkkeep_git::Git2Repo;
use forkkeep_test_utils::git::UpstreamFork;
use pretty_assertions::assert_eq;

const BUFFER: &str = "src/main/java/net/raphimc/thingl/resource/buffer/Buffer.java";

const UPSTREAM_BUFFER: &str = "\
package net.raphimc.thingl.resource.buffer;

public class Buffer {
    public void free() {
        GL45.gl.glDeleteBuffers(this.id);
    }
}
";

const FORK_BUFFER: &str = "\
package net.raphimc.thingl.resource.buffer;

public class Buffer {
    public void free() {
        de.florianmichael.thingl.GlCommands.get().gl.glDeleteBuffers(this.id);
    }
}
";

fn config_for(fixture: &UpstreamFork) -> ForkConfig {
    let mut config = ForkConfig::default();
    config.upstream.url = fixture.upstream_url();
    config
}

fn sync(fixture: &UpstreamFork, config: &ForkConfig) -> SyncOutcome {
    let mut repo = Git2Repo::open(NormalizedPath::new(fixture.fork_root())).unwrap();
    config.orchestrator().run(&mut repo).unwrap().outcome
}

#[test]
fn test_sync_then_rewrite_upstream_call_sites() {
    let fixture = UpstreamFork::new();
    let config = config_for(&fixture);
    let repo_root = NormalizedPath::new(fixture.fork_root());

    fixture.commit_upstream(BUFFER, UPSTREAM_BUFFER, "Add Buffer");

    let outcome = sync(&fixture, &config);
    assert!(matches!(outcome, SyncOutcome::Merged { .. }), "{outcome:?}");
    assert_eq!(
        fixture.git_fork(&["log", "-1", "--format=%s"]),
        format!("Update Upstream ({})", fixture.upstream_url())
    );

    let engine = config.rewrite_engine(&repo_root).unwrap();
    let report = engine.run(|_| {}).unwrap();
    assert_eq!(report.changed, vec![repo_root.join(BUFFER)]);
    assert_eq!(
        std::fs::read_to_string(fixture.fork_root().join(BUFFER)).unwrap(),
        FORK_BUFFER
    );

    // Nothing left to rewrite once the fork has been adapted
    assert!(engine.run(|_| {}).unwrap().is_unchanged());
}

#[test]
fn test_rewritten_files_survive_next_sync() {
    let fixture = UpstreamFork::new();
    let config = config_for(&fixture);
    let repo_root = NormalizedPath::new(fixture.fork_root());

    fixture.commit_upstream(BUFFER, UPSTREAM_BUFFER, "Add Buffer");
    sync(&fixture, &config);
    config.rewrite_engine(&repo_root).unwrap().run(|_| {}).unwrap();
    fixture.git_fork(&["commit", "-am", "Use GlCommands"]);

    fixture.commit_upstream("CHANGELOG.md", "- Buffer\n", "Changelog");
    let mut repo = Git2Repo::open(repo_root.clone()).unwrap();
    let report = config.orchestrator().run(&mut repo).unwrap();

    assert_eq!(report.remote, RemoteStatus::AlreadyPresent);
    assert!(matches!(report.outcome, SyncOutcome::Merged { .. }));
    assert_eq!(
        std::fs::read_to_string(fixture.fork_root().join(BUFFER)).unwrap(),
        FORK_BUFFER
    );
    assert!(fixture.fork_root().join("CHANGELOG.md").exists());
}

#[test]
fn test_conflicting_sync_leaves_rewrite_available() {
    let fixture = UpstreamFork::new();
    let config = config_for(&fixture);

    fixture.commit_upstream("README.md", "# ThinGL\n", "Upstream readme");
    fixture.commit_fork("README.md", "# ThinGL fork\n", "Fork readme");

    match sync(&fixture, &config) {
        SyncOutcome::MergeFailed { diagnostic, .. } => {
            assert!(diagnostic.contains("README.md"), "{diagnostic}")
        }
        other => panic!("Expected MergeFailed, got {other:?}"),
    }
    assert!(fixture.fork_merge_in_progress());

    // The rewrite does not care about repository state
    let tree = fixture.fork_root().join("src");
    std::fs::create_dir_all(&tree).unwrap();
    std::fs::write(tree.join("Shader.java"), "return GL42.gl;\n").unwrap();

    let mut config = config;
    config.rewrite.root = "src".to_string();
    let report = config
        .rewrite_engine(&NormalizedPath::new(fixture.fork_root()))
        .unwrap()
        .run(|_| {})
        .unwrap();
    assert_eq!(report.changed.len(), 1);
}
