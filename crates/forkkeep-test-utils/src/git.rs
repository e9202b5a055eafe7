//! Git repository fixtures driven through the `git` CLI.
//!
//! Using the real CLI (rather than the library under test) keeps fixture
//! setup independent of the code being exercised.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run `git` in `path` and return its raw output, whatever the exit status.
pub fn try_git(path: &Path, args: &[&str]) -> Output {
    Command::new("git")
        .args(args)
        .current_dir(path)
        .output()
        .unwrap_or_else(|e| panic!("failed to run `git {args:?}`: {e}"))
}

/// Run `git` in `path` and return trimmed stdout.
///
/// # Panics
/// Panics if git exits non-zero.
pub fn git(path: &Path, args: &[&str]) -> String {
    let output = try_git(path, args);
    if !output.status.success() {
        panic!(
            "`git {args:?}` failed in {}:\n{}",
            path.display(),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn configure_identity(path: &Path) {
    git(path, &["config", "user.email", "test@test.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "commit.gpgsign", "false"]);
}

/// Initialises a real git repository on `main` with one commit.
///
/// Specifically:
/// - Runs `git init`
/// - Configures `user.email`, `user.name`, and `commit.gpgsign = false`
/// - Creates `README.md` and makes an initial commit
/// - Renames the default branch to `main`
///
/// # Panics
/// Panics if any git operation fails.
pub fn real_git_repo_with_commit(path: &Path) {
    real_git_repo_with_file(path, "README.md", "# Test");
}

/// Like [`real_git_repo_with_commit`], but the initial commit holds `file`
/// with `content`.
///
/// Repositories created with different files never share a root commit, which
/// makes this the way to build histories unrelated to an [`UpstreamFork`].
pub fn real_git_repo_with_file(path: &Path, file: &str, content: &str) {
    git(path, &["init"]);
    configure_identity(path);

    fs::write(path.join(file), content)
        .unwrap_or_else(|e| panic!("real_git_repo_with_file: failed to write {file}: {e}"));

    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);
    git(path, &["branch", "-M", "main"]);
}

/// Write `content` to `file` (relative to `path`) and commit it.
///
/// Returns the new commit id.
pub fn commit_file(path: &Path, file: &str, content: &str, message: &str) -> String {
    let full = path.join(file);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&full, content).unwrap();
    git(path, &["add", file]);
    git(path, &["commit", "-m", message]);
    git(path, &["rev-parse", "HEAD"])
}

/// Parents of the commit at `rev`, most significant first.
pub fn parents_of(path: &Path, rev: &str) -> Vec<String> {
    git(path, &["rev-list", "--parents", "-n", "1", rev])
        .split_whitespace()
        .skip(1)
        .map(String::from)
        .collect()
}

/// An upstream repository and a fork cloned from it.
///
/// The fork is a plain clone (its `origin` is the upstream); the fixture does
/// **not** register an `upstream` remote, that is left to the code under test.
pub struct UpstreamFork {
    upstream: TempDir,
    fork: TempDir,
}

impl Default for UpstreamFork {
    fn default() -> Self {
        Self::new()
    }
}

impl UpstreamFork {
    /// Create an upstream on `main` with one commit and clone it as the fork.
    pub fn new() -> Self {
        let upstream = TempDir::new().unwrap();
        real_git_repo_with_commit(upstream.path());

        let fork = TempDir::new().unwrap();
        let src = upstream.path().to_string_lossy().into_owned();
        let dst = fork.path().to_string_lossy().into_owned();
        git(upstream.path(), &["clone", "--branch", "main", &src, &dst]);
        configure_identity(fork.path());

        Self { upstream, fork }
    }

    pub fn upstream_root(&self) -> &Path {
        self.upstream.path()
    }

    pub fn fork_root(&self) -> &Path {
        self.fork.path()
    }

    /// URL to register the upstream under.
    pub fn upstream_url(&self) -> String {
        self.upstream.path().to_string_lossy().into_owned()
    }

    pub fn commit_upstream(&self, file: &str, content: &str, message: &str) -> String {
        commit_file(self.upstream_root(), file, content, message)
    }

    pub fn commit_fork(&self, file: &str, content: &str, message: &str) -> String {
        commit_file(self.fork_root(), file, content, message)
    }

    /// Run git in the fork and return trimmed stdout.
    pub fn git_fork(&self, args: &[&str]) -> String {
        git(self.fork_root(), args)
    }

    /// Whether the fork has an unfinished merge.
    pub fn fork_merge_in_progress(&self) -> bool {
        self.fork_root().join(".git/MERGE_HEAD").exists()
    }
}
