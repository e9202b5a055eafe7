//! `git2`-backed implementation of [`GitOps`]

use git2::{Commit, ErrorCode, MergeOptions, Repository, RepositoryState};

use forkkeep_fs::NormalizedPath;

use crate::{Error, GitOps, Result};

/// A git repository opened at an explicit root.
pub struct Git2Repo {
    root: NormalizedPath,
    repo: Repository,
}

impl Git2Repo {
    /// Open the repository whose working tree is `root`.
    pub fn open(root: NormalizedPath) -> Result<Self> {
        let repo = Repository::open(root.to_native()).map_err(|e| match e.code() {
            ErrorCode::NotFound => Error::NotARepository {
                path: root.to_native(),
            },
            _ => Error::Git(e),
        })?;
        Ok(Self { root, repo })
    }

    /// Open the repository enclosing `start`, searching parent directories.
    ///
    /// The returned repository is rooted at its working tree, not at `start`.
    pub fn discover(start: &NormalizedPath) -> Result<Self> {
        let not_found = || Error::NotARepository {
            path: start.to_native(),
        };
        let repo = Repository::discover(start.to_native()).map_err(|e| match e.code() {
            ErrorCode::NotFound => not_found(),
            _ => Error::Git(e),
        })?;
        let workdir = repo.workdir().ok_or_else(not_found)?;
        let root = NormalizedPath::new(workdir.to_string_lossy().trim_end_matches(['/', '\\']));
        tracing::debug!(start = %start, root = %root, "Discovered repository");
        Ok(Self { root, repo })
    }

    /// Root of the working tree this repository was opened at.
    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    fn ensure_clean_state(&self) -> Result<()> {
        match self.repo.state() {
            RepositoryState::Clean => Ok(()),
            state => Err(Error::OperationInProgress {
                state: format!("{state:?}").to_lowercase(),
            }),
        }
    }

    fn conflicted_paths(&self) -> Result<Vec<String>> {
        let index = self.repo.index()?;
        let mut paths = Vec::new();
        for conflict in index.conflicts()? {
            let conflict = conflict?;
            if let Some(entry) = conflict.our.or(conflict.their).or(conflict.ancestor) {
                paths.push(String::from_utf8_lossy(&entry.path).into_owned());
            }
        }
        Ok(paths)
    }
}

impl GitOps for Git2Repo {
    fn remote_names(&self) -> Result<Vec<String>> {
        let remotes = self.repo.remotes()?;
        Ok(remotes.iter().flatten().map(String::from).collect())
    }

    fn remote_url(&self, name: &str) -> Result<Option<String>> {
        match self.repo.find_remote(name) {
            Ok(remote) => Ok(remote.url().map(String::from)),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn add_remote(&mut self, name: &str, url: &str) -> Result<()> {
        self.repo
            .remote(name, url)
            .map_err(|e| Error::RemoteAddFailed {
                name: name.to_string(),
                url: url.to_string(),
                message: e.message().to_string(),
            })?;
        tracing::debug!(remote = %name, url = %url, "Registered remote");
        Ok(())
    }

    fn fetch(&mut self, remote_name: &str, branch: &str) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote(remote_name)
            .map_err(|_| Error::RemoteNotFound {
                name: remote_name.to_string(),
            })?;

        let tracking = format!("refs/remotes/{remote_name}/{branch}");
        let refspec = format!("+refs/heads/{branch}:{tracking}");
        let reflog = format!("fetch {remote_name} {branch}");

        remote
            .fetch(&[refspec.as_str()], None, Some(reflog.as_str()))
            .map_err(|e| Error::FetchFailed {
                remote: remote_name.to_string(),
                branch: branch.to_string(),
                message: e.message().to_string(),
            })?;

        // libgit2 skips refspecs whose source does not exist on the remote
        if self.repo.find_reference(&tracking).is_err() {
            return Err(Error::FetchFailed {
                remote: remote_name.to_string(),
                branch: branch.to_string(),
                message: format!("couldn't find remote ref refs/heads/{branch}"),
            });
        }

        tracing::debug!(remote = %remote_name, branch = %branch, "Fetched");
        Ok(())
    }

    fn current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;

        if head.is_branch() {
            Ok(head.shorthand().unwrap_or("HEAD").to_string())
        } else {
            Ok("HEAD".to_string())
        }
    }

    fn stage_merge(&mut self, source_ref: &str) -> Result<()> {
        self.ensure_clean_state()?;

        let reference = self
            .repo
            .resolve_reference_from_short_name(source_ref)
            .map_err(|_| Error::ReferenceNotFound {
                name: source_ref.to_string(),
            })?;
        let annotated = self.repo.reference_to_annotated_commit(&reference)?;

        let (analysis, _) = self.repo.merge_analysis(&[&annotated])?;
        if analysis.is_up_to_date() {
            tracing::debug!(source = %source_ref, "Already up to date");
            return Ok(());
        }

        let head = self.repo.head()?.peel_to_commit()?.id();
        match self.repo.merge_base(head, annotated.id()) {
            Ok(_) => {}
            Err(e) if e.code() == ErrorCode::NotFound => {
                return Err(Error::UnrelatedHistories {
                    source_ref: source_ref.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        }

        // git_merge never fast-forwards, which is exactly --no-ff --no-commit
        let mut merge_opts = MergeOptions::new();
        self.repo.merge(&[&annotated], Some(&mut merge_opts), None)?;

        let paths = self.conflicted_paths()?;
        if !paths.is_empty() {
            return Err(Error::MergeConflict {
                source_ref: source_ref.to_string(),
                paths,
            });
        }

        tracing::debug!(source = %source_ref, "Merge staged");
        Ok(())
    }

    fn commit_merge(&mut self, message: &str) -> Result<String> {
        if self.repo.state() != RepositoryState::Merge {
            return Err(Error::NothingToCommit);
        }

        let mut index = self.repo.index()?;
        if index.has_conflicts() {
            return Err(Error::UnresolvedConflicts);
        }

        let mut merge_heads = Vec::new();
        self.repo.mergehead_foreach(|oid| {
            merge_heads.push(*oid);
            true
        })?;

        let mut parents = vec![self.repo.head()?.peel_to_commit()?];
        for oid in merge_heads {
            parents.push(self.repo.find_commit(oid)?);
        }
        let parent_refs: Vec<&Commit<'_>> = parents.iter().collect();

        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;
        let signature = self.repo.signature()?;

        let oid = self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parent_refs,
        )?;

        self.repo.cleanup_state()?;

        tracing::debug!(commit = %oid, parents = parent_refs.len(), "Merge committed");
        Ok(oid.to_string())
    }
}
