// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::error::{GitError, HlError, Result};
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository exposing what the linter reads.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            HlError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open the repository containing `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                HlError::Git(GitError::NotARepository)
            } else {
                HlError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        Ok(Self { inner: repo })
    }

    /// Get the git directory path (.git).
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }

    /// Directory git runs hooks from: `core.hooksPath` when set (relative
    /// paths resolve against the work tree), else the shared `hooks` dir.
    pub fn hooks_dir(&self) -> Result<PathBuf> {
        let config = self.inner.config().map_err(|e| {
            HlError::Git(GitError::OpenFailed {
                message: format!("Failed to read git config: {}", e.message()),
            })
        })?;

        match config.get_path("core.hooksPath") {
            Ok(path) if path.is_absolute() => Ok(path),
            Ok(path) => {
                let base = self.inner.workdir().unwrap_or_else(|| self.inner.path());
                Ok(base.join(path))
            }
            Err(_) => Ok(self.inner.commondir().join("hooks")),
        }
    }

    fn get_commit(&self, reference: &str) -> Result<git2::Commit<'_>> {
        let obj = self.inner.revparse_single(reference).map_err(|e| {
            HlError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        obj.peel_to_commit().map_err(|e| {
            HlError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })
    }

    /// SHA and message of the commit `reference` points to.
    pub fn commit_message(&self, reference: &str) -> Result<(String, String)> {
        let commit = self.get_commit(reference)?;
        Ok((commit.id().to_string(), message_of(&commit)))
    }

    /// SHA and message of every commit reachable from `to` but not `from`,
    /// newest first.
    pub fn commits_in_range(&self, range: &str) -> Result<Vec<(String, String)>> {
        if range.contains("...") {
            return Err(HlError::Git(GitError::InvalidReference {
                reference: format!(
                    "{}: symmetric ranges (a...b) are not supported, use a..b",
                    range
                ),
            }));
        }

        let Some((from, to)) = range.split_once("..") else {
            return Ok(vec![self.commit_message(range)?]);
        };
        let to = if to.is_empty() { "HEAD" } else { to };

        let walk_err = |command: &str, e: git2::Error| {
            HlError::Git(GitError::CommandFailed {
                command: command.to_string(),
                message: e.message().to_string(),
            })
        };

        let mut revwalk = self.inner.revwalk().map_err(|e| walk_err("revwalk", e))?;
        revwalk
            .push(self.get_commit(to)?.id())
            .map_err(|e| walk_err("revwalk.push", e))?;
        revwalk
            .hide(self.get_commit(from)?.id())
            .map_err(|e| walk_err("revwalk.hide", e))?;

        let mut commits = Vec::new();
        for oid in revwalk {
            let oid = oid.map_err(|e| walk_err("revwalk", e))?;
            let commit = self.inner.find_commit(oid).map_err(|e| {
                HlError::Git(GitError::InvalidReference {
                    reference: format!("{}: {}", oid, e.message()),
                })
            })?;
            commits.push((oid.to_string(), message_of(&commit)));
        }

        tracing::debug!("{} commits in range {}", commits.len(), range);
        Ok(commits)
    }
}

/// Commit message, with invalid UTF-8 replaced rather than dropped.
fn message_of(commit: &git2::Commit<'_>) -> String {
    String::from_utf8_lossy(commit.message_bytes()).into_owned()
}

/// Open the repository from the current directory.
pub fn open_repo() -> Result<Repository> {
    Repository::open_current()
}
