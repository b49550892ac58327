use anyhow::{Context, Result};
use git2::{BranchType, Status, StatusOptions};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use super::GitRepo;

/// Diff status of a staged file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Added,
    Modified,
    Deleted,
    Renamed,
}

/// A file staged for the next commit: repository-relative path plus its index
/// status. Recomputed from the index on every invocation, never persisted.
#[derive(Debug, Clone)]
pub struct StagedFile {
    pub path: PathBuf,
    pub status: StageStatus,
}

impl StagedFile {
    /// Deleted files have no content to inspect.
    pub fn is_deleted(&self) -> bool {
        self.status == StageStatus::Deleted
    }
}

impl GitRepo {
    /// Files currently staged for commit, with their index status.
    pub fn staged_files(&self) -> Result<Vec<StagedFile>> {
        let mut status_opts = StatusOptions::new();
        status_opts.include_ignored(false);
        status_opts.include_untracked(false);

        let statuses = self
            .repo
            .statuses(Some(&mut status_opts))
            .context("Failed to read repository status")?;

        let mut files = Vec::new();
        for entry in statuses.iter() {
            let status = entry.status();
            let stage_status = if status.contains(Status::INDEX_NEW) {
                StageStatus::Added
            } else if status.contains(Status::INDEX_DELETED) {
                StageStatus::Deleted
            } else if status.contains(Status::INDEX_RENAMED) {
                StageStatus::Renamed
            } else if status.intersects(Status::INDEX_MODIFIED | Status::INDEX_TYPECHANGE) {
                StageStatus::Modified
            } else {
                continue;
            };

            if let Some(path) = entry.path() {
                files.push(StagedFile {
                    path: PathBuf::from(path),
                    status: stage_status,
                });
            }
        }

        Ok(files)
    }

    /// Paths with any uncommitted change (staged or not), for the dirty-tree
    /// listing in the reminder check.
    pub fn changed_paths(&self) -> Result<Vec<String>> {
        let mut status_opts = StatusOptions::new();
        status_opts.include_ignored(false);
        status_opts.include_untracked(true);

        let statuses = self
            .repo
            .statuses(Some(&mut status_opts))
            .context("Failed to read repository status")?;

        let mut paths = Vec::new();
        for entry in statuses.iter() {
            if let Some(path) = entry.path() {
                paths.push(path.to_string());
            }
        }

        Ok(paths)
    }

    /// Whether the working tree has no uncommitted changes.
    pub fn is_working_tree_clean(&self) -> Result<bool> {
        Ok(self.changed_paths()?.is_empty())
    }

    /// Add a workdir-relative path to the index and persist it. Used by the
    /// gitignore auditor after rewriting the ignore-file.
    pub fn stage_path(&self, path: &Path) -> Result<()> {
        let mut index = self.repo.index().context("Failed to open repository index")?;
        index
            .add_path(path)
            .with_context(|| format!("Failed to stage {}", path.display()))?;
        index.write().context("Failed to write repository index")?;
        Ok(())
    }

    /// Timestamp of the most recent commit on HEAD, or `None` on an unborn
    /// branch (recency checks are skipped in that case).
    pub fn last_commit_time(&self) -> Option<SystemTime> {
        let head = self.repo.head().ok()?;
        let commit = head.peel_to_commit().ok()?;
        let seconds = commit.time().seconds();
        if seconds < 0 {
            return None;
        }
        Some(UNIX_EPOCH + Duration::from_secs(seconds as u64))
    }

    /// Number of commits the current branch trails its upstream.
    ///
    /// Best effort: fetches the remote first so the count reflects current
    /// remote state, but an absent upstream, a detached HEAD, or any network
    /// failure yields `None` without surfacing an error.
    pub fn commits_behind_upstream(&self) -> Option<usize> {
        let head = self.repo.head().ok()?;
        if !head.is_branch() {
            return None;
        }

        let branch_name = head.shorthand()?.to_string();
        self.fetch_upstream_remote(head.name()?, &branch_name);

        let branch = self.repo.find_branch(&branch_name, BranchType::Local).ok()?;
        let upstream = branch.upstream().ok()?;

        let local_oid = branch.get().target()?;
        let upstream_oid = upstream.get().target()?;

        let (_ahead, behind) = self.repo.graph_ahead_behind(local_oid, upstream_oid).ok()?;
        Some(behind)
    }

    /// Fetch the branch's configured remote, swallowing every failure. Offline
    /// operation must stay silent.
    fn fetch_upstream_remote(&self, refname: &str, branch_name: &str) {
        let Ok(remote_buf) = self.repo.branch_upstream_remote(refname) else {
            return;
        };
        let Some(remote_name) = remote_buf.as_str() else {
            return;
        };
        let Ok(mut remote) = self.repo.find_remote(remote_name) else {
            return;
        };
        if let Err(err) = remote.fetch(&[branch_name], None, None) {
            tracing::debug!("upstream fetch skipped: {err}");
        }
    }
}
