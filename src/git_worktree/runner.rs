//! The read-only git commands the worktree core depends on.

use crate::error::Result;
use crate::git::run_git;
use std::path::{Path, PathBuf};

/// Source of raw git output for the parsing core.
///
/// Each method maps to one git invocation and returns its stdout untouched
/// (apart from trailing whitespace). Failures are returned as
/// `WkitError::CommandExecutionFailed` and must be propagated, not swallowed.
pub trait GitRunner {
    /// `git worktree list --porcelain`
    fn worktree_list(&self) -> Result<String>;

    /// `git status --porcelain --branch --ahead-behind`, run inside `worktree`.
    fn status(&self, worktree: &Path) -> Result<String>;

    /// `git branch --merged <main_branch>`
    fn branch_merged(&self, main_branch: &str) -> Result<String>;

    /// `git ls-remote --heads <remote>`
    fn remote_branches(&self, remote: &str) -> Result<String>;

    /// Whether `path` exists on disk.
    fn path_exists(&self, path: &Path) -> bool;
}

/// Runner that spawns the `git` binary from a fixed directory.
#[derive(Debug, Clone)]
pub struct SystemGit {
    cwd: PathBuf,
}

impl SystemGit {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }
}

impl GitRunner for SystemGit {
    fn worktree_list(&self) -> Result<String> {
        Ok(run_git(&self.cwd, &["worktree", "list", "--porcelain"])?.stdout)
    }

    fn status(&self, worktree: &Path) -> Result<String> {
        Ok(run_git(worktree, &["status", "--porcelain", "--branch", "--ahead-behind"])?.stdout)
    }

    fn branch_merged(&self, main_branch: &str) -> Result<String> {
        Ok(run_git(&self.cwd, &["branch", "--merged", main_branch])?.stdout)
    }

    fn remote_branches(&self, remote: &str) -> Result<String> {
        Ok(run_git(&self.cwd, &["ls-remote", "--heads", remote])?.stdout)
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
