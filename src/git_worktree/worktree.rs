//! Worktree creation.

use super::branch::branch_exists;
use crate::error::{Result, WkitError};
use crate::git::run_git;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result of creating a worktree.
#[derive(Debug, Clone)]
pub struct WorktreeInfo {
    /// Path the worktree was created at.
    pub path: PathBuf,
    /// Branch checked out in the worktree.
    pub branch: String,
    /// Whether the branch was created for this worktree.
    pub created_branch: bool,
}

/// Create a worktree for `branch` at `worktree_path`.
///
/// An existing local branch is checked out as-is. Otherwise a new branch is
/// created from `base_ref` (typically `origin/main`).
///
/// # Arguments
///
/// * `repo_dir` - Directory inside the repository to run git from
/// * `branch` - Branch to check out or create
/// * `worktree_path` - Where the worktree should live
/// * `base_ref` - Start point for a newly created branch
///
/// # Returns
///
/// * `Ok(WorktreeInfo)` - Worktree created
/// * `Err(WkitError::CommandExecutionFailed)` - git refused (exit code 3)
pub fn add_worktree<P: AsRef<Path>>(
    repo_dir: P,
    branch: &str,
    worktree_path: &Path,
    base_ref: &str,
) -> Result<WorktreeInfo> {
    let repo_dir = repo_dir.as_ref();
    let worktree_str = worktree_path.to_string_lossy();

    if let Some(parent) = worktree_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(repo_dir.join(parent)).map_err(|e| {
            WkitError::UserError(format!(
                "failed to create worktrees directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let created_branch = !branch_exists(repo_dir, branch)?;
    let args: Vec<&str> = if created_branch {
        debug!(branch, base_ref, "creating branch for new worktree");
        vec!["worktree", "add", "-b", branch, &worktree_str, base_ref]
    } else {
        vec!["worktree", "add", &worktree_str, branch]
    };

    run_git(repo_dir, &args).map_err(|e| {
        WkitError::CommandExecutionFailed(format!(
            "failed to create worktree at '{}' for branch '{}': {}",
            worktree_str,
            branch,
            e.message()
        ))
    })?;

    Ok(WorktreeInfo {
        path: worktree_path.to_path_buf(),
        branch: branch.to_string(),
        created_branch,
    })
}
