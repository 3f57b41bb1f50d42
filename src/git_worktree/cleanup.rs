//! Worktree removal.

use super::registry::parse_worktree_registry;
use crate::error::{Result, WkitError};
use crate::git::run_git;
use std::path::Path;
use tracing::debug;

/// Remove a worktree with `git worktree remove --force <path>`.
///
/// Forced removal also succeeds for worktrees with uncommitted changes.
/// When the directory is already gone only this registry entry is dropped,
/// locked or not; `git worktree prune` is the fallback for git versions that
/// refuse to remove a missing worktree. The entry must be gone afterwards.
pub fn remove_worktree<P: AsRef<Path>>(repo_dir: P, worktree_path: &Path) -> Result<()> {
    let repo_dir = repo_dir.as_ref();
    let worktree_str = worktree_path.to_string_lossy();

    if worktree_path.exists() {
        run_git(repo_dir, &["worktree", "remove", "--force", &worktree_str])
            .map_err(|e| removal_failed(&worktree_str, &e))?;
        return Ok(());
    }

    debug!(worktree = %worktree_str, "worktree directory missing, dropping registry entry");
    let forced: [&str; 5] = ["worktree", "remove", "--force", "--force", &worktree_str];
    if let Err(e) = run_git(repo_dir, &forced) {
        debug!(error = %e, "targeted removal failed, pruning");
        run_git(repo_dir, &["worktree", "prune"]).map_err(|e| removal_failed(&worktree_str, &e))?;
    }

    if is_registered(repo_dir, worktree_path)? {
        return Err(WkitError::CommandExecutionFailed(format!(
            "failed to remove worktree '{}': it is still registered.\n\n\
             If it is locked, unlock it first: git worktree unlock {}",
            worktree_str, worktree_str
        )));
    }

    Ok(())
}

fn removal_failed(worktree: &str, err: &WkitError) -> WkitError {
    WkitError::CommandExecutionFailed(format!(
        "failed to remove worktree '{}': {}",
        worktree,
        err.message()
    ))
}

fn is_registered(repo_dir: &Path, worktree_path: &Path) -> Result<bool> {
    let list = run_git(repo_dir, &["worktree", "list", "--porcelain"])?;
    Ok(parse_worktree_registry(&list.stdout)
        .iter()
        .any(|wt| wt.path == worktree_path))
}
