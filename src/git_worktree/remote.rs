//! Fetching from the remote and bringing a worktree up to date with main.

use crate::config::SyncStrategy;
use crate::error::{Result, WkitError};
use crate::git::run_git;
use std::path::Path;
use tracing::debug;

/// Fetch `remote` from inside `worktree_path`.
///
/// Fails early with guidance when the remote is not configured.
fn fetch_remote<P: AsRef<Path>>(worktree_path: P, remote: &str) -> Result<()> {
    let worktree_path = worktree_path.as_ref();

    let remotes = run_git(worktree_path, &["remote"])?;
    if !remotes.stdout.lines().any(|name| name.trim() == remote) {
        return Err(WkitError::CommandExecutionFailed(format!(
            "remote '{}' does not exist.\n\n\
             To fix this, either:\n\
             1. Set a different remote: wkit config set remote <name>\n\
             2. Add the remote: git remote add {} <url>",
            remote, remote
        )));
    }

    run_git(worktree_path, &["fetch", remote]).map_err(|e| {
        WkitError::CommandExecutionFailed(format!(
            "failed to fetch {}: {}\n\nMake sure the remote '{}' is accessible.",
            remote,
            e.message(),
            remote
        ))
    })?;

    Ok(())
}

/// Fetch and integrate `<remote>/<main_branch>` into the worktree's branch.
///
/// # Arguments
///
/// * `worktree_path` - Worktree to update
/// * `remote` - Remote to fetch (e.g., "origin")
/// * `main_branch` - Branch to integrate (e.g., "main")
/// * `strategy` - Merge or rebase
pub fn sync_worktree<P: AsRef<Path>>(
    worktree_path: P,
    remote: &str,
    main_branch: &str,
    strategy: SyncStrategy,
) -> Result<()> {
    let worktree_path = worktree_path.as_ref();
    fetch_remote(worktree_path, remote)?;

    let upstream = format!("{}/{}", remote, main_branch);
    let subcommand = strategy.as_str();
    debug!(worktree = %worktree_path.display(), %upstream, subcommand, "syncing worktree");

    run_git(worktree_path, &[subcommand, &upstream]).map_err(|e| {
        WkitError::CommandExecutionFailed(format!(
            "failed to {} {} into '{}': {}\n\n\
             Resolve the conflict in the worktree, or abort with: git -C {} {} --abort",
            subcommand,
            upstream,
            worktree_path.display(),
            e.message(),
            worktree_path.display(),
            subcommand
        ))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{create_test_repo, create_test_repo_with_remote, git};

    fn add_feature_worktree(repo: &Path) -> std::path::PathBuf {
        let worktree_path = repo.join("feature-wt");
        git(
            repo,
            &["worktree", "add", "-b", "feature", worktree_path.to_str().unwrap(), "main"],
        );
        worktree_path
    }

    fn commit_on_main(repo: &Path, file: &str) {
        std::fs::write(repo.join(file), "upstream change\n").unwrap();
        git(repo, &["add", file]);
        git(repo, &["commit", "-m", "Upstream change"]);
    }

    #[test]
    fn test_fetch_missing_remote() {
        let temp_dir = create_test_repo();
        let err = fetch_remote(temp_dir.path(), "nonexistent").unwrap_err();
        assert!(err.to_string().contains("does not exist"));
        assert!(matches!(err, WkitError::CommandExecutionFailed(_)));
    }

    #[test]
    fn test_sync_unknown_main_branch_reports_git_failure_once() {
        let temp_dir = create_test_repo_with_remote();
        let worktree_path = add_feature_worktree(temp_dir.path());

        let err = sync_worktree(&worktree_path, "origin", "no-such-branch", SyncStrategy::Merge)
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("failed to merge origin/no-such-branch"));
        assert_eq!(message.matches("Git command failed").count(), 1);
    }

    #[test]
    fn test_sync_with_merge() {
        let temp_dir = create_test_repo_with_remote();
        let repo = temp_dir.path();
        let worktree_path = add_feature_worktree(repo);
        commit_on_main(repo, "upstream.txt");

        sync_worktree(&worktree_path, "origin", "main", SyncStrategy::Merge).unwrap();

        assert!(worktree_path.join("upstream.txt").exists());
    }

    #[test]
    fn test_sync_with_rebase() {
        let temp_dir = create_test_repo_with_remote();
        let repo = temp_dir.path();
        let worktree_path = add_feature_worktree(repo);

        std::fs::write(worktree_path.join("feature.txt"), "feature\n").unwrap();
        git(&worktree_path, &["add", "feature.txt"]);
        git(&worktree_path, &["commit", "-m", "Feature work"]);
        commit_on_main(repo, "upstream.txt");

        sync_worktree(&worktree_path, "origin", "main", SyncStrategy::Rebase).unwrap();

        assert!(worktree_path.join("upstream.txt").exists());
        let main_head = git(repo, &["rev-parse", "main"]);
        let parent = git(&worktree_path, &["rev-parse", "HEAD~1"]);
        assert_eq!(parent, main_head);
    }
}
