//! Worktree queries built on a [`GitRunner`].

use super::branch::{parse_merged_branches, parse_remote_branches};
use super::policy::{UnnecessaryWorktreeVerdict, classify_unnecessary};
use super::registry::{WorktreeRecord, parse_worktree_registry};
use super::runner::GitRunner;
use super::status::{WorktreeStatus, compute_status};
use crate::error::{Result, WkitError};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read-side worktree operations for one repository.
pub struct WorktreeManager<R: GitRunner> {
    runner: R,
    remote: String,
}

impl<R: GitRunner> WorktreeManager<R> {
    /// Create a manager that consults `remote` for remote branch lookups.
    pub fn new(runner: R, remote: impl Into<String>) -> Self {
        Self {
            runner,
            remote: remote.into(),
        }
    }

    /// List all worktrees in registry order.
    pub fn list_worktrees(&self) -> Result<Vec<WorktreeRecord>> {
        let text = self.runner.worktree_list()?;
        Ok(parse_worktree_registry(&text))
    }

    /// Compute change counts for the worktree at `path`.
    pub fn worktree_status(&self, path: &Path) -> Result<WorktreeStatus> {
        let text = self.runner.status(path)?;
        Ok(compute_status(&text))
    }

    /// Resolve a worktree by name.
    ///
    /// An exact branch match wins; otherwise the first worktree whose path
    /// contains `name` is returned.
    pub fn find_worktree_path(&self, name: &str) -> Result<PathBuf> {
        let worktrees = self.list_worktrees()?;

        if let Some(wt) = worktrees.iter().find(|wt| wt.branch == name) {
            return Ok(wt.path.clone());
        }

        worktrees
            .iter()
            .find(|wt| wt.path.to_string_lossy().contains(name))
            .map(|wt| wt.path.clone())
            .ok_or_else(|| {
                WkitError::UserError(format!(
                    "worktree '{}' not found.\n\nRun `wkit list` to see available worktrees.",
                    name
                ))
            })
    }

    /// Find worktrees that can be removed, with the reason for each.
    pub fn find_unnecessary(&self, main_branch: &str) -> Result<Vec<UnnecessaryWorktreeVerdict>> {
        let worktrees = self.list_worktrees()?;

        let merged: HashSet<String> =
            parse_merged_branches(&self.runner.branch_merged(main_branch)?)
                .into_iter()
                .collect();
        let remote: HashSet<String> =
            parse_remote_branches(&self.runner.remote_branches(&self.remote)?)
                .into_iter()
                .collect();
        debug!(
            merged = merged.len(),
            remote = remote.len(),
            "classifying {} worktrees",
            worktrees.len()
        );

        Ok(classify_unnecessary(
            &worktrees,
            main_branch,
            &merged,
            &remote,
            |path| self.runner.path_exists(path),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git_worktree::UnnecessaryReason;
    use crate::test_support::FakeGit;

    const REGISTRY: &str = "\
worktree /repo
HEAD 1111111
branch refs/heads/main

worktree /repo/.git/.wkit-worktrees/feature-login
HEAD 2222222
branch refs/heads/feature-login

worktree /repo/.git/.wkit-worktrees/main-docs
HEAD 3333333
branch refs/heads/docs
";

    fn manager(fake: FakeGit) -> WorktreeManager<FakeGit> {
        WorktreeManager::new(fake, "origin")
    }

    #[test]
    fn list_worktrees_uses_registry_order() {
        let worktrees = manager(FakeGit::with_worktrees(REGISTRY))
            .list_worktrees()
            .unwrap();
        let branches: Vec<_> = worktrees.iter().map(|w| w.branch.as_str()).collect();
        assert_eq!(branches, vec!["main", "feature-login", "docs"]);
    }

    #[test]
    fn runner_failure_is_propagated_untouched() {
        let mut fake = FakeGit::with_worktrees(REGISTRY);
        fake.failure = Some("git worktree failed (exit code 128): not a repo".to_string());

        let err = manager(fake).list_worktrees().unwrap_err();
        match err {
            WkitError::CommandExecutionFailed(msg) => {
                assert_eq!(msg, "git worktree failed (exit code 128): not a repo")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn worktree_status_classifies_runner_output() {
        let mut fake = FakeGit::default();
        fake.statuses.insert(
            PathBuf::from("/repo"),
            "## main...origin/main [behind 2]\n M src/lib.rs\n".to_string(),
        );

        let status = manager(fake).worktree_status(Path::new("/repo")).unwrap();
        assert_eq!(status.modified, 1);
        assert_eq!(status.behind, 2);
    }

    #[test]
    fn find_worktree_path_prefers_exact_branch() {
        // "main" is contained in the docs worktree path but the exact branch wins.
        let path = manager(FakeGit::with_worktrees(REGISTRY))
            .find_worktree_path("main")
            .unwrap();
        assert_eq!(path, PathBuf::from("/repo"));
    }

    #[test]
    fn find_worktree_path_falls_back_to_path_match() {
        let path = manager(FakeGit::with_worktrees(REGISTRY))
            .find_worktree_path("main-docs")
            .unwrap();
        assert_eq!(path, PathBuf::from("/repo/.git/.wkit-worktrees/main-docs"));
    }

    #[test]
    fn find_worktree_path_unknown_name_is_user_error() {
        let err = manager(FakeGit::with_worktrees(REGISTRY))
            .find_worktree_path("nope")
            .unwrap_err();
        assert!(matches!(err, WkitError::UserError(_)));
        assert!(err.to_string().contains("worktree 'nope' not found"));
    }

    #[test]
    fn find_unnecessary_combines_branch_sets() {
        let mut fake = FakeGit::with_worktrees(REGISTRY);
        fake.merged = "* main\n  feature-login\n".to_string();
        fake.remote_heads = "aaa\trefs/heads/main\nbbb\trefs/heads/feature-login\n".to_string();
        fake.existing_paths = [
            "/repo",
            "/repo/.git/.wkit-worktrees/feature-login",
            "/repo/.git/.wkit-worktrees/main-docs",
        ]
        .iter()
        .map(PathBuf::from)
        .collect();

        let verdicts = manager(fake).find_unnecessary("main").unwrap();
        let summary: Vec<_> = verdicts
            .iter()
            .map(|v| (v.worktree.branch.as_str(), v.reason))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("feature-login", UnnecessaryReason::Merged),
                ("docs", UnnecessaryReason::RemoteDeleted),
            ]
        );
    }

    #[test]
    fn find_unnecessary_reports_missing_paths() {
        let mut fake = FakeGit::with_worktrees(REGISTRY);
        fake.merged = "* main\n".to_string();
        fake.remote_heads =
            "aaa\trefs/heads/main\nbbb\trefs/heads/feature-login\nccc\trefs/heads/docs\n"
                .to_string();
        fake.existing_paths = ["/repo", "/repo/.git/.wkit-worktrees/main-docs"]
            .iter()
            .map(PathBuf::from)
            .collect();

        let verdicts = manager(fake).find_unnecessary("main").unwrap();
        assert_eq!(verdicts.len(), 1);
        assert_eq!(verdicts[0].worktree.branch, "feature-login");
        assert_eq!(verdicts[0].reason, UnnecessaryReason::MissingPath);
    }
}
