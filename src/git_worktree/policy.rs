//! Policy deciding which worktrees are no longer needed.

use super::registry::WorktreeRecord;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// Why a worktree is considered removable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnnecessaryReason {
    /// The branch is already merged into the main branch.
    Merged,
    /// The worktree directory no longer exists on disk.
    MissingPath,
    /// The branch no longer exists on the remote.
    RemoteDeleted,
}

impl UnnecessaryReason {
    /// Stable identifier for the reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Merged => "merged",
            Self::MissingPath => "missing-path",
            Self::RemoteDeleted => "remote-deleted",
        }
    }
}

impl fmt::Display for UnnecessaryReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A worktree flagged for removal, with the first rule that matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnnecessaryWorktreeVerdict {
    pub worktree: WorktreeRecord,
    pub reason: UnnecessaryReason,
}

/// Classify worktrees as removable.
///
/// The worktree on `main_branch` is never flagged. For every other worktree
/// the first matching rule wins: merged into main, path missing on disk,
/// branch absent from the remote. Verdicts keep the input order.
///
/// `path_exists` is the only side-effecting check and is supplied by the caller.
pub fn classify_unnecessary<F>(
    worktrees: &[WorktreeRecord],
    main_branch: &str,
    merged_branches: &HashSet<String>,
    remote_branches: &HashSet<String>,
    path_exists: F,
) -> Vec<UnnecessaryWorktreeVerdict>
where
    F: Fn(&Path) -> bool,
{
    worktrees
        .iter()
        .filter(|wt| wt.branch != main_branch)
        .filter_map(|wt| {
            let reason = if merged_branches.contains(&wt.branch) {
                UnnecessaryReason::Merged
            } else if !path_exists(&wt.path) {
                UnnecessaryReason::MissingPath
            } else if !remote_branches.contains(&wt.branch) {
                UnnecessaryReason::RemoteDeleted
            } else {
                return None;
            };
            Some(UnnecessaryWorktreeVerdict {
                worktree: wt.clone(),
                reason,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn wt(path: &str, branch: &str) -> WorktreeRecord {
        WorktreeRecord {
            path: PathBuf::from(path),
            branch: branch.to_string(),
            head: "0000000".to_string(),
        }
    }

    fn set(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn reasons(verdicts: &[UnnecessaryWorktreeVerdict]) -> Vec<(&str, UnnecessaryReason)> {
        verdicts
            .iter()
            .map(|v| (v.worktree.branch.as_str(), v.reason))
            .collect()
    }

    #[test]
    fn main_branch_worktree_is_never_flagged() {
        let worktrees = vec![wt("/repo", "main")];
        // main is merged into itself, missing on disk and absent remotely
        let verdicts =
            classify_unnecessary(&worktrees, "main", &set(&["main"]), &set(&[]), |_| false);
        assert!(verdicts.is_empty());
    }

    #[test]
    fn merged_wins_over_remote_deleted() {
        let worktrees = vec![wt("/repo/wt/done", "done")];
        let verdicts =
            classify_unnecessary(&worktrees, "main", &set(&["done"]), &set(&[]), |_| true);
        assert_eq!(reasons(&verdicts), vec![("done", UnnecessaryReason::Merged)]);
    }

    #[test]
    fn merged_wins_over_missing_path() {
        let worktrees = vec![wt("/gone", "done")];
        let verdicts =
            classify_unnecessary(&worktrees, "main", &set(&["done"]), &set(&["done"]), |_| false);
        assert_eq!(reasons(&verdicts), vec![("done", UnnecessaryReason::Merged)]);
    }

    #[test]
    fn missing_path_wins_over_remote_deleted() {
        let worktrees = vec![wt("/gone", "local-only")];
        let verdicts = classify_unnecessary(&worktrees, "main", &set(&[]), &set(&[]), |_| false);
        assert_eq!(
            reasons(&verdicts),
            vec![("local-only", UnnecessaryReason::MissingPath)]
        );
    }

    #[test]
    fn branch_missing_on_remote_is_flagged() {
        let worktrees = vec![wt("/repo/wt/old", "old")];
        let verdicts =
            classify_unnecessary(&worktrees, "main", &set(&[]), &set(&["main"]), |_| true);
        assert_eq!(
            reasons(&verdicts),
            vec![("old", UnnecessaryReason::RemoteDeleted)]
        );
    }

    #[test]
    fn active_worktree_is_kept() {
        let worktrees = vec![wt("/repo/wt/active", "active")];
        let verdicts =
            classify_unnecessary(&worktrees, "main", &set(&[]), &set(&["active"]), |_| true);
        assert!(verdicts.is_empty());
    }

    #[test]
    fn verdicts_preserve_input_order() {
        let worktrees = vec![
            wt("/repo", "main"),
            wt("/repo/wt/c", "c"),
            wt("/repo/wt/keep", "keep"),
            wt("/repo/wt/a", "a"),
            wt("/missing/b", "b"),
        ];
        let existing: HashSet<PathBuf> = ["/repo", "/repo/wt/c", "/repo/wt/keep", "/repo/wt/a"]
            .iter()
            .map(PathBuf::from)
            .collect();

        let verdicts = classify_unnecessary(
            &worktrees,
            "main",
            &set(&["a"]),
            &set(&["main", "keep", "b"]),
            |p| existing.contains(p),
        );

        assert_eq!(
            reasons(&verdicts),
            vec![
                ("c", UnnecessaryReason::RemoteDeleted),
                ("a", UnnecessaryReason::Merged),
                ("b", UnnecessaryReason::MissingPath),
            ]
        );
    }

    #[test]
    fn reason_identifiers_are_stable() {
        assert_eq!(UnnecessaryReason::Merged.to_string(), "merged");
        assert_eq!(UnnecessaryReason::MissingPath.to_string(), "missing-path");
        assert_eq!(UnnecessaryReason::RemoteDeleted.as_str(), "remote-deleted");
    }
}
