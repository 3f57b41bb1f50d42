//! Parsing of `git worktree list --porcelain` output.

use serde::Serialize;
use std::path::PathBuf;

/// One entry of the worktree registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorktreeRecord {
    /// Absolute path to the worktree directory.
    pub path: PathBuf,
    /// Short branch name; empty when HEAD is detached.
    pub branch: String,
    /// Full commit hash of the worktree's HEAD.
    pub head: String,
}

impl WorktreeRecord {
    fn at(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
            branch: String::new(),
            head: String::new(),
        }
    }

    /// Returns true if the worktree has no branch checked out.
    pub fn is_detached(&self) -> bool {
        self.branch.is_empty()
    }
}

/// Parse porcelain worktree listing into records, in input order.
///
/// A record starts at each `worktree <path>` line and absorbs the `HEAD` and
/// `branch` lines that follow, until a blank line or the next `worktree`
/// line. Attribute lines such as `bare`, `detached`, `locked`, or `prunable`
/// are ignored, as are attribute lines outside any record.
///
/// Never fails: empty or truncated input yields whatever records are complete
/// enough to have a path.
pub fn parse_worktree_registry(text: &str) -> Vec<WorktreeRecord> {
    let mut records = Vec::new();
    let mut current: Option<WorktreeRecord> = None;

    for line in text.lines() {
        let line = line.trim();

        if line.is_empty() {
            records.extend(current.take());
            continue;
        }

        if let Some(path) = line.strip_prefix("worktree ") {
            records.extend(current.take());
            current = Some(WorktreeRecord::at(path.trim()));
        } else if let Some(head) = line.strip_prefix("HEAD ") {
            if let Some(record) = current.as_mut() {
                record.head = head.trim().to_string();
            }
        } else if let Some(branch_ref) = line.strip_prefix("branch ") {
            if let Some(record) = current.as_mut() {
                let branch_ref = branch_ref.trim();
                record.branch = branch_ref
                    .strip_prefix("refs/heads/")
                    .unwrap_or(branch_ref)
                    .to_string();
            }
        }
    }

    records.extend(current);
    records
}
