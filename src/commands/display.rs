//! Shared formatting for command output.

use crate::git_worktree::{WorktreeRecord, WorktreeStatus};
use serde::Serialize;
use std::path::Path;

/// Label shown for the main worktree.
pub const ROOT_LABEL: &str = "(root)";

/// Number of commit hash characters shown in tables.
const SHORT_HEAD_LEN: usize = 12;

/// One worktree as shown by `wkit list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorktreeRow {
    pub path: String,
    pub branch: String,
    pub head: String,
}

impl WorktreeRow {
    pub fn new(record: &WorktreeRecord, repo_root: &Path) -> Self {
        Self {
            path: make_relative(&record.path, repo_root),
            branch: record.branch.clone(),
            head: record.head.clone(),
        }
    }
}

/// Show `path` relative to `repo_root`, or [`ROOT_LABEL`] for the root itself.
///
/// Paths outside the repository are shown as-is.
pub fn make_relative(path: &Path, repo_root: &Path) -> String {
    match path.strip_prefix(repo_root) {
        Ok(rel) if rel.as_os_str().is_empty() => ROOT_LABEL.to_string(),
        Ok(rel) => rel.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}

fn short_head(head: &str) -> &str {
    head.get(..SHORT_HEAD_LEN).unwrap_or(head)
}

fn branch_label(branch: &str) -> &str {
    if branch.is_empty() { "(detached)" } else { branch }
}

/// Render the `wkit list` table.
pub fn render_list_table(rows: &[WorktreeRow]) -> String {
    let mut out = format!("{:<30} {:<20} {:<12}\n", "PATH", "BRANCH", "HEAD");
    out.push_str(&"-".repeat(65));
    out.push('\n');

    for row in rows {
        out.push_str(&format!(
            "{:<30} {:<20} {:<12}\n",
            row.path,
            branch_label(&row.branch),
            short_head(&row.head)
        ));
    }
    out
}

/// Header of the `wkit status` table.
pub fn render_status_header() -> String {
    format!(
        "{:<30} {:<20} {:<12} {:<15}\n{}",
        "PATH",
        "BRANCH",
        "HEAD",
        "STATUS",
        "-".repeat(80)
    )
}

/// One `wkit status` row, followed by detail lines for a dirty or diverged worktree.
pub fn render_status_row(row: &WorktreeRow, status: &WorktreeStatus) -> String {
    let mut out = format!(
        "{:<30} {:<20} {:<12} {:<15}",
        row.path,
        branch_label(&row.branch),
        short_head(&row.head),
        status.summary()
    );

    let details = [
        (status.modified, "modified"),
        (status.added, "added"),
        (status.deleted, "deleted"),
        (status.untracked, "untracked"),
    ];
    for (count, kind) in details {
        if count > 0 {
            out.push_str(&format!("\n  {} {} file(s)", count, kind));
        }
    }

    if status.ahead > 0 || status.behind > 0 {
        out.push_str(&format!(
            "\n  ahead {}, behind {}",
            status.ahead, status.behind
        ));
    }
    out
}
