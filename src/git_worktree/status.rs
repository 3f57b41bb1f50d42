//! Classification of `git status --porcelain --branch` output.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static TRACKING_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(ahead|behind) (\d+)\b").expect("Invalid tracking regex"));

/// Aggregate change counts for one worktree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorktreeStatus {
    /// True iff there are no modified, added, deleted, or untracked files.
    pub is_clean: bool,
    pub modified: usize,
    pub added: usize,
    pub deleted: usize,
    pub untracked: usize,
    /// Commits the branch is ahead of its upstream.
    pub ahead: usize,
    /// Commits the branch is behind its upstream.
    pub behind: usize,
}

impl Default for WorktreeStatus {
    fn default() -> Self {
        Self {
            is_clean: true,
            modified: 0,
            added: 0,
            deleted: 0,
            untracked: 0,
            ahead: 0,
            behind: 0,
        }
    }
}

impl WorktreeStatus {
    /// Short summary used in tables, e.g. `2M 1A 0D` or `Clean`.
    pub fn summary(&self) -> String {
        if self.is_clean {
            "Clean".to_string()
        } else {
            format!("{}M {}A {}D", self.modified, self.added, self.deleted)
        }
    }
}

/// Compute change counts from porcelain status text.
///
/// Each entry line is classified by its two status columns, first match wins:
/// staged `A` is added; `M` in either column is modified; `D` in either column
/// is deleted; `??` is untracked. Other codes (renames, copies, conflicts) are
/// not counted. A `##` branch line contributes `ahead N` / `behind N`.
///
/// Never fails; unparsable pieces are skipped.
pub fn compute_status(text: &str) -> WorktreeStatus {
    let mut status = WorktreeStatus::default();

    for line in text.lines() {
        if let Some(tracking) = line.strip_prefix("##") {
            apply_tracking(&mut status, tracking);
            continue;
        }

        let codes = line.as_bytes();
        if codes.len() < 2 {
            continue;
        }

        match (codes[0], codes[1]) {
            (b'A', _) => status.added += 1,
            (b'M', _) | (_, b'M') => status.modified += 1,
            (b'D', _) | (_, b'D') => status.deleted += 1,
            (b'?', b'?') => status.untracked += 1,
            _ => {}
        }
    }

    status.is_clean =
        status.modified == 0 && status.added == 0 && status.deleted == 0 && status.untracked == 0;
    status
}

fn apply_tracking(status: &mut WorktreeStatus, tracking: &str) {
    for caps in TRACKING_COUNT.captures_iter(tracking) {
        let Ok(count) = caps[2].parse::<usize>() else {
            continue;
        };
        match &caps[1] {
            "ahead" => status.ahead = count,
            _ => status.behind = count,
        }
    }
}
