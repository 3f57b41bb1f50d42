//! Implementation of the `wkit status` command.
//!
//! Shows change counts for every worktree. A worktree whose status cannot
//! be read (for example because its directory was deleted) is reported on
//! stderr and skipped.

use super::display::{WorktreeRow, render_status_header, render_status_row};
use super::worktree_manager;
use crate::config::Config;
use crate::context::RepoContext;
use crate::error::{Result, WkitError};
use crate::git_worktree::WorktreeStatus;

/// Status of every worktree that could be read, plus the failures.
pub struct StatusReport {
    pub entries: Vec<(WorktreeRow, WorktreeStatus)>,
    pub failures: Vec<(WorktreeRow, WkitError)>,
}

/// Collect status for all worktrees in registry order.
pub fn collect_status(ctx: &RepoContext, config: &Config) -> Result<StatusReport> {
    let manager = worktree_manager(ctx, config);
    let mut report = StatusReport {
        entries: Vec::new(),
        failures: Vec::new(),
    };

    for wt in manager.list_worktrees()? {
        let row = WorktreeRow::new(&wt, &ctx.repo_root);
        match manager.worktree_status(&wt.path) {
            Ok(status) => report.entries.push((row, status)),
            Err(e) => report.failures.push((row, e)),
        }
    }
    Ok(report)
}

/// Execute the `wkit status` command.
pub fn cmd_status(ctx: &RepoContext, config: &Config) -> Result<()> {
    let report = collect_status(ctx, config)?;

    println!("{}", render_status_header());
    for (row, status) in &report.entries {
        println!("{}", render_status_row(row, status));
    }
    for (row, err) in &report.failures {
        eprintln!("Error getting status for {}: {}", row.path, err);
    }
    Ok(())
}
