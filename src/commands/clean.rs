//! Implementation of the `wkit clean` command.
//!
//! Finds worktrees that are no longer needed (branch merged into main,
//! directory missing, or branch gone from the remote), asks for confirmation
//! unless `--force` or `auto_cleanup` is set, then removes them one by one.
//! A failed removal is reported and the rest still proceed.

use super::display::make_relative;
use super::worktree_manager;
use crate::cli::CleanArgs;
use crate::config::Config;
use crate::context::RepoContext;
use crate::error::{Result, WkitError};
use crate::git_worktree::{UnnecessaryWorktreeVerdict, remove_worktree};
use inquire::{Confirm, InquireError};
use std::path::PathBuf;
use tracing::warn;

/// Outcome of removing the flagged worktrees.
#[derive(Debug, Default)]
pub struct CleanupResult {
    pub removed: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, WkitError)>,
}

/// Remove each flagged worktree, continuing past failures.
pub fn remove_unnecessary(
    ctx: &RepoContext,
    verdicts: &[UnnecessaryWorktreeVerdict],
) -> CleanupResult {
    let mut result = CleanupResult::default();

    for verdict in verdicts {
        let path = &verdict.worktree.path;
        match remove_worktree(&ctx.repo_root, path) {
            Ok(()) => result.removed.push(path.clone()),
            Err(e) => {
                warn!(worktree = %path.display(), error = %e, "failed to remove worktree");
                result.failed.push((path.clone(), e));
            }
        }
    }
    result
}

/// Whether removal needs an interactive confirmation.
pub fn needs_confirmation(args: &CleanArgs, config: &Config) -> bool {
    !(args.force || config.auto_cleanup)
}

/// Execute the `wkit clean` command.
pub fn cmd_clean(ctx: &RepoContext, config: &Config, args: CleanArgs) -> Result<()> {
    let verdicts = worktree_manager(ctx, config).find_unnecessary(&config.main_branch)?;

    if verdicts.is_empty() {
        println!("No unnecessary worktrees found.");
        return Ok(());
    }

    println!("Found {} unnecessary worktree(s):", verdicts.len());
    for verdict in &verdicts {
        let branch = if verdict.worktree.is_detached() {
            "(detached)"
        } else {
            verdict.worktree.branch.as_str()
        };
        println!(
            "  {} [{}] - {}",
            make_relative(&verdict.worktree.path, &ctx.repo_root),
            branch,
            verdict.reason
        );
    }

    if needs_confirmation(&args, config) && !confirm_removal()? {
        println!("Cancelled.");
        return Ok(());
    }

    let result = remove_unnecessary(ctx, &verdicts);
    for path in &result.removed {
        println!("✓ Removed worktree at '{}'", path.display());
    }
    for (path, err) in &result.failed {
        eprintln!("Error removing worktree {}: {}", path.display(), err);
    }

    Ok(())
}

fn confirm_removal() -> Result<bool> {
    let answer = Confirm::new("Remove these worktrees?")
        .with_default(false)
        .prompt();

    match answer {
        Ok(confirmed) => Ok(confirmed),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(false),
        Err(e) => Err(WkitError::UserError(format!(
            "cannot ask for confirmation: {}. Use --force to remove without asking.",
            e
        ))),
    }
}
