//! Implementation of the `wkit sync` command.

use super::worktree_manager;
use crate::cli::SyncArgs;
use crate::config::{Config, SyncStrategy};
use crate::context::RepoContext;
use crate::error::{Result, WkitError};
use crate::git_worktree::sync_worktree;
use std::path::{Path, PathBuf};

/// `--rebase` wins; otherwise the configured default applies.
pub fn effective_strategy(args: &SyncArgs, config: &Config) -> SyncStrategy {
    if args.rebase {
        SyncStrategy::Rebase
    } else {
        config.default_sync_strategy
    }
}

/// The worktree to sync: the named one, or the current directory when it is
/// the top of a worktree.
pub fn resolve_target(ctx: &RepoContext, config: &Config, name: Option<&str>) -> Result<PathBuf> {
    let manager = worktree_manager(ctx, config);
    if let Some(name) = name {
        return manager.find_worktree_path(name);
    }

    let cwd = canonical(&ctx.cwd);
    manager
        .list_worktrees()?
        .into_iter()
        .map(|wt| wt.path)
        .find(|path| canonical(path) == cwd)
        .ok_or_else(|| {
            WkitError::UserError(
                "current directory is not a worktree.\n\n\
                 Run from the top of a worktree or pass its name: wkit sync <worktree>"
                    .to_string(),
            )
        })
}

/// Execute the `wkit sync` command.
pub fn cmd_sync(ctx: &RepoContext, config: &Config, args: SyncArgs) -> Result<()> {
    let target = resolve_target(ctx, config, args.worktree.as_deref())?;
    let strategy = effective_strategy(&args, config);

    println!(
        "Syncing worktree '{}' with {} branch using {}...",
        target.display(),
        config.main_branch,
        strategy.as_str()
    );
    sync_worktree(&target, &config.remote, &config.main_branch, strategy)?;
    println!("✓ Successfully synced worktree '{}'", target.display());

    Ok(())
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
