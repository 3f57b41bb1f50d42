//! Implementation of the `wkit remove` command.

use super::worktree_manager;
use crate::cli::WorktreeArg;
use crate::config::Config;
use crate::context::RepoContext;
use crate::error::{Result, WkitError};
use crate::git_worktree::remove_worktree;
use std::path::PathBuf;

/// Resolve `name` and remove that worktree, returning its path.
///
/// The main worktree cannot be removed.
pub fn remove(ctx: &RepoContext, config: &Config, name: &str) -> Result<PathBuf> {
    let path = worktree_manager(ctx, config).find_worktree_path(name)?;
    if path == ctx.repo_root {
        return Err(WkitError::UserError(format!(
            "'{}' is the main worktree and cannot be removed.",
            name
        )));
    }

    remove_worktree(&ctx.repo_root, &path)?;
    Ok(path)
}

/// Execute the `wkit remove` command.
pub fn cmd_remove(ctx: &RepoContext, config: &Config, args: WorktreeArg) -> Result<()> {
    let path = remove(ctx, config, &args.worktree)?;
    println!("✓ Removed worktree '{}' at '{}'", args.worktree, path.display());
    Ok(())
}
