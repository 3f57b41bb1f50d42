//! Implementation of the `wkit switch` command.
//!
//! wkit cannot change the parent shell's directory, so it prints the target
//! path and a shell wrapper does the `cd`.

use super::worktree_manager;
use crate::cli::WorktreeArg;
use crate::config::Config;
use crate::context::RepoContext;
use crate::error::Result;

/// Execute the `wkit switch` command.
pub fn cmd_switch(ctx: &RepoContext, config: &Config, args: WorktreeArg) -> Result<()> {
    let path = worktree_manager(ctx, config).find_worktree_path(&args.worktree)?;
    println!("{}", path.display());
    Ok(())
}
