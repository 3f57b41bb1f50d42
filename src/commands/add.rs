//! Implementation of the `wkit add` command.
//!
//! Creates a worktree for a branch, copies configured local files into it,
//! and prints the path for a shell wrapper to switch to.

use crate::cli::AddArgs;
use crate::config::{Config, copy_files_to_worktree};
use crate::context::RepoContext;
use crate::error::Result;
use crate::git::prefix_from_root;
use crate::git_worktree::{WorktreeInfo, add_worktree};
use std::path::{Path, PathBuf};
use tracing::warn;

/// What `wkit add` did.
#[derive(Debug)]
pub struct AddOutcome {
    pub worktree: WorktreeInfo,
    /// Relative paths of files copied from the main worktree.
    pub copied_files: Vec<String>,
}

/// Create the worktree and copy configured files into it.
pub fn add(ctx: &RepoContext, config: &Config, args: &AddArgs) -> Result<AddOutcome> {
    let provided = args.path.as_deref().map(|p| absolutize(p, &ctx.cwd));
    let worktree_path =
        config.resolve_worktree_path(&args.branch, provided.as_deref(), &ctx.repo_root);

    let base = args.base_branch.as_deref().unwrap_or(&config.main_branch);
    let base_ref = format!("{}/{}", config.remote, base);

    let worktree = add_worktree(&ctx.repo_root, &args.branch, &worktree_path, &base_ref)?;

    let copied_files = match copy_files_to_worktree(&config.copy_files, &ctx.repo_root, &worktree.path) {
        Ok(files) => files,
        Err(e) => {
            warn!(error = %e, "failed to copy files into new worktree");
            Vec::new()
        }
    };

    Ok(AddOutcome {
        worktree,
        copied_files,
    })
}

/// The line printed for the shell wrapper: the worktree path, suffixed with
/// `:<prefix>` when wkit was run from a subdirectory.
pub fn switch_target(worktree_path: &Path, prefix: &str) -> String {
    if prefix.is_empty() {
        worktree_path.display().to_string()
    } else {
        format!("{}:{}", worktree_path.display(), prefix)
    }
}

/// Execute the `wkit add` command.
pub fn cmd_add(ctx: &RepoContext, config: &Config, args: AddArgs) -> Result<()> {
    let outcome = add(ctx, config, &args)?;

    println!(
        "✓ Created worktree for branch '{}' at '{}'",
        outcome.worktree.branch,
        outcome.worktree.path.display()
    );
    if !outcome.copied_files.is_empty() {
        println!("✓ Copied files: {}", outcome.copied_files.join(", "));
    }

    if !args.no_switch {
        let prefix = prefix_from_root(&ctx.cwd).unwrap_or_else(|e| {
            warn!(error = %e, "could not determine subdirectory prefix");
            String::new()
        });
        println!("{}", switch_target(&outcome.worktree.path, &prefix));
    }

    Ok(())
}

fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
