//! Command implementations for wkit.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every handler receives the resolved [`RepoContext`] and
//! the effective [`Config`] explicitly, so handlers never depend on the
//! process working directory.

mod add;
mod clean;
mod config_cmd;
mod display;
mod list;
mod remove;
mod root;
mod status;
mod switch;
mod sync;

use crate::cli::Command;
use crate::config::{Config, ConfigPaths};
use crate::context::RepoContext;
use crate::error::{Result, WkitError};
use crate::git_worktree::{SystemGit, WorktreeManager};
use std::env;
use tracing::debug;

/// Dispatch a command to its implementation.
///
/// `config` subcommands work outside a repository; everything else resolves
/// the repository first and fails with a user error when there is none.
pub fn dispatch(command: Command) -> Result<()> {
    let cwd = env::current_dir().map_err(|e| {
        WkitError::UserError(format!("failed to get current working directory: {}", e))
    })?;
    let paths = ConfigPaths::discover(&cwd);

    if let Command::Config(cmd) = command {
        return config_cmd::cmd_config(&paths, cmd);
    }

    let config = Config::load(&paths)?;
    let ctx = RepoContext::from_dir(&cwd)?;
    debug!(repo_root = %ctx.repo_root.display(), "resolved repository");

    match command {
        Command::List(args) => list::cmd_list(&ctx, &config, args),
        Command::Add(args) => add::cmd_add(&ctx, &config, args),
        Command::Remove(args) => remove::cmd_remove(&ctx, &config, args),
        Command::Switch(args) => switch::cmd_switch(&ctx, &config, args),
        Command::Status => status::cmd_status(&ctx, &config),
        Command::Clean(args) => clean::cmd_clean(&ctx, &config, args),
        Command::Sync(args) => sync::cmd_sync(&ctx, &config, args),
        Command::Root(args) => root::cmd_root(&ctx, args),
        Command::Config(cmd) => config_cmd::cmd_config(&paths, cmd),
    }
}

/// Worktree manager bound to the repository root and the configured remote.
fn worktree_manager(ctx: &RepoContext, config: &Config) -> WorktreeManager<SystemGit> {
    WorktreeManager::new(SystemGit::new(&ctx.repo_root), config.remote.clone())
}
