//! CLI argument parsing for wkit.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// wkit: manage git worktrees for parallel branches.
///
/// Creates worktrees under a predictable directory, reports their status,
/// keeps them in sync with the main branch, and cleans up the ones that
/// are no longer needed.
#[derive(Parser, Debug)]
#[command(name = "wkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print debug logging to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for wkit.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all worktrees.
    #[command(alias = "ls")]
    List(FormatArgs),

    /// Create a worktree for a branch.
    ///
    /// The branch is created from `<remote>/<base>` when it does not exist
    /// locally. Prints the new worktree path for a shell wrapper to switch to.
    Add(AddArgs),

    /// Remove a worktree.
    #[command(alias = "rm")]
    Remove(WorktreeArg),

    /// Print the path of a worktree for a shell wrapper to switch to.
    Switch(WorktreeArg),

    /// Show change counts for every worktree.
    Status,

    /// Remove worktrees whose branch is merged or gone from the remote.
    Clean(CleanArgs),

    /// Merge or rebase the main branch into a worktree.
    Sync(SyncArgs),

    /// Print the repository root.
    Root(FormatArgs),

    /// Show or edit configuration.
    Config(ConfigCommand),
}

/// Output format for listing commands.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Branch to check out (created if it does not exist).
    pub branch: String,

    /// Worktree location (default: `<default_worktree_path>/<branch>`).
    pub path: Option<PathBuf>,

    /// Do not print the path for the shell wrapper to switch to.
    #[arg(long)]
    pub no_switch: bool,

    /// Base branch for a new branch (default: the configured main branch).
    #[arg(short, long = "base-branch", value_name = "BRANCH")]
    pub base_branch: Option<String>,
}

#[derive(Args, Debug)]
pub struct WorktreeArg {
    /// Worktree branch name, or part of its path.
    pub worktree: String,
}

#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Remove without asking for confirmation.
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Worktree to sync (default: the current worktree).
    pub worktree: Option<String>,

    /// Rebase instead of merge.
    #[arg(short, long)]
    pub rebase: bool,
}

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration.
    Show,

    /// Set a value in the global configuration file.
    Set(ConfigSetArgs),

    /// Create `.wkit.toml` with default values in the current directory.
    Init,
}

#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Key to set, e.g. `main_branch` or `copy_files.enabled`.
    pub key: String,

    /// New value. Lists are comma separated.
    pub value: String,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
