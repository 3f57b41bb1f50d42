//! Git worktree parsing, classification, and operations.
//!
//! The parsing core turns raw git output into structured values and never
//! fails on odd input:
//!
//! - `registry`: `git worktree list --porcelain` into [`WorktreeRecord`]s
//! - `status`: `git status --porcelain --branch` into a [`WorktreeStatus`]
//! - `policy`: which worktrees are no longer needed, and why
//!
//! Git itself is reached through the [`GitRunner`] trait for reads, and through
//! free functions for the commands that change the repository. Every git
//! failure surfaces as `WkitError::CommandExecutionFailed` (exit code 3).

mod branch;
mod cleanup;
mod manager;
mod policy;
mod registry;
mod remote;
mod runner;
mod status;
mod worktree;

pub use cleanup::remove_worktree;
pub use manager::WorktreeManager;
pub use policy::{UnnecessaryReason, UnnecessaryWorktreeVerdict, classify_unnecessary};
pub use registry::{WorktreeRecord, parse_worktree_registry};
pub use remote::sync_worktree;
pub use runner::{GitRunner, SystemGit};
pub use status::{WorktreeStatus, compute_status};
pub use worktree::{WorktreeInfo, add_worktree};
