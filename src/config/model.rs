//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for wkit.
///
/// Assembled from the global `config.toml` and the repository-local
/// `.wkit.toml`. Unknown fields are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory new worktrees are created under, relative to the repository
    /// root unless absolute.
    #[serde(default = "default_worktree_path")]
    pub default_worktree_path: String,

    /// Remove unnecessary worktrees in `wkit clean` without asking.
    #[serde(default)]
    pub auto_cleanup: bool,

    /// Strategy used by `wkit sync` when `--rebase` is not given.
    #[serde(default)]
    pub default_sync_strategy: SyncStrategy,

    /// Name of the main branch (default: "main").
    #[serde(default = "default_main_branch")]
    pub main_branch: String,

    /// Name of the remote (default: "origin").
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Files copied into new worktrees.
    #[serde(default)]
    pub copy_files: CopyFiles,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_worktree_path: default_worktree_path(),
            auto_cleanup: false,
            default_sync_strategy: SyncStrategy::default(),
            main_branch: default_main_branch(),
            remote: default_remote(),
            copy_files: CopyFiles::default(),
        }
    }
}
