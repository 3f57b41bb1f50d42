//! Repository context resolution for wkit.
//!
//! Every command runs against a [`RepoContext`]: the directory the user
//! invoked wkit from and the root of the main repository. The root is found
//! the same way from the main worktree, a subdirectory, or a linked worktree,
//! so commands behave identically wherever they are run.

use crate::error::{Result, WkitError};
use crate::git;
use std::env;
use std::path::{Path, PathBuf};

/// Where a command was invoked and which repository it targets.
#[derive(Debug, Clone)]
pub struct RepoContext {
    /// Directory wkit was invoked from.
    pub cwd: PathBuf,

    /// Absolute path to the main worktree (original clone location).
    pub repo_root: PathBuf,
}

impl RepoContext {
    /// Resolve the context from the current working directory.
    ///
    /// # Returns
    ///
    /// * `Ok(RepoContext)` - Successfully resolved context
    /// * `Err(WkitError::UserError)` - If not in a git repository (exit code 1)
    pub fn discover() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            WkitError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Self::from_dir(cwd)
    }

    /// Resolve the context from a specific directory.
    pub fn from_dir<P: AsRef<Path>>(cwd: P) -> Result<Self> {
        let cwd = cwd.as_ref().to_path_buf();
        let repo_root = git::get_repo_root(&cwd)?;
        Ok(Self { cwd, repo_root })
    }
}
