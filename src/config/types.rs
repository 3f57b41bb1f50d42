//! Configuration types and defaults for wkit.

use serde::{Deserialize, Serialize};

/// How `wkit sync` brings a worktree up to date with the main branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SyncStrategy {
    /// `git merge <remote>/<main>` (default).
    #[default]
    Merge,
    /// `git rebase <remote>/<main>`.
    Rebase,
}

impl SyncStrategy {
    /// Parse a sync strategy from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "merge" => Some(Self::Merge),
            "rebase" => Some(Self::Rebase),
            _ => None,
        }
    }

    /// The git subcommand implementing this strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Rebase => "rebase",
        }
    }
}

/// Files copied from the main worktree into newly created worktrees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyFiles {
    /// Whether copying is enabled.
    pub enabled: bool,

    /// Entries to copy. Entries containing a path separator are paths relative
    /// to the repository root; bare entries are file-name globs matched
    /// anywhere in the tree.
    #[serde(default = "default_copy_files")]
    pub files: Vec<String>,
}

impl Default for CopyFiles {
    fn default() -> Self {
        Self {
            enabled: false,
            files: default_copy_files(),
        }
    }
}

/// Default files to carry over into new worktrees.
pub fn default_copy_files() -> Vec<String> {
    vec![
        ".envrc".to_string(),
        "compose.override.yaml".to_string(),
        ".env.local".to_string(),
        "config/local.yaml".to_string(),
    ]
}

pub(crate) fn default_worktree_path() -> String {
    ".git/.wkit-worktrees".to_string()
}
pub(crate) fn default_main_branch() -> String {
    "main".to_string()
}
pub(crate) fn default_remote() -> String {
    "origin".to_string()
}
