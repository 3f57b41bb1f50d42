//! Exit code constants for the wkit CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown worktree, not a repository)
//! - 2: Configuration error (unreadable file, invalid key or value)
//! - 3: Git command failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid state.
pub const USER_ERROR: i32 = 1;

/// Configuration error: config file could not be read, parsed, or updated.
pub const CONFIG_ERROR: i32 = 2;

/// Git failure: the git binary could not run or exited non-zero.
pub const GIT_FAILURE: i32 = 3;
