//! Git command runner for wkit.
//!
//! Provides a safe wrapper around git commands with captured stdout/stderr
//! and structured error handling. All git subprocesses go through this module.

use crate::error::{Result, WkitError};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::debug;

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command, with trailing whitespace removed.
    ///
    /// Leading whitespace is kept: the first column of porcelain status
    /// output is significant (` M file` differs from `M  file`).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout)
                .trim_end()
                .to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Run a git command with the specified working directory.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(WkitError::CommandExecutionFailed)` - If git could not be spawned
///   or exited non-zero
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();
    debug!(cwd = %cwd.display(), "running git {}", args.join(" "));

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            WkitError::CommandExecutionFailed(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.trim().to_string()
        } else {
            git_output.stderr.clone()
        };
        debug!(exit_code, "git {} failed", args.join(" "));

        Err(WkitError::CommandExecutionFailed(format!(
            "git {} failed (exit code {}): {}",
            args.join(" "),
            exit_code,
            error_msg
        )))
    }
}

/// Get the root directory of the main repository.
///
/// Works from the main worktree, from any subdirectory, and from linked
/// worktrees: the shared git directory is resolved first, and when it is an
/// absolute `.git` directory its parent is the main worktree. Otherwise
/// `git rev-parse --show-toplevel` is used.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The absolute path to the repository root
/// * `Err(WkitError::UserError)` - If not inside a git repository (exit code 1)
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let cwd = cwd.as_ref();

    let common = run_git_for_repo_detection(cwd, &["rev-parse", "--git-common-dir"])?;
    let common_dir = PathBuf::from(common.stdout.trim());
    if common_dir.is_absolute()
        && common_dir.file_name() == Some(OsStr::new(".git"))
        && let Some(parent) = common_dir.parent()
    {
        return Ok(parent.to_path_buf());
    }

    let output = run_git_for_repo_detection(cwd, &["rev-parse", "--show-toplevel"])?;
    Ok(PathBuf::from(output.stdout.trim()))
}

/// Get the current directory's path relative to its worktree root.
///
/// Returns an empty string at the top of the worktree, otherwise a path like
/// `src/cli` (no trailing slash).
pub fn prefix_from_root<P: AsRef<Path>>(cwd: P) -> Result<String> {
    let output = run_git(cwd, &["rev-parse", "--show-prefix"])?;
    Ok(output.stdout.trim().trim_end_matches('/').to_string())
}

/// Internal helper that returns a UserError instead of a git failure for repo detection.
/// This keeps "not in a git repo" a clean user error (exit 1).
fn run_git_for_repo_detection<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            WkitError::UserError(format!("failed to execute git: {} (is git installed?)", e))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let stderr = &git_output.stderr;
        if stderr.contains("not a git repository") || stderr.contains("fatal:") {
            Err(WkitError::UserError(
                "not inside a git repository. Run this command from within a git repository."
                    .to_string(),
            ))
        } else {
            Err(WkitError::UserError(format!(
                "git command failed: {}",
                if stderr.is_empty() {
                    &git_output.stdout
                } else {
                    stderr
                }
            )))
        }
    }
}
