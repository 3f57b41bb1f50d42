//! Branch lookups and parsing of branch listings.

use crate::error::Result;
use crate::git::run_git;
use std::path::Path;

/// Check if a branch exists locally.
///
/// Uses `git show-ref --verify --quiet refs/heads/<branch>`, which exits
/// non-zero (without output) when the ref is missing.
pub fn branch_exists<P: AsRef<Path>>(repo_dir: P, branch: &str) -> Result<bool> {
    let output = run_git(
        repo_dir,
        &["show-ref", "--verify", "--quiet", &format!("refs/heads/{}", branch)],
    );
    Ok(output.is_ok())
}

/// Parse `git branch --merged` output into branch names.
///
/// Strips the `* ` marker of the current branch and the `+ ` marker of
/// branches checked out in another worktree.
pub fn parse_merged_branches(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.strip_prefix("* ")
                .or_else(|| line.strip_prefix("+ "))
                .unwrap_or(line)
                .trim()
                .to_string()
        })
        .collect()
}

/// Parse `git ls-remote --heads` output (`<sha>\trefs/heads/<name>`) into branch names.
pub fn parse_remote_branches(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let _sha = fields.next()?;
            let reference = fields.next()?;
            Some(
                reference
                    .strip_prefix("refs/heads/")
                    .unwrap_or(reference)
                    .to_string(),
            )
        })
        .collect()
}
