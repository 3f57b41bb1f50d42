use crate::error::{Result, WkitError};
use crate::git_worktree::GitRunner;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub(crate) fn create_test_repo() -> TempDir {
    create_repo(CreateRepoOptions {
        commits: 1,
        add_origin_remote: false,
    })
}

pub(crate) fn create_test_repo_with_remote() -> TempDir {
    create_repo(CreateRepoOptions {
        commits: 2,
        add_origin_remote: true,
    })
}

struct CreateRepoOptions {
    commits: usize,
    add_origin_remote: bool,
}

fn create_repo(opts: CreateRepoOptions) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    // Pin the default branch name so tests do not depend on init.defaultBranch.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);

    for i in 2..=opts.commits {
        std::fs::write(path.join(format!("file{}.txt", i)), format!("File {}\n", i)).unwrap();
        git(path, &["add", "."]);
        git(path, &["commit", "-m", &format!("Commit {}", i)]);
    }

    if opts.add_origin_remote {
        // The repository doubles as its own remote so fetch and ls-remote work offline.
        let path_str = path.to_string_lossy().to_string();
        git(path, &["remote", "add", "origin", &path_str]);
        git(path, &["fetch", "origin"]);
    }

    temp_dir
}

/// Run git in `repo_dir`, panicking with full output on failure.
pub(crate) fn git(repo_dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// In-memory runner with canned command output.
#[derive(Debug, Default)]
pub(crate) struct FakeGit {
    pub worktree_list: String,
    pub statuses: HashMap<PathBuf, String>,
    pub merged: String,
    pub remote_heads: String,
    pub existing_paths: HashSet<PathBuf>,
    /// When set, every text-producing command fails with this message.
    pub failure: Option<String>,
}

impl FakeGit {
    pub(crate) fn with_worktrees(worktree_list: &str) -> Self {
        Self {
            worktree_list: worktree_list.to_string(),
            ..Self::default()
        }
    }

    fn respond(&self, text: &str) -> Result<String> {
        match &self.failure {
            Some(msg) => Err(WkitError::CommandExecutionFailed(msg.clone())),
            None => Ok(text.to_string()),
        }
    }
}

impl GitRunner for FakeGit {
    fn worktree_list(&self) -> Result<String> {
        self.respond(&self.worktree_list)
    }

    fn status(&self, worktree: &Path) -> Result<String> {
        match self.statuses.get(worktree) {
            Some(text) => self.respond(text),
            None => Err(WkitError::CommandExecutionFailed(format!(
                "git status failed (exit code 128): cannot change to '{}'",
                worktree.display()
            ))),
        }
    }

    fn branch_merged(&self, _main_branch: &str) -> Result<String> {
        self.respond(&self.merged)
    }

    fn remote_branches(&self, _remote: &str) -> Result<String> {
        self.respond(&self.remote_heads)
    }

    fn path_exists(&self, path: &Path) -> bool {
        self.existing_paths.contains(path)
    }
}
