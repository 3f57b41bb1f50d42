//! Copying untracked local files into new worktrees.

use super::types::CopyFiles;
use crate::error::{Result, WkitError};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Copy the configured files from `source_root` into `target_root`.
///
/// Entries containing a path separator are taken relative to the root. Other
/// entries are file-name globs matched anywhere in the source tree, skipping
/// `.git` and nested repositories or worktrees. Existing files in the target
/// are left alone. A file that fails to copy is logged and skipped.
///
/// Returns the relative paths that were copied.
pub fn copy_files_to_worktree(
    copy_files: &CopyFiles,
    source_root: &Path,
    target_root: &Path,
) -> Result<Vec<String>> {
    if !copy_files.enabled {
        return Ok(Vec::new());
    }

    let (paths, patterns): (Vec<&String>, Vec<&String>) = copy_files
        .files
        .iter()
        .filter(|entry| !entry.trim().is_empty())
        .partition(|entry| entry.contains('/') || entry.contains('\\'));

    let mut candidates: Vec<PathBuf> = paths
        .into_iter()
        .map(|entry| PathBuf::from(entry.replace('\\', "/")))
        .filter(|relative| source_root.join(relative).is_file())
        .collect();

    if !patterns.is_empty() {
        let globs = build_globset(&patterns)?;
        candidates.extend(find_matching_files(source_root, &globs));
    }

    let mut copied = Vec::new();
    for relative in candidates {
        let shown = relative.to_string_lossy().replace('\\', "/");
        if copied.contains(&shown) {
            continue;
        }

        let target = target_root.join(&relative);
        if target.exists() {
            debug!(file = %shown, "skipping copy, target already exists");
            continue;
        }

        match copy_one(&source_root.join(&relative), &target) {
            Ok(()) => {
                debug!(file = %shown, "copied file into worktree");
                copied.push(shown);
            }
            Err(e) => warn!(file = %shown, error = %e, "failed to copy file"),
        }
    }

    Ok(copied)
}

fn build_globset(patterns: &[&String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let glob = Glob::new(pattern.trim()).map_err(|e| {
            WkitError::ConfigError(format!(
                "invalid glob pattern in copy_files.files: '{}' - {}",
                pattern, e
            ))
        })?;
        builder.add(glob);
    }

    builder
        .build()
        .map_err(|e| WkitError::ConfigError(format!("failed to compile copy_files globs: {}", e)))
}

/// Files below `root` whose file name matches `globs`, as paths relative to `root`.
fn find_matching_files(root: &Path, globs: &GlobSet) -> Vec<PathBuf> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            entry.file_name() != ".git" && !entry.path().join(".git").exists()
        });

    walker
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && globs.is_match(entry.file_name()))
        .filter_map(|entry| entry.path().strip_prefix(root).ok().map(Path::to_path_buf))
        .collect()
}

fn copy_one(source: &Path, target: &Path) -> std::io::Result<()> {
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::copy(source, target)?;
    Ok(())
}
