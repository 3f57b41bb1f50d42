//! Implementation of the `wkit list` command.

use super::display::{WorktreeRow, render_list_table};
use super::worktree_manager;
use crate::cli::{FormatArgs, OutputFormat};
use crate::config::Config;
use crate::context::RepoContext;
use crate::error::{Result, WkitError};

/// Collect the rows shown by `wkit list`, in registry order.
pub fn list_rows(ctx: &RepoContext, config: &Config) -> Result<Vec<WorktreeRow>> {
    let worktrees = worktree_manager(ctx, config).list_worktrees()?;
    Ok(worktrees
        .iter()
        .map(|wt| WorktreeRow::new(wt, &ctx.repo_root))
        .collect())
}

/// Execute the `wkit list` command.
pub fn cmd_list(ctx: &RepoContext, config: &Config, args: FormatArgs) -> Result<()> {
    let rows = list_rows(ctx, config)?;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&rows).map_err(|e| {
                WkitError::UserError(format!("failed to serialize worktree list: {}", e))
            })?;
            println!("{}", json);
        }
        OutputFormat::Table => print!("{}", render_list_table(&rows)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{create_test_repo, git};

    #[test]
    fn test_list_rows_root_and_linked() {
        let temp_dir = create_test_repo();
        let repo = temp_dir.path();
        let linked = repo.join("wt").join("feature");
        git(repo, &["worktree", "add", "-b", "feature", linked.to_str().unwrap()]);

        let ctx = RepoContext::from_dir(repo).unwrap();
        let rows = list_rows(&ctx, &Config::default()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].path, "(root)");
        assert_eq!(rows[0].branch, "main");
        assert_eq!(rows[1].path, "wt/feature");
        assert_eq!(rows[1].branch, "feature");
        assert_eq!(rows[1].head.len(), 40);
    }

    #[test]
    fn test_cmd_list_json() {
        let temp_dir = create_test_repo();
        let ctx = RepoContext::from_dir(temp_dir.path()).unwrap();
        let args = FormatArgs {
            format: OutputFormat::Json,
        };

        assert!(cmd_list(&ctx, &Config::default(), args).is_ok());
    }
}
