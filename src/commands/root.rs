//! Implementation of the `wkit root` command.

use crate::cli::{FormatArgs, OutputFormat};
use crate::context::RepoContext;
use crate::error::{Result, WkitError};
use serde_json::json;

/// Render the repository root in the requested format.
pub fn render_root(ctx: &RepoContext, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(ctx.repo_root.display().to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&json!({ "root": ctx.repo_root.display().to_string() }))
                .map_err(|e| WkitError::UserError(format!("failed to serialize root: {}", e)))
        }
    }
}

/// Execute the `wkit root` command.
pub fn cmd_root(ctx: &RepoContext, args: FormatArgs) -> Result<()> {
    println!("{}", render_root(ctx, args.format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{create_test_repo, git};

    #[test]
    fn test_root_from_linked_worktree() {
        let temp_dir = create_test_repo();
        let repo = temp_dir.path();
        let linked = repo.join("linked");
        git(repo, &["worktree", "add", "-b", "linked", linked.to_str().unwrap()]);
        let ctx = RepoContext::from_dir(&linked).unwrap();

        let plain = render_root(&ctx, OutputFormat::Table).unwrap();
        assert_eq!(plain, ctx.repo_root.display().to_string());

        let json: serde_json::Value =
            serde_json::from_str(&render_root(&ctx, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["root"], plain);
    }
}
