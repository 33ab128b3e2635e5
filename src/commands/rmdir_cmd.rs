use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{split_parent, FsError};

pub struct RmdirCommand;

impl Command for RmdirCommand {
    fn name(&self) -> &'static str {
        "rmdir"
    }

    fn execute(&self, mut ctx: CommandContext<'_>) -> CommandResult {
        if ctx.args.is_empty() {
            return CommandResult::error("rmdir: missing operand");
        }

        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let mut exit_code = 0;

        for dir in std::mem::take(&mut ctx.args) {
            match remove_dir(&mut ctx, &dir) {
                Ok(line) => stdout.push(line),
                Err(line) => {
                    stderr.push(line);
                    exit_code = 1;
                }
            }
        }

        CommandResult::with_exit_code(stdout, stderr, exit_code)
    }
}

fn remove_dir(ctx: &mut CommandContext<'_>, dir: &str) -> Result<String, String> {
    let (parent_path, leaf) = split_parent(dir)
        .ok_or_else(|| "rmdir: cannot remove root directory".to_string())?;

    let parent = ctx
        .vfs
        .resolve(&parent_path, ctx.cwd.as_str())
        .filter(|id| ctx.vfs.node(*id).map_or(false, |n| n.is_directory()))
        .ok_or_else(|| format!("rmdir: no such directory: {}", parent_path))?;

    let target = ctx
        .vfs
        .lookup(parent, &leaf)
        .ok_or_else(|| failed(dir, "No such file or directory"))?;

    let removed_path = ctx.vfs.absolute_path(target);
    ctx.vfs.remove_empty_directory(target).map_err(|e| match e {
        FsError::NotDirectory { .. } => failed(dir, "Not a directory"),
        FsError::NotEmpty { .. } => failed(dir, "Directory not empty"),
        other => failed(dir, &other.to_string()),
    })?;

    if *ctx.cwd == removed_path {
        *ctx.cwd = ctx.vfs.absolute_path(parent);
        tracing::debug!(cwd = %ctx.cwd, "cwd removed, moved to parent");
    }

    Ok(format!("rmdir: removed directory '{}'", removed_path))
}

fn failed(dir: &str, reason: &str) -> String {
    format!("rmdir: failed to remove '{}': {}", dir, reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::ls::LsCommand;
    use crate::commands::utils::testing::TestEnv;

    #[test]
    fn test_rmdir_missing_operand() {
        let mut env = TestEnv::new();
        let result = env.run(&RmdirCommand, &[]);
        assert_eq!(result.exit_code, 1);
        assert_eq!(result.stderr, vec!["rmdir: missing operand"]);
    }

    #[test]
    fn test_rmdir_empty_directory() {
        let mut env = TestEnv::new();
        let result = env.run(&RmdirCommand, &["/empty"]);
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout, vec!["rmdir: removed directory '/empty'"]);
        let listing = env.run(&LsCommand, &["/"]);
        assert_eq!(listing.stdout, vec!["docs/", "logo.bin"]);
    }

    #[test]
    fn test_rmdir_relative_with_trailing_slash() {
        let mut env = TestEnv::new();
        env.cwd = "/docs".to_string();
        let result = env.run(&RmdirCommand, &["notes/"]);
        assert_eq!(result.stdout, vec!["rmdir: removed directory '/docs/notes'"]);
    }

    #[test]
    fn test_rmdir_root() {
        let mut env = TestEnv::new();
        let result = env.run(&RmdirCommand, &["/"]);
        assert_eq!(result.stderr, vec!["rmdir: cannot remove root directory"]);
    }

    #[test]
    fn test_rmdir_non_empty() {
        let mut env = TestEnv::new();
        let before = env.vfs.len();
        let result = env.run(&RmdirCommand, &["/docs"]);
        assert_eq!(result.exit_code, 1);
        assert_eq!(result.stderr, vec!["rmdir: failed to remove '/docs': Directory not empty"]);
        assert_eq!(env.vfs.len(), before);
    }

    #[test]
    fn test_rmdir_file() {
        let mut env = TestEnv::new();
        let result = env.run(&RmdirCommand, &["/logo.bin"]);
        assert_eq!(result.stderr, vec!["rmdir: failed to remove '/logo.bin': Not a directory"]);
    }

    #[test]
    fn test_rmdir_missing_leaf() {
        let mut env = TestEnv::new();
        let result = env.run(&RmdirCommand, &["/docs/ghost"]);
        assert_eq!(
            result.stderr,
            vec!["rmdir: failed to remove '/docs/ghost': No such file or directory"]
        );
    }

    #[test]
    fn test_rmdir_missing_parent() {
        let mut env = TestEnv::new();
        let result = env.run(&RmdirCommand, &["/ghost/dir"]);
        assert_eq!(result.stderr, vec!["rmdir: no such directory: /ghost"]);
    }

    #[test]
    fn test_rmdir_dot_entries_are_not_children() {
        let mut env = TestEnv::new();
        env.cwd = "/empty".to_string();
        let result = env.run(&RmdirCommand, &["."]);
        assert_eq!(result.exit_code, 1);
        assert_eq!(env.cwd, "/empty");
    }

    #[test]
    fn test_rmdir_multiple_operands() {
        let mut env = TestEnv::new();
        let result = env.run(&RmdirCommand, &["/docs/notes", "/docs", "/empty"]);
        assert_eq!(result.exit_code, 1);
        assert_eq!(result.stdout.len(), 2);
        assert_eq!(result.stderr.len(), 1);
        assert!(env.vfs.resolve("/empty", "/").is_none());
    }

    #[test]
    fn test_rmdir_current_directory_moves_cwd_up() {
        let mut env = TestEnv::new();
        env.cwd = "/docs/notes".to_string();
        let result = env.run(&RmdirCommand, &["../notes"]);
        assert_eq!(result.exit_code, 0);
        assert_eq!(env.cwd, "/docs");
    }
}
