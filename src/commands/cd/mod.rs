//! cd - Change directory
//!
//! Supports:
//! - cd [dir] - change to directory (absolute or relative, `.`/`..` allowed)
//! - cd - change to $HOME, or `/` when HOME is unset
//!
//! The new cwd is always the canonical path of the resolved node.

use crate::commands::utils::optional_path;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, mut ctx: CommandContext<'_>) -> CommandResult {
        let target = match optional_path(&ctx.args, "cd") {
            Ok(Some(path)) => path.to_string(),
            Ok(None) => ctx.env.get("HOME").cloned().unwrap_or_else(|| "/".to_string()),
            Err(e) => return e,
        };

        let resolved = ctx
            .vfs
            .resolve(&target, ctx.cwd.as_str())
            .filter(|id| ctx.vfs.node(*id).map_or(false, |n| n.is_directory()));
        match resolved {
            Some(id) => {
                *ctx.cwd = ctx.vfs.absolute_path(id);
                CommandResult::empty()
            }
            None => CommandResult::error(format!("cd: no such file or directory: {}", target)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::utils::testing::TestEnv;

    #[test]
    fn test_cd_relative() {
        let mut env = TestEnv::new();
        let result = env.run(&CdCommand, &["docs"]);
        assert_eq!(result.exit_code, 0);
        assert!(result.stdout.is_empty());
        assert_eq!(env.cwd, "/docs");
    }

    #[test]
    fn test_cd_normalizes_path() {
        let mut env = TestEnv::new();
        env.run(&CdCommand, &["/docs/./notes/../notes//"]);
        assert_eq!(env.cwd, "/docs/notes");
        env.run(&CdCommand, &["../../.."]);
        assert_eq!(env.cwd, "/");
    }

    #[test]
    fn test_cd_defaults_to_home() {
        let mut env = TestEnv::new();
        env.env.insert("HOME".to_string(), "/docs".to_string());
        env.run(&CdCommand, &[]);
        assert_eq!(env.cwd, "/docs");
    }

    #[test]
    fn test_cd_defaults_to_root_without_home() {
        let mut env = TestEnv::new();
        env.cwd = "/docs/notes".to_string();
        env.run(&CdCommand, &[]);
        assert_eq!(env.cwd, "/");
    }

    #[test]
    fn test_cd_home_outside_vfs_fails() {
        let mut env = TestEnv::new();
        env.env.insert("HOME".to_string(), "/home/user".to_string());
        let result = env.run(&CdCommand, &[]);
        assert_eq!(result.stderr, vec!["cd: no such file or directory: /home/user"]);
        assert_eq!(env.cwd, "/");
    }

    #[test]
    fn test_cd_missing_keeps_cwd() {
        let mut env = TestEnv::new();
        env.cwd = "/docs".to_string();
        let result = env.run(&CdCommand, &["/no/such/dir"]);
        assert_eq!(result.exit_code, 1);
        assert_eq!(result.stderr, vec!["cd: no such file or directory: /no/such/dir"]);
        assert_eq!(env.cwd, "/docs");
    }

    #[test]
    fn test_cd_into_file_fails() {
        let mut env = TestEnv::new();
        let result = env.run(&CdCommand, &["/docs/a.txt"]);
        assert_eq!(result.exit_code, 1);
        assert_eq!(env.cwd, "/");
    }

    #[test]
    fn test_cd_too_many_arguments() {
        let mut env = TestEnv::new();
        let result = env.run(&CdCommand, &["docs", "empty"]);
        assert_eq!(result.stderr, vec!["cd: too many arguments"]);
        assert_eq!(env.cwd, "/");
    }
}
