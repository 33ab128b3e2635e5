// src/commands/head/mod.rs
use crate::commands::utils::show_file;
use crate::commands::{Command, CommandContext, CommandResult};

/// Lines printed by `head`.
pub const HEAD_LINES: usize = 10;

pub struct HeadCommand;

impl Command for HeadCommand {
    fn name(&self) -> &'static str {
        "head"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        show_file(&ctx, "head", Some(HEAD_LINES))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::utils::testing::TestEnv;
    use crate::fs::Encoding;

    fn env_with_lines(count: usize) -> TestEnv {
        let mut env = TestEnv::new();
        let content: String = (1..=count).map(|i| format!("line{}\n", i)).collect();
        let root = env.vfs.root();
        env.vfs.add_file(root, "test.txt", content.into_bytes(), Encoding::Text).unwrap();
        env
    }

    #[test]
    fn test_head_default() {
        let mut env = env_with_lines(15);
        let result = env.run(&HeadCommand, &["/test.txt"]);
        let expected: Vec<String> = (1..=10).map(|i| format!("line{}", i)).collect();
        assert_eq!(result.stdout, expected);
    }

    #[test]
    fn test_head_fewer_lines_than_limit() {
        let mut env = TestEnv::new();
        let result = env.run(&HeadCommand, &["/docs/a.txt"]);
        assert_eq!(result.stdout, vec!["hello", "world"]);
    }

    #[test]
    fn test_head_binary_file() {
        let mut env = TestEnv::new();
        let result = env.run(&HeadCommand, &["/logo.bin"]);
        assert_eq!(result.stdout, vec!["[binary] AAEC/w=="]);
    }

    #[test]
    fn test_head_requires_file() {
        let mut env = TestEnv::new();
        let result = env.run(&HeadCommand, &[]);
        assert_eq!(result.stderr, vec!["head: file required"]);
    }

    #[test]
    fn test_head_missing_file() {
        let mut env = TestEnv::new();
        let result = env.run(&HeadCommand, &["/missing.txt"]);
        assert_eq!(result.exit_code, 1);
        assert_eq!(result.stderr, vec!["head: no such file: /missing.txt"]);
    }
}
