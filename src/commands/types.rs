// src/commands/types.rs
use std::collections::HashMap;

use crate::fs::VfsTree;

/// 命令执行结果
///
/// Output is kept as lines; the shell forwards them to the output sink in
/// order, stdout first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
    pub exit_code: i32,
    /// Set by `exit`: the driving loop must stop feeding lines.
    pub terminate: bool,
}

impl CommandResult {
    pub fn success(stdout: Vec<String>) -> Self {
        Self { stdout, ..Default::default() }
    }

    pub fn line(line: impl Into<String>) -> Self {
        Self::success(vec![line.into()])
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn error(stderr: impl Into<String>) -> Self {
        Self { stderr: vec![stderr.into()], exit_code: 1, ..Default::default() }
    }

    pub fn with_exit_code(stdout: Vec<String>, stderr: Vec<String>, exit_code: i32) -> Self {
        Self { stdout, stderr, exit_code, terminate: false }
    }

    pub fn terminate(stdout: Vec<String>) -> Self {
        Self { stdout, terminate: true, ..Default::default() }
    }
}

/// 命令执行上下文
///
/// Borrowed view of the shell state a handler may touch. `env` is shared
/// read-only; only `cwd` and the tree are mutable.
pub struct CommandContext<'a> {
    pub args: Vec<String>,
    pub cwd: &'a mut String,
    pub env: &'a HashMap<String, String>,
    pub history: &'a [String],
    pub vfs: &'a mut VfsTree,
}

/// 命令 trait
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult;
}
