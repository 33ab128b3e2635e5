//! Shell Environment
//!
//! Main entry point of the library. Ties together the parser, the command
//! registry and the virtual file system.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::commands::{CommandContext, CommandRegistry, BUILTINS};
use crate::fs::{LoadError, LoadSummary, VfsTree};
use crate::parser::parse_line;
use crate::sink::OutputSink;

/// Default prompt marker put in front of echoed input.
pub const DEFAULT_PROMPT: &str = "$ ";

/// Options for creating a Shell.
#[derive(Default)]
pub struct ShellOptions {
    /// Environment snapshot (defaults to empty)
    pub env: Option<HashMap<String, String>>,
    /// Initial working directory (defaults to `/`)
    pub cwd: Option<String>,
    /// Prompt marker for echoed lines
    pub prompt: Option<String>,
    /// Dispatch table (defaults to the built-in commands)
    pub registry: Option<Arc<CommandRegistry>>,
}

/// What the driving loop should do after a line.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Terminate,
}

/// Mutable interpreter state.
#[derive(Debug, Clone)]
struct ShellState {
    cwd: String,
    env: HashMap<String, String>,
    history: Vec<String>,
    last_exit_code: i32,
}

/// A line-oriented shell over an in-memory file system.
pub struct Shell {
    vfs: VfsTree,
    state: ShellState,
    registry: Arc<CommandRegistry>,
    prompt: String,
}

impl Shell {
    /// Create a shell with an empty file system (root only).
    pub fn new(options: ShellOptions) -> Self {
        let state = ShellState {
            cwd: options.cwd.unwrap_or_else(|| "/".to_string()),
            env: options.env.unwrap_or_default(),
            history: Vec::new(),
            last_exit_code: 0,
        };
        let mut shell = Self {
            vfs: VfsTree::new(),
            state,
            registry: options.registry.unwrap_or_else(|| BUILTINS.clone()),
            prompt: options.prompt.unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
        };
        shell.sanitize_cwd();
        shell
    }

    pub fn vfs_mut(&mut self) -> &mut VfsTree {
        &mut self.vfs
    }

    pub fn cwd(&self) -> &str {
        &self.state.cwd
    }

    pub fn env(&self) -> &HashMap<String, String> {
        &self.state.env
    }

    pub fn history(&self) -> &[String] {
        &self.state.history
    }

    pub fn last_exit_code(&self) -> i32 {
        self.state.last_exit_code
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Load a VFS description file, replacing the current tree.
    ///
    /// On failure the tree keeps whatever was built so far.
    pub fn load_vfs(&mut self, path: impl AsRef<Path>) -> Result<LoadSummary, LoadError> {
        let result = self.vfs.load_file(path);
        self.sanitize_cwd();
        result
    }

    /// Keep cwd canonical and pointing at an existing directory.
    fn sanitize_cwd(&mut self) {
        let resolved = self
            .vfs
            .resolve(&self.state.cwd, "/")
            .filter(|id| self.vfs.node(*id).map_or(false, |n| n.is_directory()));
        self.state.cwd = match resolved {
            Some(id) => self.vfs.absolute_path(id),
            None => "/".to_string(),
        };
    }

    /// Run one raw input line.
    ///
    /// Blank lines are ignored entirely. Everything else is recorded in the
    /// history before it is expanded, tokenized and dispatched.
    #[tracing::instrument(level = "debug", skip(self, sink), fields(cwd = %self.state.cwd))]
    pub fn run_line(&mut self, raw_line: &str, echo_input: bool, sink: &mut dyn OutputSink) -> LineOutcome {
        let line = raw_line.trim_end_matches('\n');
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            return LineOutcome::Continue;
        }

        if echo_input {
            sink.write_line(&format!("{}{}", self.prompt, line));
        }
        self.state.history.push(line.to_string());

        let tokens = match parse_line(line, &self.state.env) {
            Ok(tokens) => tokens,
            Err(e) => {
                tracing::debug!(error = %e, "tokenizer rejected line");
                sink.write_error(&format!("error: unbalanced quotes ({})", e));
                self.state.last_exit_code = 2;
                return LineOutcome::Continue;
            }
        };
        let Some((name, args)) = tokens.split_first() else {
            return LineOutcome::Continue;
        };

        let Some(cmd) = self.registry.get(name) else {
            sink.write_error(&format!("{}: command not found", name));
            self.state.last_exit_code = 127;
            return LineOutcome::Continue;
        };

        tracing::debug!(command = %name, args = ?args, "dispatch");
        let ctx = CommandContext {
            args: args.to_vec(),
            cwd: &mut self.state.cwd,
            env: &self.state.env,
            history: &self.state.history,
            vfs: &mut self.vfs,
        };
        let result = cmd.execute(ctx);

        for line in &result.stdout {
            sink.write_line(line);
        }
        for line in &result.stderr {
            sink.write_error(line);
        }
        self.state.last_exit_code = result.exit_code;

        if result.terminate {
            LineOutcome::Terminate
        } else {
            LineOutcome::Continue
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(ShellOptions::default())
    }
}
