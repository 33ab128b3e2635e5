//! vfs-shell - A shell emulator over an in-memory virtual file system
//!
//! This library loads a file system image from a JSON, YAML or TOML
//! description and runs a small set of shell commands (`ls`, `cd`, `cat`,
//! `head`, `du`, `rmdir`, `history`, `exit`) against it, one line at a time.

pub mod commands;
pub mod config;
pub mod fs;
pub mod parser;
pub mod session;
pub mod shell;
pub mod sink;
pub mod source;

pub use commands::{Command, CommandContext, CommandRegistry, CommandResult};
pub use config::{ConfigError, ShellConfig};
pub use fs::{FsError, LoadError, VfsTree};
pub use parser::ParseError;
pub use shell::{LineOutcome, Shell, ShellOptions};
pub use sink::{BufferSink, OutputSink, StdioSink};
pub use source::{LineSource, ScriptSource, StdinSource};
