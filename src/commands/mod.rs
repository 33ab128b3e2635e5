// src/commands/mod.rs
pub mod cat;
pub mod cd;
pub mod du_cmd;
pub mod exit_cmd;
pub mod head;
pub mod history_cmd;
pub mod ls;
pub mod registry;
pub mod rmdir_cmd;
pub mod types;
pub mod utils;

pub use registry::{create_builtin_registry, CommandRegistry, BUILTINS};
pub use types::{Command, CommandContext, CommandResult};
