// src/commands/cat/mod.rs
use crate::commands::utils::show_file;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        show_file(&ctx, "cat", None)
    }
}
