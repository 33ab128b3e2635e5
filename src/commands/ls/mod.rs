// src/commands/ls/mod.rs
use crate::commands::utils::optional_path;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let path = match optional_path(&ctx.args, "ls") {
            Ok(path) => path.unwrap_or(ctx.cwd.as_str()),
            Err(e) => return e,
        };

        let entries = ctx
            .vfs
            .resolve(path, ctx.cwd.as_str())
            .and_then(|id| ctx.vfs.list_children(id).ok());
        match entries {
            Some(entries) => {
                CommandResult::success(entries.iter().map(|e| e.display_name()).collect())
            }
            None => CommandResult::error(format!("ls: no such directory: {}", path)),
        }
    }
}
