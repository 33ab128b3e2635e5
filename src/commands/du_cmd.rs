use crate::commands::utils::optional_path;
use crate::commands::{Command, CommandContext, CommandResult};

/// du - total byte size of a file or directory tree
///
/// Prints `<bytes>\t<path>`; the path is shown as typed, `.` when omitted.
pub struct DuCommand;

impl Command for DuCommand {
    fn name(&self) -> &'static str {
        "du"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let target = match optional_path(&ctx.args, "du") {
            Ok(path) => path.unwrap_or("."),
            Err(e) => return e,
        };

        match ctx.vfs.resolve(target, ctx.cwd.as_str()) {
            Some(id) => CommandResult::line(format!("{}\t{}", ctx.vfs.subtree_size(id), target)),
            None => CommandResult::error(format!("du: no such file or directory: {}", target)),
        }
    }
}
