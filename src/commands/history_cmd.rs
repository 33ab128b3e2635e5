use crate::commands::{Command, CommandContext, CommandResult};

pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn name(&self) -> &'static str { "history" }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let stdout = ctx
            .history
            .iter()
            .enumerate()
            .map(|(i, cmd)| format!("{:5}  {}", i + 1, cmd))
            .collect();
        CommandResult::success(stdout)
    }
}
