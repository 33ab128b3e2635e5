//! exit - Leave the shell
//!
//! Never fails. Arguments are ignored; the shell reports `Terminate` to
//! the driving loop instead of ending the process.

use crate::commands::{Command, CommandContext, CommandResult};

pub const FAREWELL: &str = "Exiting the emulator.";

pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::terminate(vec![FAREWELL.to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::utils::testing::TestEnv;

    #[test]
    fn test_exit_terminates() {
        let mut env = TestEnv::new();
        let result = env.run(&ExitCommand, &[]);
        assert!(result.terminate);
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout, vec![FAREWELL]);
    }

    #[test]
    fn test_exit_with_arguments_still_terminates() {
        let mut env = TestEnv::new();
        let result = env.run(&ExitCommand, &["3", "extra"]);
        assert!(result.terminate);
        assert_eq!(result.exit_code, 0);
    }
}
