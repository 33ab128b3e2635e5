// src/commands/registry.rs
use std::collections::HashMap;
use std::sync::Arc;

use super::types::Command;

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cat::CatCommand;
use super::cd::CdCommand;
use super::du_cmd::DuCommand;
use super::exit_cmd::ExitCommand;
use super::head::HeadCommand;
use super::history_cmd::HistoryCommand;
use super::ls::LsCommand;
use super::rmdir_cmd::RmdirCommand;

/// 注册所有内置命令
pub fn register_builtins(registry: &mut CommandRegistry) {
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(DuCommand));
    registry.register(Box::new(ExitCommand));
    registry.register(Box::new(HeadCommand));
    registry.register(Box::new(HistoryCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(RmdirCommand));
}

/// 创建包含内置命令的注册表
pub fn create_builtin_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    registry
}

lazy_static::lazy_static! {
    /// Shared dispatch table of the built-in commands.
    pub static ref BUILTINS: Arc<CommandRegistry> = Arc::new(create_builtin_registry());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        assert_eq!(
            BUILTINS.names(),
            vec!["cat", "cd", "du", "exit", "head", "history", "ls", "rmdir"]
        );
    }

    #[test]
    fn test_lookup() {
        assert!(BUILTINS.contains("ls"));
        assert_eq!(BUILTINS.get("rmdir").map(|c| c.name()), Some("rmdir"));
        assert!(BUILTINS.get("rm").is_none());
        assert!(!CommandRegistry::new().contains("ls"));
    }
}
