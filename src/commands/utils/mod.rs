// src/commands/utils/mod.rs
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::commands::{CommandContext, CommandResult};
use crate::fs::{Encoding, FileData};

/// Prefix of the single line a binary file is rendered as.
pub const BINARY_MARKER: &str = "[binary]";

/// At most one path operand. More is an error.
pub fn optional_path<'a>(args: &'a [String], cmd_name: &str) -> Result<Option<&'a str>, CommandResult> {
    match args {
        [] => Ok(None),
        [path] => Ok(Some(path.as_str())),
        _ => Err(CommandResult::error(format!("{}: too many arguments", cmd_name))),
    }
}

/// Render file content as output lines.
///
/// Text is split on line endings; binary becomes one base64 line.
pub fn render_file(data: FileData<'_>, limit: Option<usize>) -> Vec<String> {
    match data.encoding {
        Encoding::Binary => vec![format!("{} {}", BINARY_MARKER, STANDARD.encode(data.content))],
        Encoding::Text => {
            let text = String::from_utf8_lossy(data.content);
            let lines = text.lines().map(str::to_string);
            match limit {
                Some(n) => lines.take(n).collect(),
                None => lines.collect(),
            }
        }
    }
}

/// Shared body of `cat` and `head`: exactly one file operand.
pub fn show_file(ctx: &CommandContext<'_>, cmd_name: &str, limit: Option<usize>) -> CommandResult {
    let path = match optional_path(&ctx.args, cmd_name) {
        Ok(Some(path)) => path,
        Ok(None) => return CommandResult::error(format!("{}: file required", cmd_name)),
        Err(e) => return e,
    };

    let data = ctx
        .vfs
        .resolve(path, ctx.cwd.as_str())
        .and_then(|id| ctx.vfs.read_file(id).ok());
    match data {
        Some(data) => CommandResult::success(render_file(data, limit)),
        None => CommandResult::error(format!("{}: no such file: {}", cmd_name, path)),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_path() {
        let none: Vec<String> = vec![];
        let one = vec!["a".to_string()];
        let two = vec!["a".to_string(), "b".to_string()];
        assert_eq!(optional_path(&none, "ls").unwrap(), None);
        assert_eq!(optional_path(&one, "ls").unwrap(), Some("a"));
        let err = optional_path(&two, "ls").unwrap_err();
        assert_eq!(err.stderr, vec!["ls: too many arguments"]);
    }

    #[test]
    fn test_render_text_with_limit() {
        let data = FileData { content: b"1\n2\n3\n", encoding: Encoding::Text };
        assert_eq!(render_file(data, None), vec!["1", "2", "3"]);
        assert_eq!(render_file(data, Some(2)), vec!["1", "2"]);
    }

    #[test]
    fn test_render_crlf_and_blank_lines() {
        let data = FileData { content: b"a\r\n\r\nb\n", encoding: Encoding::Text };
        assert_eq!(render_file(data, None), vec!["a", "", "b"]);
    }

    #[test]
    fn test_render_binary() {
        let data = FileData { content: &[0, 1, 2, 255], encoding: Encoding::Binary };
        assert_eq!(render_file(data, Some(1)), vec!["[binary] AAEC/w=="]);
    }

    #[test]
    fn test_render_empty_file() {
        let data = FileData { content: b"", encoding: Encoding::Text };
        assert!(render_file(data, None).is_empty());
    }
}
