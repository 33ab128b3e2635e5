//! Parser module for command lines
//!
//! A raw line goes through variable expansion first and is then split into
//! words by the lexer.

pub mod expand;
pub mod lexer;

// Re-exports
pub use expand::expand_variables;
pub use lexer::{tokenize, Lexer, ParseError};

use std::collections::HashMap;

/// Expand then tokenize a raw line.
pub fn parse_line(line: &str, env: &HashMap<String, String>) -> Result<Vec<String>, ParseError> {
    tokenize(&expand_variables(line, env))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_expands_before_splitting() {
        let env: HashMap<String, String> =
            [("D".to_string(), "my docs".to_string())].into_iter().collect();
        assert_eq!(parse_line("ls $D", &env).unwrap(), vec!["ls", "my", "docs"]);
        assert_eq!(parse_line("ls \"$D\"", &env).unwrap(), vec!["ls", "my docs"]);
    }

    #[test]
    fn test_parse_line_reports_quote_errors() {
        assert!(parse_line("cat \"a", &HashMap::new()).is_err());
    }
}
