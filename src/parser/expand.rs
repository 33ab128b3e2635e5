//! Variable expansion.
//!
//! Handles `$NAME` and `${NAME}` in a raw line before it is tokenized.
//! Expansion ignores quoting. Unknown variables expand to the empty string;
//! a `$` that does not start a reference, or a `${` without a closing
//! brace, is kept as a literal `$`.

use std::collections::HashMap;

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Expand variable references in `line` using `env`.
pub fn expand_variables(line: &str, env: &HashMap<String, String>) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut result = String::with_capacity(line.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '$' {
            result.push(chars[i]);
            i += 1;
            continue;
        }

        match chars.get(i + 1) {
            Some('{') => match chars[i + 2..].iter().position(|&c| c == '}') {
                Some(len) => {
                    let name: String = chars[i + 2..i + 2 + len].iter().collect();
                    result.push_str(env.get(&name).map(String::as_str).unwrap_or(""));
                    i += len + 3;
                }
                None => {
                    result.push('$');
                    i += 1;
                }
            },
            Some(&c) if is_name_char(c) => {
                let len = chars[i + 1..].iter().take_while(|&&c| is_name_char(c)).count();
                let name: String = chars[i + 1..i + 1 + len].iter().collect();
                result.push_str(env.get(&name).map(String::as_str).unwrap_or(""));
                i += len + 1;
            }
            _ => {
                result.push('$');
                i += 1;
            }
        }
    }

    result
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_simple_variable() {
        let env = env(&[("HOME", "/home/u")]);
        assert_eq!(expand_variables("$HOME/x", &env), "/home/u/x");
        assert_eq!(expand_variables("cd $HOME", &env), "cd /home/u");
    }

    #[test]
    fn test_non_ascii_names() {
        let env = env(&[("ПУТЬ", "/docs"), ("dir2", "x")]);
        assert_eq!(expand_variables("cd $ПУТЬ", &env), "cd /docs");
        assert_eq!(expand_variables("${ПУТЬ}/a", &env), "/docs/a");
        assert_eq!(expand_variables("$dir2-y", &env), "x-y");
    }

    #[test]
    fn test_braced_variable() {
        let env = env(&[("USER", "ann")]);
        assert_eq!(expand_variables("${USER}_dir", &env), "ann_dir");
        assert_eq!(expand_variables("${MISSING}y", &HashMap::new()), "y");
    }

    #[test]
    fn test_name_is_maximal_run() {
        let env = env(&[("A", "1"), ("AB", "2")]);
        assert_eq!(expand_variables("$AB-$A", &env), "2-1");
        assert_eq!(expand_variables("$A_B", &env), "");
    }

    #[test]
    fn test_unknown_variable_is_empty() {
        assert_eq!(expand_variables("a$NOPEb c", &HashMap::new()), "a c");
    }

    #[test]
    fn test_lone_dollar() {
        let empty = HashMap::new();
        assert_eq!(expand_variables("$", &empty), "$");
        assert_eq!(expand_variables("cost $ 5", &empty), "cost $ 5");
        assert_eq!(expand_variables("$$", &empty), "$$");
        assert_eq!(expand_variables("$-x", &empty), "$-x");
    }

    #[test]
    fn test_unterminated_brace_is_literal() {
        let env = env(&[("HOME", "/h")]);
        assert_eq!(expand_variables("${HOME", &env), "${HOME");
        assert_eq!(expand_variables("a ${HOME b $HOME", &env), "a ${HOME b /h");
    }

    #[test]
    fn test_empty_braces() {
        assert_eq!(expand_variables("x${}y", &HashMap::new()), "xy");
    }

    #[test]
    fn test_expansion_ignores_quotes() {
        let env = env(&[("V", "v")]);
        assert_eq!(expand_variables("'$V' \"$V\"", &env), "'v' \"v\"");
    }

    #[test]
    fn test_non_ascii_passthrough() {
        let env = env(&[("V", "значение")]);
        assert_eq!(expand_variables("путь/$V/ёж", &env), "путь/значение/ёж");
    }
}
