//! Front-end configuration.
//!
//! Loaded from a TOML file given with `--config`. Every field has a default,
//! so an empty file is a valid configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shell::DEFAULT_PROMPT;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// VFS description file loaded at startup.
    #[serde(default)]
    pub vfs: Option<PathBuf>,

    /// Script run before the interactive loop.
    #[serde(default)]
    pub startup: Option<PathBuf>,

    /// Pause between startup script lines, in milliseconds.
    #[serde(default)]
    pub delay_ms: u64,

    /// Echo script lines behind the prompt marker.
    #[serde(default = "default_echo_input")]
    pub echo_input: bool,

    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// `tracing` filter directive, e.g. `vfs_shell=debug`.
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_echo_input() -> bool {
    true
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            vfs: None,
            startup: None,
            delay_ms: 0,
            echo_input: default_echo_input(),
            prompt: default_prompt(),
            log_level: None,
        }
    }
}

impl ShellConfig {
    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ShellConfig::from_toml("").unwrap();
        assert_eq!(config, ShellConfig::default());
        assert!(config.echo_input);
        assert_eq!(config.prompt, "$ ");
    }

    #[test]
    fn test_full_config() {
        let config = ShellConfig::from_toml(
            r#"
            vfs = "image.yaml"
            startup = "boot.sh"
            delay_ms = 250
            echo_input = false
            prompt = "vfs> "
            log_level = "vfs_shell=debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.vfs, Some(PathBuf::from("image.yaml")));
        assert_eq!(config.startup, Some(PathBuf::from("boot.sh")));
        assert_eq!(config.delay_ms, 250);
        assert!(!config.echo_input);
        assert_eq!(config.prompt, "vfs> ");
        assert_eq!(config.log_level.as_deref(), Some("vfs_shell=debug"));
    }

    #[test]
    fn test_bad_type_is_rejected() {
        assert!(ShellConfig::from_toml("delay_ms = \"soon\"").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = ShellConfig::load_from(Path::new("/no/such/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/no/such/config.toml"));
    }

    #[test]
    fn test_malformed_file() {
        let path = std::env::temp_dir().join(format!("vfs-shell-config-{}.toml", std::process::id()));
        std::fs::write(&path, "prompt = ").unwrap();
        let err = ShellConfig::load_from(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
