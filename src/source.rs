//! Line Sources
//!
//! Where raw input lines come from. Sources own any pacing between lines;
//! the shell itself never waits.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};

/// A finite, lazily produced sequence of raw lines.
#[async_trait]
pub trait LineSource: Send {
    /// Next line without its terminator, or `None` once exhausted.
    async fn next_line(&mut self) -> Option<String>;
}

/// Interactive input from the process stdin.
pub struct StdinSource {
    lines: Lines<BufReader<Stdin>>,
    prompt: Option<String>,
}

impl StdinSource {
    /// `prompt` is printed before every read when set.
    pub fn new(prompt: Option<String>) -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            prompt,
        }
    }
}

#[async_trait]
impl LineSource for StdinSource {
    async fn next_line(&mut self) -> Option<String> {
        if let Some(prompt) = &self.prompt {
            let mut out = tokio::io::stdout();
            let _ = out.write_all(prompt.as_bytes()).await;
            let _ = out.flush().await;
        }
        match self.lines.next_line().await {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(error = %e, "stdin read failed");
                None
            }
        }
    }
}

/// Lines of a script file, optionally paced.
pub struct ScriptSource {
    path: PathBuf,
    lines: VecDeque<String>,
    delay: Duration,
    started: bool,
}

impl ScriptSource {
    pub async fn open(path: impl AsRef<Path>, delay: Duration) -> std::io::Result<Self> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path).await?;
        let mut source = Self::from_text(&text, delay);
        source.path = path.to_path_buf();
        Ok(source)
    }

    pub fn from_text(text: &str, delay: Duration) -> Self {
        Self {
            path: PathBuf::new(),
            lines: text.lines().map(str::to_string).collect(),
            delay,
            started: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines not yet handed out.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

#[async_trait]
impl LineSource for ScriptSource {
    async fn next_line(&mut self) -> Option<String> {
        if self.lines.is_empty() {
            return None;
        }
        // the delay separates lines, so the first one is not held back
        if self.started && !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.started = true;
        self.lines.pop_front()
    }
}
