//! Output Sinks
//!
//! Append-only destinations for the lines a shell produces. The shell never
//! reads back from a sink.

use std::io::Write;

pub trait OutputSink {
    /// Append a regular output line.
    fn write_line(&mut self, line: &str);

    /// Append an error line. Defaults to the regular stream.
    fn write_error(&mut self, line: &str) {
        self.write_line(line);
    }
}

/// Collects every line in memory, errors included, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    pub lines: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the collected lines.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl OutputSink for BufferSink {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Writes output lines to stdout and error lines to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdioSink;

impl OutputSink for StdioSink {
    fn write_line(&mut self, line: &str) {
        let mut out = std::io::stdout().lock();
        // A closed stdout leaves nowhere to report to.
        let _ = writeln!(out, "{}", line);
        let _ = out.flush();
    }

    fn write_error(&mut self, line: &str) {
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }
}
