//! Session driving: feeds lines from a source into a shell until the source
//! runs dry or a command asks to terminate.

use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use crate::shell::{LineOutcome, Shell};
use crate::sink::OutputSink;
use crate::source::{LineSource, ScriptSource};

/// Run every line of `source` through `shell`.
pub async fn drive(
    shell: &mut Shell,
    source: &mut dyn LineSource,
    echo_input: bool,
    sink: &mut dyn OutputSink,
) -> LineOutcome {
    while let Some(line) = source.next_line().await {
        if shell.run_line(&line, echo_input, sink) == LineOutcome::Terminate {
            return LineOutcome::Terminate;
        }
    }
    LineOutcome::Continue
}

/// Run a startup script between begin/end markers.
///
/// A missing or unreadable script is reported and the session goes on.
/// `exit` inside the script ends the session, skipping the end marker.
pub async fn run_startup_script(
    shell: &mut Shell,
    path: &Path,
    delay: Duration,
    echo_input: bool,
    sink: &mut dyn OutputSink,
) -> LineOutcome {
    let mut source = match ScriptSource::open(path, delay).await {
        Ok(source) => source,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            sink.write_error(&format!("error: startup script not found: {}", path.display()));
            return LineOutcome::Continue;
        }
        Err(e) => {
            sink.write_error(&format!("error: cannot read startup script {}: {}", path.display(), e));
            return LineOutcome::Continue;
        }
    };

    tracing::debug!(path = %path.display(), lines = source.remaining(), "startup script");
    sink.write_line(&format!("--- Running startup script: {} ---", path.display()));
    let outcome = drive(shell, &mut source, echo_input, sink).await;
    if outcome == LineOutcome::Continue {
        sink.write_line(&format!("--- End of script: {} ---", path.display()));
    }
    outcome
}

/// `VFS shell emulator [<user>@<host>]`
pub fn banner() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "user".to_string());
    format!("VFS shell emulator [{}@{}]", user, host_name())
}

/// Startup lines naming the configured VFS image and script.
pub fn config_report(vfs: Option<&Path>, startup: Option<&Path>) -> Vec<String> {
    let show = |path: Option<&Path>| path.map_or_else(|| "none".to_string(), |p| p.display().to_string());
    vec![
        format!("[DEBUG] vfs_path = {}", show(vfs)),
        format!("[DEBUG] startup_script = {}", show(startup)),
    ]
}

fn host_name() -> String {
    let mut buf = [0u8; 256];
    // SAFETY: buf is writable for buf.len() bytes.
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr() as *mut libc::c_char, buf.len()) };
    if rc != 0 {
        return "localhost".to_string();
    }
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..end]).into_owned()
}
