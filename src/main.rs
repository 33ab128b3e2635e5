use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vfs_shell::session::{banner, config_report, drive, run_startup_script};
use vfs_shell::{LineOutcome, OutputSink, Shell, ShellConfig, ShellOptions, StdinSource, StdioSink};

#[derive(Parser)]
#[command(name = "vfs-shell")]
#[command(about = "A shell emulator over an in-memory virtual file system")]
#[command(version)]
struct Cli {
    /// VFS description file (.json, .yaml, .yml or .toml)
    #[arg(long = "vfs")]
    vfs: Option<PathBuf>,

    /// Script to run before reading from stdin
    #[arg(long = "startup")]
    startup: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Pause between startup script lines, in milliseconds
    #[arg(long = "delay-ms")]
    delay_ms: Option<u64>,

    /// Do not echo script lines behind the prompt
    #[arg(long = "no-echo")]
    no_echo: bool,

    /// Log filter directive (overrides RUST_LOG)
    #[arg(long = "log-level")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match ShellConfig::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(2);
            }
        },
        None => ShellConfig::default(),
    };
    if cli.vfs.is_some() {
        config.vfs = cli.vfs;
    }
    if cli.startup.is_some() {
        config.startup = cli.startup;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.delay_ms = delay_ms;
    }
    if cli.no_echo {
        config.echo_input = false;
    }
    if cli.log_level.is_some() {
        config.log_level = cli.log_level;
    }

    let filter = match &config.log_level {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vfs_shell=warn")),
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mut sink = StdioSink;
    let mut shell = Shell::new(ShellOptions {
        env: Some(std::env::vars().collect()),
        prompt: Some(config.prompt.clone()),
        ..Default::default()
    });

    sink.write_line(&banner());
    for line in config_report(config.vfs.as_deref(), config.startup.as_deref()) {
        sink.write_line(&line);
    }

    if let Some(path) = &config.vfs {
        match shell.load_vfs(path) {
            Ok(summary) => tracing::info!(
                path = %path.display(),
                directories = summary.directories,
                files = summary.files,
                "vfs ready"
            ),
            Err(e) => sink.write_error(&format!("error: {}", e)),
        }
    }

    if let Some(path) = &config.startup {
        let delay = Duration::from_millis(config.delay_ms);
        let outcome = run_startup_script(&mut shell, path, delay, config.echo_input, &mut sink).await;
        if outcome == LineOutcome::Terminate {
            std::process::exit(shell.last_exit_code());
        }
    }

    // Piped input is echoed like a transcript; a terminal already shows it.
    let interactive = std::io::stdin().is_terminal();
    let mut source = StdinSource::new(interactive.then(|| config.prompt.clone()));
    let _ = drive(&mut shell, &mut source, !interactive, &mut sink).await;

    std::process::exit(shell.last_exit_code());
}
