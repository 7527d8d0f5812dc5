/// env_logger setup shared by every subcommand
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_FILE: &str = "nextstep.log";

/// Where log records end up for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    File(PathBuf),
    Stderr,
}

/// Fallback log file for the interactive UI when stderr is the terminal
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_LOG_FILE)
}

/// An explicit `--log-file` always wins. The TUI owns the terminal, so when
/// stderr is that terminal the records go to the default file instead.
pub fn log_destination(
    log_file: Option<&Path>,
    interactive: bool,
    stderr_is_terminal: bool,
) -> LogDestination {
    match log_file {
        Some(path) => LogDestination::File(path.to_path_buf()),
        None if interactive && stderr_is_terminal => LogDestination::File(default_log_path()),
        None => LogDestination::Stderr,
    }
}

pub fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<LogDestination> {
    let destination = log_destination(log_file, interactive, io::stderr().is_terminal());

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    if let LogDestination::File(path) = &destination {
        let file = File::create(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();

    if let LogDestination::File(path) = &destination {
        log::info!("[CLI] Logging to {}", path.display());
    }
    Ok(destination)
}
