//! Subscriber setup: rotating log file plus stderr console output

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};
use trivia_infrastructure::FileLoggingConfig;

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Console filter chosen by `-v` count
pub fn console_filter(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    }
}

/// Console-only logging, used by commands that never run the pipeline
pub fn init_console(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(console_filter(verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Daily-rotated log file under `logging.directory`
///
/// The directory must exist before the appender prunes old files.
fn file_appender(config: &FileLoggingConfig) -> Result<RollingFileAppender> {
    std::fs::create_dir_all(&config.directory)
        .with_context(|| format!("failed to create log directory '{}'", config.directory))?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(config.file_name.as_str())
        .max_log_files(config.max_files.max(1))
        .build(&config.directory)
        .with_context(|| format!("failed to open log directory '{}'", config.directory))
}

/// Install the file and console layers
///
/// The returned guard flushes the non-blocking writer on drop and must live
/// until the process exits.
pub fn init(verbose: u8, config: &FileLoggingConfig) -> Result<WorkerGuard> {
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender(config)?);

    let file_filter = EnvFilter::try_new(&config.level)
        .with_context(|| format!("invalid logging.level '{}'", config.level))?;

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_filter(file_filter);

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_filter(verbose));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}
