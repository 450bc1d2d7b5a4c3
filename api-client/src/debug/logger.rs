//! Tracing subscriber initialization

use std::fs;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use super::config::{DebugConfig, DEFAULT_LOG_LEVEL};

/// Name of the rotated log file inside `log_dir`.
pub const LOG_FILE_NAME: &str = "api-client.log";

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Failed to create log directory: {0}")]
    LogDir(#[from] std::io::Error),

    #[error("Global subscriber already set: {0}")]
    Init(#[from] TryInitError),
}

/// Console layer; source locations are added when the level is debug or trace.
fn console_layer<S, W>(config: &DebugConfig, writer: W) -> impl Layer<S> + Send + Sync
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let locations = config.is_debug_enabled();
    fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_file(locations)
        .with_line_number(locations)
        .with_ansi(config.ansi)
}

/// Initialize the logging system
///
/// Sets up:
/// - An `EnvFilter` from `config.log_level`
/// - A stderr layer, with file and line numbers at debug/trace levels
/// - A daily-rotated, non-blocking file layer when `config.log_dir` is set
///
/// The returned guard flushes the file writer on drop; hold it for the
/// lifetime of the program.
pub fn init(config: &DebugConfig) -> Result<Option<WorkerGuard>, LoggerError> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer(config, std::io::stderr));

    let Some(log_dir) = &config.log_dir else {
        registry.try_init()?;
        tracing::debug!(log_level = %config.log_level, "Logging initialized");
        return Ok(None);
    };

    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI codes in log files

    registry.with(file_layer).try_init()?;

    tracing::info!(
        log_dir = %log_dir.display(),
        log_level = %config.log_level,
        "Logging initialized"
    );

    Ok(Some(guard))
}
