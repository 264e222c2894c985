//! Logging setup for the application.
//!
//! Installs a global tracing subscriber with two sinks: stdout, and a log file
//! named after the launch time inside the application `logs` directory. Only the
//! newest [`MAX_LOG_FILES`] launch logs are kept.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

use crate::app_dirs;

/// Maximum number of log files to retain.
pub const MAX_LOG_FILES: usize = 10;
const LOG_FILE_PREFIX: &str = "course_recommender";
const DEFAULT_FILTER: &str = "info";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Log directory unavailable: {0}")]
    Directory(#[from] app_dirs::AppDirError),
    #[error("Failed to read log directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to remove old log file {path}: {source}")]
    RemoveFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to format log filename time: {0}")]
    FormatTime(#[from] time::error::Format),
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Initialize tracing for this launch.
///
/// Subsequent calls are no-ops. Errors are returned so the caller can keep running
/// without a log file.
pub fn init() -> Result<PathBuf, LoggingError> {
    let dir = app_dirs::logs_dir()?;
    init_in(&dir)
}

fn init_in(dir: &Path) -> Result<PathBuf, LoggingError> {
    let file_name = log_file_name(launch_time())?;
    let log_path = dir.join(&file_name);
    if LOG_GUARD.get().is_some() {
        return Ok(log_path);
    }

    let (file_writer, guard) = tracing_appender::non_blocking(rolling::never(dir, &file_name));
    let timer = fmt::time::OffsetTime::new(local_offset(), DISPLAY_FORMAT);
    let subscriber = Registry::default()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_timer(timer.clone())
                .with_writer(std::io::stdout),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_timer(timer)
                .with_writer(file_writer),
        );
    tracing::subscriber::set_global_default(subscriber)?;
    let _ = LOG_GUARD.set(guard);

    let removed = prune_logs(dir, MAX_LOG_FILES)?;
    tracing::info!(
        "Logging to {} ({} old log files removed)",
        log_path.display(),
        removed
    );
    Ok(log_path)
}

const DISPLAY_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Delete the oldest launch logs beyond `keep`, returning how many were removed.
///
/// File names embed a sortable timestamp, so lexical order is launch order.
fn prune_logs(dir: &Path, keep: usize) -> Result<usize, LoggingError> {
    let mut logs: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|source| LoggingError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_launch_log(path))
        .collect();
    logs.sort();
    let excess = logs.len().saturating_sub(keep);
    for path in &logs[..excess] {
        fs::remove_file(path).map_err(|source| LoggingError::RemoveFile {
            path: path.clone(),
            source,
        })?;
    }
    Ok(excess)
}

fn is_launch_log(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    path.is_file() && name.starts_with(LOG_FILE_PREFIX) && name.ends_with(".log")
}

fn log_file_name(now: OffsetDateTime) -> Result<String, LoggingError> {
    const NAME_FORMAT: &[FormatItem<'_>] =
        format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");
    Ok(format!("{LOG_FILE_PREFIX}_{}.log", now.format(NAME_FORMAT)?))
}

fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

fn launch_time() -> OffsetDateTime {
    static LAUNCH: OnceLock<OffsetDateTime> = OnceLock::new();
    *LAUNCH.get_or_init(|| {
        OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
    })
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
