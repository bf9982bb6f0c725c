//! Logging bootstrap.
//!
//! # Responsibility
//! - Initialize rolling file logs exactly once per process.
//!
//! # Invariants
//! - Re-initialization with the same level and directory is a no-op.
//! - Conflicting re-initialization is rejected, never silently applied.
//! - Initialization must not panic.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_BASENAME: &str = "gatehouse";
const MAX_LOG_FILE_BYTES: u64 = 5 * 1024 * 1024;
const KEPT_LOG_FILES: usize = 3;

static ACTIVE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    dir: PathBuf,
    _handle: LoggerHandle,
}

/// Initializes file logging at `level` under `log_dir`.
///
/// # Errors
/// - Unsupported level or empty/relative `log_dir`.
/// - Logging already active with a different level or directory.
/// - Logger backend setup failure.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level = normalize_level(level)?;
    let dir = normalize_dir(log_dir)?;

    let state = ACTIVE.get_or_try_init(|| start_logger(level, dir.clone()))?;
    if state.dir != dir || state.level != level {
        return Err(format!(
            "logging already active with level `{}` at `{}`",
            state.level,
            state.dir.display()
        ));
    }
    Ok(())
}

/// Returns `(level, log_dir)` when logging is active.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE.get().map(|state| (state.level, state.dir.clone()))
}

/// Default log level for the current build mode.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(level: &'static str, dir: PathBuf) -> Result<LoggingState, String> {
    std::fs::create_dir_all(&dir).map_err(|err| {
        format!("failed to create log directory `{}`: {err}", dir.display())
    })?;

    let handle = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_file(FileSpec::default().directory(dir.as_path()).basename(LOG_BASENAME))
        .rotate(
            Criterion::Size(MAX_LOG_FILE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEPT_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    info!(
        "event=core_init module=gatehouse_core status=ok level={level} log_dir={} version={}",
        dir.display(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(LoggingState {
        level,
        dir,
        _handle: handle,
    })
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn normalize_dir(log_dir: &str) -> Result<PathBuf, String> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(format!("log_dir must be an absolute path, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}
