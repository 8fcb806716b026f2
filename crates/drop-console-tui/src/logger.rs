//! Logging setup: a timestamped file plus the in-app console
//!
//! Log file location depends on build type:
//! - Debug builds: current working directory (for development convenience)
//! - Release builds: cache directory (~/.cache/drop-console/ on Linux)

use anyhow::{Context, Result};
use drop_console::{HubLogger, LogHub};
use simplelog::{CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

/// Get the log file path based on build type
fn log_file_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let filename = format!("debug-{}.log", timestamp);

    if cfg!(debug_assertions) {
        PathBuf::from(filename)
    } else {
        drop_console_config::cache_dir()
            .map(|dir| dir.join(&filename))
            .unwrap_or_else(|_| PathBuf::from(filename))
    }
}

/// Level for the log file, taken from RUST_LOG (debug when unset)
fn file_level() -> LevelFilter {
    std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| drop_console_config::console_config::parse_level(&v))
        .unwrap_or(LevelFilter::Debug)
}

/// Initialize logging into both the log file and `hub`.
///
/// Returns the path of the log file.
pub fn init(hub: LogHub, console_level: LevelFilter) -> Result<PathBuf> {
    let log_file = log_file_path();

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build();

    let file = File::create(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    let loggers: Vec<Box<dyn SharedLogger>> = vec![
        WriteLogger::new(file_level(), config, file),
        HubLogger::new(hub, console_level),
    ];
    CombinedLogger::init(loggers).context("Failed to initialize logger")?;

    log::debug!("Logging to {}", log_file.display());
    Ok(log_file)
}
