//! Configuration and file management for drop-console
//!
//! This crate provides:
//! - Directory paths for log files
//! - Configuration file lookup (TOML)
//! - Console configuration (ConsoleConfig) and its conversion into core settings

pub mod config_file;
pub mod console_config;
pub mod paths;

pub use config_file::{load_config_file, CONFIG_FILE};
pub use console_config::{ConsoleConfig, TriggerConfig};
pub use paths::cache_dir;
