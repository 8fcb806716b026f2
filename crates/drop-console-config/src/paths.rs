//! Data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.cache/drop-console/`
//! - macOS: `~/Library/Caches/drop-console/`
//! - Windows: `%LOCALAPPDATA%\drop-console\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "drop-console";

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;
    Ok(dir)
}

/// Get the home directory config file path (~/.drop-console.toml)
pub fn home_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(crate::CONFIG_FILE))
}
