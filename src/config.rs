//! Data directory and store location

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Environment variable overriding the data directory (tests, scripting)
pub const DATA_DIR_ENV: &str = "STUDY_HELPER_DATA_DIR";

/// Get the study-helper data directory
/// - macOS: ~/Library/Application Support/study-helper/
/// - Linux: ~/.local/share/study-helper/
/// - Windows: %APPDATA%/study-helper/
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let base = dirs::data_dir().context("Could not determine data directory")?;
    Ok(base.join("study-helper"))
}

/// Path of the course store database
pub fn store_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("study.db"))
}
