mod config;
mod plan_store;

pub use config::{CalendarConfig, Config, SummaryConfig};
pub use plan_store::PlanStore;

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/studyplan/`, creating it if needed.
///
/// Falls back to `./.config/studyplan/` when no home directory is known.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("studyplan");

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
