//! JSON persistence for the schedule index.
//!
//! The file is a single object mapping `YYYY-MM-DD` keys to arrays of
//! labels. A missing file means no plan has been saved yet.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{data_dir, Config};
use crate::error::Result;
use crate::plan::{PersistedPlan, ScheduleEngine};

/// File that backs a [`ScheduleEngine`].
#[derive(Debug, Clone)]
pub struct PlanStore {
    path: PathBuf,
}

impl PlanStore {
    pub const DEFAULT_FILE_NAME: &'static str = "study_plan.json";

    /// Open the store configured in `config`, or the default file in the
    /// data directory.
    pub fn open(config: &Config) -> Result<Self> {
        let path = match &config.plan_file {
            Some(file) => PathBuf::from(file),
            None => data_dir()?.join(Self::DEFAULT_FILE_NAME),
        };
        Ok(Self { path })
    }

    /// Store backed by a caller-chosen path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved plan into `engine`.
    ///
    /// Returns `Ok(false)` without touching the engine when the file does
    /// not exist. Any other failure leaves the engine unchanged.
    pub fn load_into(&self, engine: &mut ScheduleEngine) -> Result<bool> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no saved plan found, starting fresh");
                return Ok(false);
            }
            Err(e) => return Err(e.into()),
        };

        let data: PersistedPlan = serde_json::from_str(&content)?;
        engine.deserialize(data)?;
        tracing::info!(path = %self.path.display(), dates = engine.len(), "loaded plan");
        Ok(true)
    }

    pub fn save(&self, engine: &ScheduleEngine) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&engine.serialize())?;
        std::fs::write(&self.path, content)?;
        tracing::info!(path = %self.path.display(), dates = engine.len(), "saved plan");
        Ok(())
    }
}
