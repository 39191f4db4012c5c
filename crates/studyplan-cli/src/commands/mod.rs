pub mod calendar;
pub mod config;
pub mod plan;

use std::path::Path;

use studyplan_core::{Config, PlanStore, ScheduleEngine};

/// Plan state shared by the plan and calendar commands.
pub struct PlanContext {
    pub config: Config,
    pub store: PlanStore,
    pub engine: ScheduleEngine,
}

impl PlanContext {
    /// Load config and the saved plan. `file` overrides the configured plan path.
    pub fn open(file: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut ctx = Self::open_empty(file)?;
        ctx.store.load_into(&mut ctx.engine)?;
        Ok(ctx)
    }

    /// Like [`PlanContext::open`] but without reading the plan file, for
    /// commands that replace the whole plan. A corrupt file cannot block them.
    pub fn open_empty(file: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let config = Config::load_or_default();
        let store = match file {
            Some(path) => PlanStore::with_path(path),
            None => PlanStore::open(&config)?,
        };
        tracing::debug!(path = %store.path().display(), "using plan file");
        Ok(Self {
            config,
            store,
            engine: ScheduleEngine::new(),
        })
    }

    /// Write the current plan back to the plan file.
    pub fn persist(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.store.save(&self.engine)?;
        Ok(())
    }
}
