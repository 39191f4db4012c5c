//! # Study Planner Core Library
//!
//! This library provides the business logic for the study planner: turning a
//! subject and a start date into a spaced-repetition review schedule. All
//! operations are exposed through the standalone `studyplan` CLI, which is a
//! thin shell over this crate.
//!
//! ## Architecture
//!
//! - **Schedule Engine**: Generates reviews at fixed day offsets and keeps the
//!   aggregate date -> labels index
//! - **Density**: Color palette for calendar days by number of reviews
//! - **Summary**: Text summary and calendar marks rendered from a snapshot
//! - **Storage**: JSON plan persistence and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`ScheduleEngine`]: Review planning and the schedule index
//! - [`PlanStore`]: Plan file persistence
//! - [`Config`]: Application configuration management

pub mod density;
pub mod error;
pub mod plan;
pub mod storage;
pub mod summary;

pub use density::{density_color, legend, legend_text, DensityColor};
pub use error::{ConfigError, CoreError, FormatError, ValidationError};
pub use plan::{PersistedPlan, ReviewEntry, ScheduleEngine, ScheduleIndex, StudySession};
pub use storage::{Config, PlanStore};
pub use summary::{calendar_marks, render_summary, CalendarMark};
