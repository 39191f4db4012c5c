//! Core error types for studyplan-core.
//!
//! This module defines the error hierarchy using thiserror so the shell can
//! surface every failure to the user with its underlying cause.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studyplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Rejected planner input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Persisted plan could not be interpreted
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors raised before any state is touched.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Subject was empty or only whitespace
    #[error("Please enter a subject.")]
    EmptySubject,

    /// Start date plus an offset falls outside the supported calendar
    #[error("Start date {start} cannot be offset by {offset} days")]
    DateOutOfRange { start: chrono::NaiveDate, offset: u64 },
}

/// Errors raised while reading a persisted plan.
#[derive(Error, Debug)]
pub enum FormatError {
    /// A key was not a `YYYY-MM-DD` date
    #[error("Invalid date key '{key}': {source}")]
    InvalidDate {
        key: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Data directory could not be created
    #[error("Failed to access data directory: {0}")]
    DataDir(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
