//! Core error types for estuda-core.
//!
//! One thiserror hierarchy for the whole library: reducer preconditions,
//! storage, configuration and curriculum parsing each get their own enum,
//! unified under [`CoreError`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for estuda-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A state transition was applied with an unmet precondition
    #[error("Transition error: {0}")]
    Transition(#[from] TransitionError),

    /// Snapshot / live-state storage errors
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Curriculum parsing errors
    #[error("Curriculum error: {0}")]
    Curriculum(#[from] CurriculumError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Rejected state transitions.
///
/// The reducer never has undefined behavior: an intent whose precondition
/// does not hold returns one of these instead of mutating state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// A second session was started while one is still active or paused
    #[error("a session is already active (id: {current_id})")]
    SessionAlreadyActive { current_id: String },

    /// A session-scoped intent arrived with no current session
    #[error("no session is currently active")]
    NoActiveSession,

    /// ResolveDistraction referenced an id missing from the global log
    #[error("no distraction with id '{0}'")]
    UnknownDistraction(String),
}

/// Snapshot storage errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The data directory could not be created or resolved
    #[error("Failed to resolve data directory: {0}")]
    DataDirUnavailable(String),

    /// Failed to write a blob
    #[error("Failed to save {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },
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

    /// Unknown dot-path key in get/set
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Curriculum data-source errors.
#[derive(Error, Debug)]
pub enum CurriculumError {
    /// The curriculum document could not be parsed
    #[error("Failed to parse curriculum document: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
