//! Core error types for plansage-core.
//!
//! Every fallible operation in the library returns [`CoreError`]. A failed
//! operation never leaves the calendar or the task list half-updated.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for plansage-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A value outside the accepted set (day/hour label, task field, selection).
    #[error("Invalid value for '{field}': {message}")]
    InvalidInput { field: String, message: String },

    /// Booking requested before any recommendations were computed.
    #[error("No recommendations available: compute recommendations before booking")]
    EmptySelection,

    /// Strict booking refused to overwrite an occupied cell.
    #[error("Slot {day} {hour} is already booked by '{occupant}'")]
    SlotOccupied {
        day: String,
        hour: String,
        occupant: String,
    },

    /// Recommendations requested before a fatigue check-in.
    #[error("No fatigue score recorded: check in before requesting recommendations")]
    MissingCheckIn,

    /// Task reference that is not in the task list.
    #[error("Unknown task: {0}")]
    UnknownTask(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Shorthand for [`CoreError::InvalidInput`].
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
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

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Could not determine where the configuration lives
    #[error("Could not resolve configuration directory: {0}")]
    NoConfigDir(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message_names_field() {
        let err = CoreError::invalid("day", "unknown label '토'");
        assert_eq!(err.to_string(), "Invalid value for 'day': unknown label '토'");
    }

    #[test]
    fn config_error_converts_into_core_error() {
        let err: CoreError = ConfigError::UnknownKey("ui.theme".into()).into();
        assert!(matches!(err, CoreError::Config(ConfigError::UnknownKey(_))));
    }
}
