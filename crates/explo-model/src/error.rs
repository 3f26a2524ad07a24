//! Error types for scenario records.

use thiserror::Error;
use uuid::Uuid;

/// Errors raised when records fall outside their documented domain or a
/// store lookup misses.
#[derive(Error, Debug)]
pub enum ModelError {
    /// A vein body field is outside its valid range.
    #[error("invalid body '{name}': {field} {reason}")]
    InvalidBody {
        /// Display name of the body.
        name: String,
        /// Offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// Classification thresholds are inconsistent.
    #[error("invalid classification thresholds: {0}")]
    InvalidThresholds(String),

    /// Drill campaign parameters are inconsistent.
    #[error("invalid drill parameters: {0}")]
    InvalidDrillParameters(String),

    /// A grade unit label could not be recognised.
    #[error("unknown grade unit '{0}' (expected a label containing 'g/t' or '%')")]
    UnknownGradeUnit(String),

    /// No scenario with this id in the store.
    #[error("scenario {0} not found")]
    ScenarioNotFound(Uuid),

    /// No body with this id in the current scenario.
    #[error("body {0} not found")]
    BodyNotFound(Uuid),

    /// Store (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
