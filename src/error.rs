//! Input contract violations.

use thiserror::Error as ThisError;

/// Reasons a planning input is rejected.
///
/// Planner entry points never return these to interactive callers; they log
/// the error and fall back to the unchanged input. The validation functions
/// expose them for callers that want to surface a warning.
#[derive(Debug, ThisError)]
pub enum PlanError {
    #[error("waypoint {index} has invalid coordinates ({latitude}, {longitude})")]
    InvalidWaypoint {
        index: usize,
        latitude: f64,
        longitude: f64,
    },
    #[error("candidate {source_id:?} has invalid coordinates ({latitude}, {longitude})")]
    InvalidCandidate {
        source_id: String,
        latitude: f64,
        longitude: f64,
    },
    #[error("candidate source id {0:?} appears more than once")]
    DuplicateSourceId(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("failed to parse config")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;

impl PlanError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
