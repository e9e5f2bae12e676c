//! Host-side errors
//!
//! Only configuration can fail here. Domain errors from the engine are not
//! converted: they make a snapshot's outputs unavailable and stay attached to
//! the snapshot.

use thiserror::Error;

/// Result type for monitor operations
pub type MonitorResult<T> = Result<T, MonitorError>;

/// Monitor errors
#[derive(Debug, Error)]
pub enum MonitorError {
    /// A configuration field is missing, empty or inconsistent
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed
    #[error("Malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}
