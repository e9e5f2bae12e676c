//! Upstream source states
//!
//! Hosts report sensor states as strings. Only a finite number may reach the
//! engine; the sentinels `unknown` and `unavailable`, a missing source and
//! anything unparsable all mean "skip this evaluation".

use serde::Serialize;

/// Sentinel for a source that has not reported yet
pub const STATE_UNKNOWN: &str = "unknown";

/// Sentinel for a source that is offline
pub const STATE_UNAVAILABLE: &str = "unavailable";

/// Parsed state of one source
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SourceState {
    /// Finite numeric reading
    Value(f64),
    /// Missing, unknown or unavailable
    Unavailable,
    /// Present but not a finite number
    Invalid(String),
}

impl SourceState {
    /// Classify a raw state string
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return SourceState::Unavailable;
        };

        let trimmed = raw.trim();
        if trimmed == STATE_UNKNOWN || trimmed == STATE_UNAVAILABLE {
            return SourceState::Unavailable;
        }

        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => SourceState::Value(value),
            _ => SourceState::Invalid(raw.to_string()),
        }
    }

    /// Numeric value, if any
    pub fn value(&self) -> Option<f64> {
        match self {
            SourceState::Value(v) => Some(*v),
            _ => None,
        }
    }
}
