//! Monitor configuration
//!
//! A monitor pairs one temperature source with one humidity source under a
//! display name. Configuration arrives as JSON using the same keys the host
//! stores:
//!
//! ```json
//! {
//!   "name": "Greenhouse",
//!   "temperature_sensor": "sensor.greenhouse_temperature",
//!   "humidity_sensor": "sensor.greenhouse_humidity"
//! }
//! ```
//!
//! `name` defaults to `"Frost Risks"`. Whether the sources exist is the host's
//! business; this module only checks the shape.

use serde::{Deserialize, Serialize};

use crate::error::{MonitorError, MonitorResult};

/// Display name used when none is configured
pub const DEFAULT_NAME: &str = "Frost Risks";

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

/// Configuration for one monitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitorConfig {
    /// Display name, prefixed to every output name
    #[serde(default = "default_name")]
    pub name: String,

    /// Identifier of the temperature source (°C)
    pub temperature_sensor: String,

    /// Identifier of the relative humidity source (%)
    pub humidity_sensor: String,
}

impl MonitorConfig {
    /// Create a config with the default name
    pub fn new(temperature_sensor: impl Into<String>, humidity_sensor: impl Into<String>) -> Self {
        Self {
            name: default_name(),
            temperature_sensor: temperature_sensor.into(),
            humidity_sensor: humidity_sensor.into(),
        }
    }

    /// Replace the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> MonitorResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check required fields
    pub fn validate(&self) -> MonitorResult<()> {
        if self.name.trim().is_empty() {
            return Err(MonitorError::InvalidConfig("name must not be empty".into()));
        }
        if self.temperature_sensor.trim().is_empty() {
            return Err(MonitorError::InvalidConfig("temperature_sensor must not be empty".into()));
        }
        if self.humidity_sensor.trim().is_empty() {
            return Err(MonitorError::InvalidConfig("humidity_sensor must not be empty".into()));
        }
        if self.temperature_sensor == self.humidity_sensor {
            return Err(MonitorError::InvalidConfig(format!(
                "temperature and humidity must come from different sources, both are {}",
                self.temperature_sensor
            )));
        }
        Ok(())
    }

    /// Name lowered to `[a-z0-9_]`, used as the prefix of output keys
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.name.len());
        for c in self.name.trim().chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if !slug.ends_with('_') {
                slug.push('_');
            }
        }
        slug.trim_matches('_').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_with_default_name() {
        let config = MonitorConfig::from_json(
            r#"{"temperature_sensor": "sensor.t", "humidity_sensor": "sensor.h"}"#,
        )
        .unwrap();
        assert_eq!(config.name, DEFAULT_NAME);
        assert_eq!(config, MonitorConfig::new("sensor.t", "sensor.h"));
    }

    #[test]
    fn rejects_unknown_fields() {
        let result = MonitorConfig::from_json(
            r#"{"temperature_sensor": "a", "humidity_sensor": "b", "pressure_sensor": "c"}"#,
        );
        assert!(matches!(result, Err(MonitorError::Json(_))));
    }

    #[test]
    fn rejects_missing_source() {
        let result = MonitorConfig::from_json(r#"{"temperature_sensor": "a"}"#);
        assert!(matches!(result, Err(MonitorError::Json(_))));
    }

    #[test]
    fn rejects_empty_and_shared_sources() {
        assert!(MonitorConfig::new("", "sensor.h").validate().is_err());
        assert!(MonitorConfig::new("sensor.t", "  ").validate().is_err());
        assert!(MonitorConfig::new("sensor.x", "sensor.x").validate().is_err());
        assert!(MonitorConfig::new("sensor.t", "sensor.h").with_name(" ").validate().is_err());
    }

    #[test]
    fn slug_is_lowercase_snake() {
        assert_eq!(MonitorConfig::new("a", "b").slug(), "frost_risks");
        assert_eq!(MonitorConfig::new("a", "b").with_name("Back Yard #2").slug(), "back_yard_2");
    }
}
