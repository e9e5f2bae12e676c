//! Frost monitor
//!
//! Glue between two upstream sources and the engine. Each update parses both
//! states, evaluates only when both hold a number, and produces a snapshot
//! from which the outputs are rendered. The monitor keeps no state between
//! updates; the host decides when to call it.

use frostguard_core::{evaluate, DomainError, Evaluation, Quantity};
use log::{debug, error, warn};
use serde::{Serialize, Serializer};

use crate::{
    config::MonitorConfig,
    error::MonitorResult,
    output::SensorOutput,
    state::SourceState,
};

/// Monitor for one temperature/humidity pair
#[derive(Debug, Clone)]
pub struct FrostMonitor {
    config: MonitorConfig,
    slug: String,
}

impl FrostMonitor {
    /// Create a monitor from a validated config
    pub fn new(config: MonitorConfig) -> MonitorResult<Self> {
        config.validate()?;
        let slug = config.slug();
        Ok(Self { config, slug })
    }

    /// Active configuration
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Evaluate the current raw source states
    pub fn update(&self, temperature: Option<&str>, humidity: Option<&str>) -> MonitorSnapshot {
        let temperature = self.parse_source("temperature", &self.config.temperature_sensor, temperature);
        let humidity = self.parse_source("humidity", &self.config.humidity_sensor, humidity);

        let (evaluation, error) = match (temperature.value(), humidity.value()) {
            (Some(t), Some(rh)) => match evaluate(t, rh) {
                Ok(eval) => {
                    debug!(
                        "{}: T={}°C RH={}% -> risk {}",
                        self.config.name, t, rh, eval.risk
                    );
                    (Some(eval), None)
                }
                Err(e) => {
                    warn!("{}: cannot evaluate T={}°C RH={}%: {}", self.config.name, t, rh, e);
                    (None, Some(e))
                }
            },
            _ => (None, None),
        };

        MonitorSnapshot {
            name: self.config.name.clone(),
            slug: self.slug.clone(),
            temperature,
            humidity,
            evaluation,
            error,
        }
    }

    fn parse_source(&self, kind: &str, source: &str, raw: Option<&str>) -> SourceState {
        let state = SourceState::parse(raw);
        if let SourceState::Invalid(raw) = &state {
            error!("Unable to parse {} from {}: {}", kind, source, raw);
        }
        state
    }
}

fn serialize_error<S: Serializer>(error: &Option<DomainError>, serializer: S) -> Result<S::Ok, S::Error> {
    match error {
        Some(e) => serializer.collect_str(e),
        None => serializer.serialize_none(),
    }
}

/// Outcome of one update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitorSnapshot {
    /// Monitor display name
    pub name: String,
    /// Monitor key prefix
    pub slug: String,
    /// Parsed temperature source
    pub temperature: SourceState,
    /// Parsed humidity source
    pub humidity: SourceState,
    /// Engine result when both sources held a number
    pub evaluation: Option<Evaluation>,
    /// Domain error when the engine rejected the numbers
    #[serde(serialize_with = "serialize_error")]
    pub error: Option<DomainError>,
}

impl MonitorSnapshot {
    /// Whether outputs carry values
    pub fn is_available(&self) -> bool {
        self.evaluation.is_some()
    }

    /// Output for one quantity
    pub fn output(&self, quantity: Quantity) -> SensorOutput {
        SensorOutput::build(
            &self.name,
            &self.slug,
            quantity,
            self.temperature.value(),
            self.humidity.value(),
            self.evaluation.as_ref(),
        )
    }

    /// Outputs for every quantity, in reporting order
    pub fn outputs(&self) -> Vec<SensorOutput> {
        Quantity::ALL.iter().map(|q| self.output(*q)).collect()
    }

    /// Outputs as a JSON document
    pub fn outputs_json(&self) -> MonitorResult<String> {
        Ok(serde_json::to_string(&self.outputs())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor() -> FrostMonitor {
        FrostMonitor::new(MonitorConfig::new("sensor.t", "sensor.h").with_name("Garden")).unwrap()
    }

    #[test]
    fn both_values_evaluate() {
        let snapshot = monitor().update(Some("20"), Some("50"));
        assert!(snapshot.is_available());
        assert_eq!(snapshot.error, None);
        assert_eq!(snapshot.output(Quantity::DewPoint).value, Some(9.25));
    }

    #[test]
    fn unavailable_source_skips_evaluation() {
        let snapshot = monitor().update(Some("unavailable"), Some("50"));
        assert!(!snapshot.is_available());
        assert_eq!(snapshot.error, None);
        let out = snapshot.output(Quantity::DewPoint);
        assert_eq!(out.value, None);
        assert_eq!(out.attributes.temperature, None);
        assert_eq!(out.attributes.humidity, Some(50.0));
    }

    #[test]
    fn invalid_source_skips_evaluation() {
        let snapshot = monitor().update(Some("20"), Some("humid"));
        assert!(!snapshot.is_available());
        assert_eq!(snapshot.humidity, SourceState::Invalid("humid".into()));
    }

    #[test]
    fn domain_error_is_recorded() {
        let snapshot = monitor().update(Some("20"), Some("0"));
        assert!(!snapshot.is_available());
        assert!(matches!(snapshot.error, Some(DomainError::HumidityOutOfDomain { .. })));
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert!(FrostMonitor::new(MonitorConfig::new("sensor.x", "sensor.x")).is_err());
    }
}
