//! Evaluation pipeline
//!
//! One call turns a temperature/humidity pair into the full metrics record
//! and a risk level:
//!
//! ```text
//! (T, RH) ──► absolute humidity
//!         ├─► dew point ──► frost point
//!         │            └──► freezing point
//!         ├─► wet bulb
//!         └─► vapor pressure ──► humidity ratio
//!
//! (T, dp, wb, fp, ah) ──► risk ladders ──► RiskLevel
//! ```
//!
//! Nothing is cached between calls; evaluations are independent and can run
//! on any number of threads at once.

use crate::{
    errors::DomainResult,
    psychrometrics,
    quantities::Quantity,
    risk::{FrostRiskClassifier, RiskFactors, RiskLevel},
    traits::RiskClassifier,
};

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// One temperature/humidity pair
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    /// Dry-bulb air temperature (°C)
    pub temperature: f64,
    /// Relative humidity (%), nominally 0-100
    pub humidity: f64,
}

impl Reading {
    /// Create a reading. Values are checked when evaluated, not here.
    pub const fn new(temperature: f64, humidity: f64) -> Self {
        Self { temperature, humidity }
    }

    /// Derive every metric
    pub fn metrics(&self) -> DomainResult<DerivedMetrics> {
        DerivedMetrics::compute(self.temperature, self.humidity)
    }

    /// Derive every metric and classify with the default ladders
    pub fn evaluate(&self) -> DomainResult<Evaluation> {
        self.evaluate_with(&FrostRiskClassifier)
    }

    /// Derive every metric and classify with a custom classifier
    pub fn evaluate_with<C: RiskClassifier>(&self, classifier: &C) -> DomainResult<Evaluation> {
        let metrics = self.metrics().map_err(|e| {
            log_warn!(
                "evaluation failed for T={}°C RH={}%: {}",
                self.temperature,
                self.humidity,
                e
            );
            e
        })?;

        let factors = RiskFactors::from_metrics(self.temperature, &metrics);
        let risk = classifier.classify(&factors);
        log_debug!(
            "T={}°C RH={}% -> dp={} fp={} wb={} ah={} risk={}",
            self.temperature,
            self.humidity,
            metrics.dew_point,
            metrics.freezing_point,
            metrics.wet_bulb,
            metrics.absolute_humidity,
            risk.value()
        );

        Ok(Evaluation { reading: *self, metrics, risk })
    }
}

/// Every quantity derived from one reading
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedMetrics {
    /// g/m³
    pub absolute_humidity: f64,
    /// °C
    pub dew_point: f64,
    /// °C
    pub frost_point: f64,
    /// °C
    pub freezing_point: f64,
    /// °C
    pub wet_bulb: f64,
    /// hPa
    pub vapor_pressure: f64,
    /// kg/kg
    pub humidity_ratio: f64,
}

impl DerivedMetrics {
    /// Run the whole formula library on one pair
    pub fn compute(temperature: f64, humidity: f64) -> DomainResult<Self> {
        Ok(Self {
            absolute_humidity: psychrometrics::absolute_humidity(temperature, humidity)?,
            dew_point: psychrometrics::dew_point(temperature, humidity)?,
            frost_point: psychrometrics::frost_point(temperature, humidity)?,
            freezing_point: psychrometrics::freezing_point(temperature, humidity)?,
            wet_bulb: psychrometrics::wet_bulb(temperature, humidity)?,
            vapor_pressure: psychrometrics::vapor_pressure(temperature, humidity)?,
            humidity_ratio: psychrometrics::humidity_ratio(temperature, humidity)?,
        })
    }
}

/// Result of one evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// Inputs as supplied
    pub reading: Reading,
    /// Derived quantities
    pub metrics: DerivedMetrics,
    /// Frost risk level
    pub risk: RiskLevel,
}

impl Evaluation {
    /// Value of one quantity; the risk level is reported as a float
    pub fn value(&self, quantity: Quantity) -> f64 {
        let m = &self.metrics;
        match quantity {
            Quantity::AbsoluteHumidity => m.absolute_humidity,
            Quantity::DewPoint => m.dew_point,
            Quantity::FrostPoint => m.frost_point,
            Quantity::FreezingPoint => m.freezing_point,
            Quantity::WetBulb => m.wet_bulb,
            Quantity::VaporPressure => m.vapor_pressure,
            Quantity::HumidityRatio => m.humidity_ratio,
            Quantity::FrostRiskLevel => f64::from(self.risk.value()),
        }
    }
}

/// Evaluate one temperature (°C) / relative humidity (%) pair
pub fn evaluate(temperature: f64, humidity: f64) -> DomainResult<Evaluation> {
    Reading::new(temperature, humidity).evaluate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;

    #[test]
    fn mild_day_evaluation() {
        let eval = evaluate(20.0, 50.0).unwrap();
        assert_eq!(eval.reading, Reading::new(20.0, 50.0));
        assert_eq!(eval.metrics.absolute_humidity, 8.64);
        assert_eq!(eval.metrics.vapor_pressure, 11.68);
        assert_eq!(eval.risk, RiskLevel::NONE);
    }

    #[test]
    fn value_lookup_by_quantity() {
        let eval = evaluate(-3.0, 90.0).unwrap();
        assert_eq!(eval.value(Quantity::DewPoint), -4.41);
        assert_eq!(eval.value(Quantity::FrostPoint), -4.24);
        assert_eq!(eval.value(Quantity::FrostRiskLevel), 4.0);
    }

    #[test]
    fn dry_air_fails_whole_evaluation() {
        assert!(matches!(
            evaluate(20.0, 0.0001),
            Err(DomainError::HumidityOutOfDomain { .. })
        ));
    }

    #[test]
    fn custom_classifier_is_used() {
        struct AlwaysModerate;
        impl RiskClassifier for AlwaysModerate {
            fn classify(&self, _: &RiskFactors) -> RiskLevel {
                RiskLevel::MODERATE
            }
        }

        let eval = Reading::new(20.0, 50.0).evaluate_with(&AlwaysModerate).unwrap();
        assert_eq!(eval.risk, RiskLevel::MODERATE);
        assert_eq!(eval.metrics.dew_point, 9.25);
    }
}
