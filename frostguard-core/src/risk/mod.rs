//! Frost Risk Classification
//!
//! ## Scoring Rule
//!
//! Frost forms when a surface drops to the frost point of the surrounding air.
//! No single derived quantity predicts that reliably, so five independent
//! ladders each give a verdict and the most severe one wins:
//!
//! ```text
//! ladder            inputs          range
//! temperature       T               0-5
//! dew point         dp              0-4
//! wet bulb          wb, T           0, 3, 4
//! freezing point    fp              0, 2-4
//! absolute humidity ah, T, fp       0-3 (first match)
//!
//! level = clamp(max(verdicts), 0, 5)
//! ```
//!
//! Verdicts are never summed or averaged. A ladder can only raise the level.
//!
//! ## Usage Example
//!
//! ```rust
//! use frostguard_core::risk::{assess, RiskFactors, RiskLevel};
//!
//! let factors = RiskFactors {
//!     temperature: -3.0,
//!     dew_point: -4.41,
//!     wet_bulb: -3.89,
//!     freezing_point: -4.06,
//!     absolute_humidity: 3.54,
//! };
//!
//! let breakdown = assess(&factors);
//! assert_eq!(breakdown.temperature, 4);
//! assert_eq!(breakdown.level(), RiskLevel::HIGH);
//! assert_eq!(breakdown.level().labels().nl, "Hoog");
//! ```

mod ladders;
mod labels;

pub use labels::{Language, RiskLabels, RISK_LABELS};

use core::fmt;

use crate::{
    constants::risk::{RISK_LEVEL_MAX, RISK_LEVEL_MIN},
    engine::DerivedMetrics,
    traits::RiskClassifier,
};

/// Frost risk level, always within `[0, 5]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct RiskLevel(u8);

impl RiskLevel {
    /// No frost risk
    pub const NONE: RiskLevel = RiskLevel(0);
    /// Very low risk
    pub const VERY_LOW: RiskLevel = RiskLevel(1);
    /// Low risk
    pub const LOW: RiskLevel = RiskLevel(2);
    /// Moderate risk
    pub const MODERATE: RiskLevel = RiskLevel(3);
    /// High risk
    pub const HIGH: RiskLevel = RiskLevel(4);
    /// Frost highly likely
    pub const VERY_HIGH: RiskLevel = RiskLevel(5);

    /// Build a level, clamping into `[0, 5]`
    pub const fn clamped(level: u8) -> Self {
        if level > RISK_LEVEL_MAX {
            RiskLevel(RISK_LEVEL_MAX)
        } else {
            RiskLevel(level)
        }
    }

    /// Numeric level
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Bilingual description
    pub const fn labels(&self) -> RiskLabels {
        RISK_LABELS[self.0 as usize]
    }

    /// Description in one language
    pub const fn description(&self, language: Language) -> &'static str {
        self.labels().get(language)
    }
}

impl From<RiskLevel> for u8 {
    fn from(level: RiskLevel) -> u8 {
        level.0
    }
}

impl TryFrom<u8> for RiskLevel {
    type Error = InvalidRiskLevel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > RISK_LEVEL_MAX {
            Err(InvalidRiskLevel(value))
        } else {
            Ok(RiskLevel(value))
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.labels().en)
    }
}

/// Raw value outside the risk scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRiskLevel(pub u8);

impl fmt::Display for InvalidRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "risk level {} outside [{}, {}]", self.0, RISK_LEVEL_MIN, RISK_LEVEL_MAX)
    }
}

/// Inputs to the classifier
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskFactors {
    /// Air temperature (°C)
    pub temperature: f64,
    /// Dew point (°C)
    pub dew_point: f64,
    /// Wet-bulb temperature (°C)
    pub wet_bulb: f64,
    /// Freezing point (°C)
    pub freezing_point: f64,
    /// Absolute humidity (g/m³)
    pub absolute_humidity: f64,
}

impl RiskFactors {
    /// Pick the classifier inputs out of a full metrics record
    pub fn from_metrics(temperature: f64, metrics: &DerivedMetrics) -> Self {
        Self {
            temperature,
            dew_point: metrics.dew_point,
            wet_bulb: metrics.wet_bulb,
            freezing_point: metrics.freezing_point,
            absolute_humidity: metrics.absolute_humidity,
        }
    }
}

/// Verdict of every ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RiskBreakdown {
    /// Air temperature ladder
    pub temperature: u8,
    /// Dew point ladder
    pub dew_point: u8,
    /// Wet bulb ladder
    pub wet_bulb: u8,
    /// Freezing point ladder
    pub freezing_point: u8,
    /// Absolute humidity ladder
    pub absolute_humidity: u8,
}

impl RiskBreakdown {
    /// Verdicts in ladder order
    pub const fn verdicts(&self) -> [u8; 5] {
        [
            self.temperature,
            self.dew_point,
            self.wet_bulb,
            self.freezing_point,
            self.absolute_humidity,
        ]
    }

    /// Combined level: the most severe verdict, clamped
    pub fn level(&self) -> RiskLevel {
        let max = self.verdicts().into_iter().max().unwrap_or(RISK_LEVEL_MIN);
        RiskLevel::clamped(max)
    }
}

/// Run every ladder
pub fn assess(factors: &RiskFactors) -> RiskBreakdown {
    RiskBreakdown {
        temperature: ladders::temperature(factors.temperature),
        dew_point: ladders::dew_point(factors.dew_point),
        wet_bulb: ladders::wet_bulb(factors.wet_bulb, factors.temperature),
        freezing_point: ladders::freezing_point(factors.freezing_point),
        absolute_humidity: ladders::absolute_humidity(
            factors.absolute_humidity,
            factors.temperature,
            factors.freezing_point,
        ),
    }
}

/// Combined frost risk level for already derived quantities
pub fn risk_level(
    temperature: f64,
    dew_point: f64,
    wet_bulb: f64,
    freezing_point: f64,
    absolute_humidity: f64,
) -> RiskLevel {
    assess(&RiskFactors {
        temperature,
        dew_point,
        wet_bulb,
        freezing_point,
        absolute_humidity,
    })
    .level()
}

/// Default five-ladder classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct FrostRiskClassifier;

impl RiskClassifier for FrostRiskClassifier {
    fn classify(&self, factors: &RiskFactors) -> RiskLevel {
        assess(factors).level()
    }
}
