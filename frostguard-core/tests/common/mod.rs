//! Shared fixtures for integration tests
//!
//! Reference rows were produced with the published formulas in 64-bit floats
//! and rounded at reporting precision. All rows sit well away from a rounding
//! boundary, so exact comparison is safe.

#![allow(dead_code)]

use frostguard_core::{DerivedMetrics, RiskLevel};

/// One reference evaluation
pub struct ReferenceCase {
    pub name: &'static str,
    pub temperature: f64,
    pub humidity: f64,
    pub metrics: DerivedMetrics,
    pub verdicts: [u8; 5],
    pub risk: RiskLevel,
}

const fn metrics(
    absolute_humidity: f64,
    dew_point: f64,
    frost_point: f64,
    freezing_point: f64,
    wet_bulb: f64,
    vapor_pressure: f64,
    humidity_ratio: f64,
) -> DerivedMetrics {
    DerivedMetrics {
        absolute_humidity,
        dew_point,
        frost_point,
        freezing_point,
        wet_bulb,
        vapor_pressure,
        humidity_ratio,
    }
}

pub const REFERENCE_CASES: &[ReferenceCase] = &[
    ReferenceCase {
        name: "mild_day",
        temperature: 20.0,
        humidity: 50.0,
        metrics: metrics(8.64, 9.25, 9.25, 6.57, 13.7, 11.68, 0.007254),
        verdicts: [0, 0, 0, 0, 0],
        risk: RiskLevel::NONE,
    },
    ReferenceCase {
        name: "hard_frost_humid",
        temperature: -3.0,
        humidity: 90.0,
        metrics: metrics(3.54, -4.41, -4.24, -4.06, -3.89, 4.41, 0.002719),
        verdicts: [4, 3, 4, 4, 2],
        risk: RiskLevel::HIGH,
    },
    ReferenceCase {
        name: "freezing_damp",
        temperature: 0.0,
        humidity: 80.0,
        metrics: metrics(3.88, -3.03, -2.68, -3.03, -1.67, 4.89, 0.003016),
        verdicts: [3, 3, 4, 4, 2],
        risk: RiskLevel::HIGH,
    },
    ReferenceCase {
        name: "desert_air",
        temperature: 5.0,
        humidity: 3.0,
        metrics: metrics(0.2, -36.68, -32.98, -37.29, 4.5, 0.26, 0.00016),
        verdicts: [0, 4, 0, 4, 0],
        risk: RiskLevel::HIGH,
    },
    ReferenceCase {
        name: "cool_fog",
        temperature: 3.0,
        humidity: 95.0,
        metrics: metrics(5.65, 2.28, 2.28, 1.92, 2.45, 7.2, 0.004451),
        verdicts: [1, 0, 0, 0, 0],
        risk: RiskLevel::VERY_LOW,
    },
    ReferenceCase {
        name: "autumn_evening",
        temperature: 10.0,
        humidity: 60.0,
        metrics: metrics(5.64, 2.59, 2.59, 1.33, 6.02, 7.36, 0.004551),
        verdicts: [0, 0, 0, 0, 0],
        risk: RiskLevel::NONE,
    },
    ReferenceCase {
        name: "clear_night",
        temperature: 2.0,
        humidity: 70.0,
        metrics: metrics(3.89, -2.89, -2.32, -3.13, -0.49, 4.94, 0.003047),
        verdicts: [2, 3, 4, 4, 2],
        risk: RiskLevel::HIGH,
    },
    ReferenceCase {
        name: "deep_winter",
        temperature: -10.0,
        humidity: 50.0,
        metrics: metrics(1.18, -18.43, -17.56, -17.33, -12.1, 1.43, 0.000879),
        verdicts: [5, 4, 4, 4, 1],
        risk: RiskLevel::VERY_HIGH,
    },
    ReferenceCase {
        name: "saturated_near_zero",
        temperature: 1.0,
        humidity: 90.0,
        metrics: metrics(4.67, -0.45, -0.28, -0.57, 0.05, 5.91, 0.003649),
        verdicts: [2, 2, 3, 3, 2],
        risk: RiskLevel::MODERATE,
    },
    ReferenceCase {
        name: "humid_spring_night",
        temperature: 2.5,
        humidity: 90.0,
        metrics: metrics(5.18, 1.03, 1.03, 0.73, 1.53, 6.58, 0.004066),
        verdicts: [1, 1, 0, 2, 0],
        risk: RiskLevel::LOW,
    },
];

/// Temperatures (°C) that span the classifier's interesting range
pub const TEMPERATURE_SWEEP: [f64; 9] = [-12.0, -5.0, -2.0, 0.0, 1.0, 2.0, 3.0, 4.0, 8.0];

/// Humidity values (%) from very dry to saturated
pub const HUMIDITY_SWEEP: [f64; 7] = [3.0, 10.0, 35.0, 60.0, 80.0, 95.0, 100.0];
