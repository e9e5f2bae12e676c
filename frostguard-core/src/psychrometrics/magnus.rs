//! Magnus-type saturation curves
//!
//! The dew point and frost point share one inversion with different
//! coefficients; absolute humidity and vapor pressure share one saturation
//! curve. Results here are unrounded.

use crate::{
    constants::psychrometrics::{MAGNUS_A, MAGNUS_B_C, MAGNUS_ES0_HPA},
    errors::DomainResult,
    quantities::Quantity,
};

use super::utils;

/// Saturation vapor pressure over water (hPa)
pub fn saturation_vapor_pressure(temperature: f64) -> DomainResult<f64> {
    utils::check_pole(temperature, MAGNUS_B_C)?;
    let es = MAGNUS_ES0_HPA * libm::exp((MAGNUS_A * temperature) / (temperature + MAGNUS_B_C));
    utils::finite(es, Quantity::VaporPressure)
}

/// Saturation temperature for `(T, RH)` on the curve with coefficients `a`, `b`
///
/// `α = a·T/(b+T) + ln(RH/100)`, `Td = b·α/(a−α)`.
pub fn invert(temperature: f64, humidity: f64, a: f64, b: f64, quantity: Quantity) -> DomainResult<f64> {
    utils::check_log_humidity(humidity)?;
    utils::check_pole(temperature, b)?;

    let alpha = (a * temperature) / (b + temperature) + libm::log(humidity / 100.0);
    utils::finite((b * alpha) / (a - alpha), quantity)
}
