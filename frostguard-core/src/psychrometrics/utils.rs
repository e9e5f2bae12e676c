//! Shared rounding and domain guards
//!
//! Every formula rounds once, at the end, to its reporting precision. Some
//! formulas chain on an already rounded result of another; that order is part
//! of the contract and is kept by calling the public, rounded function.

use crate::{
    constants::psychrometrics::{ABSOLUTE_ZERO_CELSIUS, HUMIDITY_FLOOR_PCT, SINGULARITY_TOLERANCE_C},
    errors::{DomainError, DomainResult},
    quantities::Quantity,
    traits::Validatable,
};

/// Round to `decimals` places, ties to even on the scaled value
///
/// Values too large to scale are returned unchanged; at that magnitude they
/// have no fractional digits left to round.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = libm::pow(10.0, decimals as f64);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    let mut rounded = libm::round(scaled);
    if libm::fabs(scaled - rounded) == 0.5 {
        rounded = 2.0 * libm::round(scaled / 2.0);
    }
    rounded / scale
}

/// Reject NaN and infinite inputs
pub fn check_finite(temperature: f64, humidity: f64) -> DomainResult<()> {
    if temperature.is_valid() && humidity.is_valid() {
        Ok(())
    } else {
        Err(DomainError::InvalidValue)
    }
}

/// Reject a temperature on the pole of `b + T`
pub fn check_pole(temperature: f64, b: f64) -> DomainResult<()> {
    if libm::fabs(temperature + b) < SINGULARITY_TOLERANCE_C {
        Err(DomainError::TemperatureSingularity { temperature, pole: -b })
    } else {
        Ok(())
    }
}

/// Reject temperatures whose absolute value is not strictly positive
pub fn check_above_absolute_zero(temperature: f64) -> DomainResult<()> {
    if temperature <= ABSOLUTE_ZERO_CELSIUS {
        Err(DomainError::BelowAbsoluteZero { temperature })
    } else {
        Ok(())
    }
}

/// Reject humidity too low for `ln(RH/100)`
pub fn check_log_humidity(humidity: f64) -> DomainResult<()> {
    if humidity < HUMIDITY_FLOOR_PCT {
        Err(DomainError::HumidityOutOfDomain {
            humidity,
            floor: HUMIDITY_FLOOR_PCT,
        })
    } else {
        Ok(())
    }
}

/// Turn a non-finite intermediate into `Undefined`
pub fn finite(value: f64, quantity: Quantity) -> DomainResult<f64> {
    if value.is_valid() {
        Ok(value)
    } else {
        Err(DomainError::Undefined { quantity })
    }
}
