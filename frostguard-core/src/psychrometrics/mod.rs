//! Psychrometric Formula Library
//!
//! ## Physics Background
//!
//! Air at a given dry-bulb temperature can only hold so much water vapor. The
//! saturation vapor pressure grows roughly exponentially with temperature and
//! is approximated here with the Magnus formula:
//!
//! ```text
//! es(T) = 6.112 · exp(17.67·T / (T + 243.5))     [hPa, T in °C]
//! e     = es(T) · RH/100
//! ```
//!
//! Every other quantity follows from `T`, `RH` and that curve:
//!
//! - **Absolute humidity**: vapor mass per volume via the ideal gas law
//! - **Dew point**: temperature where `e` saturates liquid water
//! - **Frost point**: the same over ice, only differs below 0°C
//! - **Freezing point**: humidity-corrected freezing temperature
//! - **Wet bulb**: evaporative cooling limit (Stull 2011 fit)
//! - **Humidity ratio**: vapor mass per dry air mass at 1013.25 hPa
//!
//! ## Precision Contract
//!
//! Each function rounds its own result once: 2 decimals for temperatures,
//! pressures and absolute humidity, 6 for the humidity ratio. Two functions
//! chain on a rounded result of another and must keep doing so, because the
//! rounding shows up in the third decimal of the output:
//!
//! ```text
//! freezing_point ← dew_point      (rounded to 0.01 °C)
//! humidity_ratio ← vapor_pressure (rounded to 0.01 hPa)
//! ```
//!
//! ## Domain
//!
//! - `RH` must be at least 0.01% wherever `ln(RH/100)` appears
//! - `T` must stay off the Magnus poles (-243.5, -237.7, -265.5 °C)
//! - `T` must be above absolute zero where Kelvin is used
//!
//! Outside that domain the functions return a [`DomainError`](crate::DomainError)
//! and never a NaN.
//!
//! ## Usage Example
//!
//! ```rust
//! use frostguard_core::psychrometrics;
//!
//! let dp = psychrometrics::dew_point(20.0, 50.0)?;
//! assert_eq!(dp, 9.25);
//!
//! // Very dry air short-circuits the wet bulb fit
//! assert_eq!(psychrometrics::wet_bulb(5.0, 3.0)?, 4.5);
//! # Ok::<(), frostguard_core::DomainError>(())
//! ```

mod magnus;
mod utils;

pub use utils::round_to;

use crate::{
    constants::psychrometrics::{
        ABSOLUTE_HUMIDITY_FACTOR, DEW_POINT_A, DEW_POINT_B_C, FREEZING_INVERSE_COEFF_K,
        FREEZING_LOG_COEFF, FREEZING_NUMERATOR_K, FREEZING_OFFSET, FROST_POINT_A,
        FROST_POINT_B_C, HUMIDITY_MAX_PCT, HUMIDITY_MIN_PCT, HUMIDITY_RATIO_DECIMALS,
        KELVIN_OFFSET, METRIC_DECIMALS, MOLAR_MASS_RATIO, STANDARD_PRESSURE_HPA, STULL_C1,
        STULL_C2, STULL_C3, STULL_C4, STULL_C5, STULL_C6, WET_BULB_DRY_AIR_DEPRESSION_C,
        WET_BULB_MIN_FIT_RH_PCT,
    },
    errors::{DomainError, DomainResult},
    quantities::Quantity,
};

/// Absolute humidity in g/m³
pub fn absolute_humidity(temperature: f64, humidity: f64) -> DomainResult<f64> {
    utils::check_finite(temperature, humidity)?;
    utils::check_above_absolute_zero(temperature)?;

    let es = magnus::saturation_vapor_pressure(temperature)?;
    let ah = es * humidity * ABSOLUTE_HUMIDITY_FACTOR / (temperature + KELVIN_OFFSET);
    utils::finite(ah, Quantity::AbsoluteHumidity).map(|v| round_to(v, METRIC_DECIMALS))
}

/// Actual vapor pressure in hPa
pub fn vapor_pressure(temperature: f64, humidity: f64) -> DomainResult<f64> {
    utils::check_finite(temperature, humidity)?;

    let es = magnus::saturation_vapor_pressure(temperature)?;
    let e = es * (humidity / 100.0);
    utils::finite(e, Quantity::VaporPressure).map(|v| round_to(v, METRIC_DECIMALS))
}

/// Dew point in °C (Magnus-Tetens)
///
/// Fails with [`DomainError::HumidityOutOfDomain`] when RH is at or near zero.
pub fn dew_point(temperature: f64, humidity: f64) -> DomainResult<f64> {
    utils::check_finite(temperature, humidity)?;

    magnus::invert(temperature, humidity, DEW_POINT_A, DEW_POINT_B_C, Quantity::DewPoint)
        .map(|v| round_to(v, METRIC_DECIMALS))
}

/// Frost point in °C
///
/// Equal to the dew point unless the dew point is below zero, in which case
/// the ice-phase curve is applied to the original reading.
pub fn frost_point(temperature: f64, humidity: f64) -> DomainResult<f64> {
    let dew = dew_point(temperature, humidity)?;
    if dew >= 0.0 {
        return Ok(dew);
    }

    magnus::invert(temperature, humidity, FROST_POINT_A, FROST_POINT_B_C, Quantity::FrostPoint)
        .map(|v| round_to(v, METRIC_DECIMALS))
}

/// Freezing point in °C, derived from the rounded dew point
pub fn freezing_point(temperature: f64, humidity: f64) -> DomainResult<f64> {
    let dew = dew_point(temperature, humidity)?;
    utils::check_above_absolute_zero(temperature)?;

    let t = temperature + KELVIN_OFFSET;
    let td = dew + KELVIN_OFFSET;
    let correction = FREEZING_NUMERATOR_K
        / ((FREEZING_INVERSE_COEFF_K / t) + FREEZING_LOG_COEFF * libm::log(t) - FREEZING_OFFSET);
    let fp = (td + correction - t) - KELVIN_OFFSET;

    utils::finite(fp, Quantity::FreezingPoint).map(|v| round_to(v, METRIC_DECIMALS))
}

/// Wet-bulb temperature in °C (Stull 2011)
///
/// RH is clamped to 0-100%. Below 5% the fit is not valid and the dry bulb
/// minus 0.5°C is returned instead; the jump at 5% is intentional.
pub fn wet_bulb(temperature: f64, humidity: f64) -> DomainResult<f64> {
    utils::check_finite(temperature, humidity)?;

    let t = temperature;
    let rh = humidity.clamp(HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT);

    if rh < WET_BULB_MIN_FIT_RH_PCT {
        return Ok(round_to(t - WET_BULB_DRY_AIR_DEPRESSION_C, METRIC_DECIMALS));
    }

    let tw = t * libm::atan(STULL_C1 * libm::sqrt(rh + STULL_C2))
        + libm::atan(t + rh)
        - libm::atan(rh - STULL_C3)
        + STULL_C4 * libm::pow(rh, 1.5) * libm::atan(STULL_C5 * rh)
        - STULL_C6;

    utils::finite(tw, Quantity::WetBulb).map(|v| round_to(v, METRIC_DECIMALS))
}

/// Humidity ratio in kg/kg at standard sea-level pressure
///
/// Built on the rounded vapor pressure. Once the vapor pressure reaches the
/// ambient pressure the ratio has no physical meaning, and this returns
/// [`DomainError::Undefined`](crate::DomainError::Undefined) instead of the
/// negative value `0.622·e/(P − e)` would give. This is a deliberate
/// deviation from the bare formula: air at or above boiling (e.g. 100 °C at
/// 100 %) fails the whole evaluation.
pub fn humidity_ratio(temperature: f64, humidity: f64) -> DomainResult<f64> {
    let e = vapor_pressure(temperature, humidity)?;
    if e >= STANDARD_PRESSURE_HPA {
        return Err(DomainError::Undefined { quantity: Quantity::HumidityRatio });
    }

    let w = MOLAR_MASS_RATIO * (e / (STANDARD_PRESSURE_HPA - e));
    utils::finite(w, Quantity::HumidityRatio).map(|v| round_to(v, HUMIDITY_RATIO_DECIMALS))
}
