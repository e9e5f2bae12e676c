//! Domain Errors for Psychrometric Formulas
//!
//! ## Design Philosophy
//!
//! Every formula in the library is an empirical fit with a limited domain. An
//! input outside that domain is reported as a tagged [`DomainError`] instead of
//! a NaN, so a failed computation can never be mistaken for a valid zero or a
//! "no risk" verdict.
//!
//! Like the rest of the core, errors are small, `Copy`, and carry no heap data.
//!
//! ## Error Categories
//!
//! - `InvalidValue`: input is NaN or infinite
//! - `HumidityOutOfDomain`: RH too low for `ln(RH/100)`
//! - `TemperatureSingularity`: T sits on a Magnus pole
//! - `BelowAbsoluteZero`: formula needs a positive absolute temperature
//! - `Undefined`: a result that is mathematically defined nowhere near this input
//!
//! ## Propagation
//!
//! The core never retries or substitutes a value. Callers decide whether a
//! domain error means "report unavailable" or "wait for a fresher reading":
//!
//! ```rust
//! use frostguard_core::{evaluate, DomainError};
//!
//! match evaluate(20.0, 0.0) {
//!     Ok(evaluation) => { let _ = evaluation.risk; }
//!     Err(DomainError::HumidityOutOfDomain { .. }) => {
//!         // Humidity sensor reads bone dry - mark outputs unavailable
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

use crate::quantities::Quantity;

/// Result type for psychrometric operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Input outside a formula's mathematical domain
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// Input is not a finite number
    #[error("Invalid value: not a finite number")]
    InvalidValue,

    /// Relative humidity too low for the logarithmic dew point inversion
    #[error("Humidity {humidity}% is below the dew point domain floor {floor}%")]
    HumidityOutOfDomain {
        /// Relative humidity supplied by the caller
        humidity: f64,
        /// Lowest accepted relative humidity
        floor: f64,
    },

    /// Temperature on the pole of a Magnus-type denominator
    #[error("Temperature {temperature}°C is at the formula singularity {pole}°C")]
    TemperatureSingularity {
        /// Temperature supplied by the caller
        temperature: f64,
        /// Location of the pole
        pole: f64,
    },

    /// Formula needs a strictly positive absolute temperature
    #[error("Temperature {temperature}°C is at or below absolute zero")]
    BelowAbsoluteZero {
        /// Temperature supplied by the caller
        temperature: f64,
    },

    /// Result has no meaningful value for this reading
    #[error("{quantity} is undefined for this reading")]
    Undefined {
        /// Quantity that could not be computed
        quantity: Quantity,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for DomainError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
            Self::HumidityOutOfDomain { humidity, floor } =>
                defmt::write!(fmt, "Humidity {}% below floor {}%", humidity, floor),
            Self::TemperatureSingularity { temperature, pole } =>
                defmt::write!(fmt, "Temperature {} at pole {}", temperature, pole),
            Self::BelowAbsoluteZero { temperature } =>
                defmt::write!(fmt, "Temperature {} below absolute zero", temperature),
            Self::Undefined { quantity } =>
                defmt::write!(fmt, "{} undefined", quantity.key()),
        }
    }
}
