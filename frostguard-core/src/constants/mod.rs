//! Constants for FrostGuard Core
//!
//! Every coefficient the engine uses lives here with its source, so the
//! formula code reads as the published equations and nothing else.
//!
//! ## Organization
//!
//! - **Psychrometrics**: Magnus, Stull and freezing-point coefficients,
//!   reference conditions and reporting precision
//! - **Risk**: thresholds for the five frost-risk ladders
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Use descriptive names that include units
//! 3. Reference the published formula where one exists

/// Psychrometric coefficients, reference conditions and precision.
pub mod psychrometrics;

/// Threshold ladders for the frost-risk classifier.
pub mod risk;

pub use psychrometrics::{
    ABSOLUTE_ZERO_CELSIUS, STANDARD_PRESSURE_HPA, HUMIDITY_FLOOR_PCT,
    METRIC_DECIMALS, HUMIDITY_RATIO_DECIMALS,
};

pub use risk::{RISK_LEVEL_MIN, RISK_LEVEL_MAX};
