//! Psychrometric engine for FrostGuard
//!
//! Turns one air temperature and relative humidity reading into the derived
//! quantities that matter for frost (dew, frost and freezing point, wet bulb,
//! absolute humidity, vapor pressure, humidity ratio) and a 0-5 frost risk
//! level.
//!
//! Key constraints:
//! - `no_std`, no heap allocation
//! - Pure functions: identical inputs give bit-identical outputs
//! - Domain violations are typed errors, never NaN
//!
//! ```no_run
//! use frostguard_core::{evaluate, Language};
//!
//! match evaluate(0.0, 80.0) {
//!     Ok(evaluation) => {
//!         let _dew_point = evaluation.metrics.dew_point;
//!         let _label = evaluation.risk.description(Language::En);
//!     }
//!     Err(e) => {} // Report outputs as unavailable
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod engine;
pub mod errors;
pub mod psychrometrics;
pub mod quantities;
pub mod risk;
pub mod traits;

// Public API
pub use engine::{evaluate, DerivedMetrics, Evaluation, Reading};
pub use errors::{DomainError, DomainResult};
pub use quantities::Quantity;
pub use risk::{assess, risk_level, FrostRiskClassifier, Language, RiskBreakdown, RiskFactors, RiskLevel};
pub use traits::{RiskClassifier, Validatable};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
