//! Core traits
//!
//! Kept deliberately small. The engine is a handful of pure functions; the
//! only seam worth a trait is classification, so a host can swap in a
//! different frost heuristic without touching the formula library.

use crate::risk::{RiskFactors, RiskLevel};

/// Maps derived metrics to a frost risk level
pub trait RiskClassifier {
    /// Classify one set of factors. Must return a level in `[0, 5]`.
    fn classify(&self, factors: &RiskFactors) -> RiskLevel;
}

/// Trait for values that can be fed to a formula
pub trait Validatable {
    /// Check if the value is a usable number (not NaN or infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validatable_floats() {
        assert!(5.0f64.is_valid());
        assert!(!f64::NAN.is_valid());
        assert!(!f64::NEG_INFINITY.is_valid());
        assert!(!f64::INFINITY.is_valid());
    }
}
