//! Budget health classification
//!
//! Maps the balance-to-loan ratio onto the three states the dashboard shows.
//! Both cuts are strict: exactly 0.6 is Fair and exactly 0.3 is Critical.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ratios above this are Good
pub const GOOD_THRESHOLD: f64 = 0.6;

/// Ratios above this (and not above [`GOOD_THRESHOLD`]) are Fair
pub const FAIR_THRESHOLD: f64 = 0.3;

/// Discrete budget health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetHealth {
    Good,
    Fair,
    Critical,
}

impl BudgetHealth {
    /// Classify a progress ratio
    pub fn classify(progress: f64) -> Self {
        if progress > GOOD_THRESHOLD {
            Self::Good
        } else if progress > FAIR_THRESHOLD {
            Self::Fair
        } else {
            // NaN lands here too
            Self::Critical
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Critical => "Critical",
        }
    }

    /// Color class token; the consumer maps it to an actual color
    pub fn color_class(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Fair => "warning",
            Self::Critical => "danger",
        }
    }
}

impl fmt::Display for BudgetHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify a progress ratio into a [`BudgetHealth`]
pub fn classify(progress: f64) -> BudgetHealth {
    BudgetHealth::classify(progress)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_boundaries() {
        assert_eq!(classify(0.6), BudgetHealth::Fair);
        assert_eq!(classify(0.61), BudgetHealth::Good);
        assert_eq!(classify(0.3), BudgetHealth::Critical);
        assert_eq!(classify(0.31), BudgetHealth::Fair);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(classify(1.0), BudgetHealth::Good);
        assert_eq!(classify(0.0), BudgetHealth::Critical);
        assert_eq!(classify(-0.5), BudgetHealth::Critical);
        assert_eq!(classify(f64::NAN), BudgetHealth::Critical);
    }

    #[test]
    fn test_labels_and_tokens() {
        assert_eq!(BudgetHealth::Good.label(), "Good");
        assert_eq!(BudgetHealth::Fair.color_class(), "warning");
        assert_eq!(BudgetHealth::Critical.color_class(), "danger");
        assert_eq!(BudgetHealth::Critical.to_string(), "Critical");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&BudgetHealth::Fair).unwrap();
        assert_eq!(json, "\"fair\"");
    }
}
