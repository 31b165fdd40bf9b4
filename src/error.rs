//! Custom error types for the semester budget engine
//!
//! Every error here is local and recoverable: a rejected mutation leaves the
//! caller's plan exactly as it was.

use thiserror::Error;

use crate::models::Money;

/// The main error type for budget engine operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// A negative amount was supplied where only non-negative amounts are allowed
    #[error("Invalid amount: {0} (amounts cannot be negative)")]
    InvalidAmount(Money),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Case-insensitive name collision with an active category
    #[error("Category already exists: {0}")]
    DuplicateName(String),

    /// Onboarding was finalized before a required field was usable
    #[error("Incomplete input: {0}")]
    IncompleteInput(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BudgetError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for the stored semester plan
    pub fn plan_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Semester plan",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget engine operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgetError::IncompleteInput("loan amount is required".into());
        assert_eq!(err.to_string(), "Incomplete input: loan amount is required");
    }

    #[test]
    fn test_not_found_error() {
        let err = BudgetError::category_not_found("#9");
        assert_eq!(err.to_string(), "Category not found: #9");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_invalid_amount_error() {
        let err = BudgetError::InvalidAmount(Money::from_cents(-50_000));
        assert_eq!(
            err.to_string(),
            "Invalid amount: -KES 500.00 (amounts cannot be negative)"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let budget_err: BudgetError = io_err.into();
        assert!(matches!(budget_err, BudgetError::Io(_)));
    }
}
