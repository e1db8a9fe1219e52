//! # Error Types
//!
//! Domain-specific error types for shop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shop-core errors (this file)                                          │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  shop-db errors (separate crate)                                       │
//! │  └── DbError          - Purchase store failures (fatal)                │
//! │                                                                         │
//! │  shop-cli errors (in app)                                              │
//! │  └── AppError         - Recoverable vs fatal, shown to the user        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → message on screen      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant here is user-recoverable: the session prints the message
//! and returns to the menu with no state changed.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The cart total is larger than the ledger balance.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart total: 95000.00
    ///      │
    ///      ▼
    /// Balance: 500.00
    ///      │
    ///      ▼
    /// InsufficientFunds { required: 95000.00, available: 500.00 }
    ///      │
    ///      ▼
    /// UI shows: "Insufficient funds!" (cart and balance untouched)
    /// ```
    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: Money, available: Money },

    /// A deposit of zero or a negative amount.
    #[error("Deposit amount must be positive, got {amount}")]
    InvalidDeposit { amount: Money },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while turning raw user text into domain values, before any
/// business rule runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. "12.3.4" as an amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientFunds {
            required: Money::from_major(95_000),
            available: Money::from_major(500),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: required 95000.00, available 500.00"
        );

        let err = CoreError::InvalidDeposit {
            amount: Money::from_cents(-1000),
        };
        assert_eq!(err.to_string(), "Deposit amount must be positive, got -10.00");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "amount".to_string(),
        };
        assert_eq!(err.to_string(), "amount is required");

        let err = ValidationError::OutOfRange {
            field: "category".to_string(),
            min: 1,
            max: 2,
        };
        assert_eq!(err.to_string(), "category must be between 1 and 2");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "amount".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
