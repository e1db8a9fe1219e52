//! # Application Error Type
//!
//! Unified error type for the console app.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Shop                               │
//! │                                                                         │
//! │  Menu action                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Result<T, AppError>                                                    │
//! │       │                                                                 │
//! │       ├── Core(InsufficientFunds)  ─┐                                   │
//! │       ├── Core(InvalidDeposit)      ├─► recoverable: message, back to   │
//! │       ├── Core(Validation)         ─┘   the menu, no state changed      │
//! │       │                                                                 │
//! │       ├── Db(..)                   ─┐                                   │
//! │       ├── Io(..)                    ├─► fatal: unwinds out of run(),    │
//! │       └── Config(..)               ─┘   logged, non-zero exit           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::config::ConfigError;
use shop_core::{CoreError, ValidationError};
use shop_db::DbError;

/// Application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Business rule violation or bad input.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The purchase store failed. Never retried.
    #[error("Purchase store error: {0}")]
    Db(#[from] DbError),

    /// Terminal read/write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(CoreError::Validation(err))
    }
}

impl AppError {
    /// Whether the session can carry on after reporting this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Core(_))
    }

    /// Short message shown to the user for recoverable errors.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Core(CoreError::InsufficientFunds { .. }) => "Insufficient funds!".to_string(),
            AppError::Core(CoreError::InvalidDeposit { .. }) => {
                "Deposit amount must be greater than zero.".to_string()
            }
            AppError::Core(CoreError::Validation(ValidationError::OutOfRange { field, .. }))
                if field == "amount" =>
            {
                "Amount is too large.".to_string()
            }
            AppError::Core(CoreError::Validation(err)) if validation_field(err) == "amount" => {
                "Invalid amount.".to_string()
            }
            AppError::Core(CoreError::Validation(_)) => "Invalid choice.".to_string(),
            other => other.to_string(),
        }
    }
}

fn validation_field(err: &ValidationError) -> &str {
    match err {
        ValidationError::Required { field }
        | ValidationError::OutOfRange { field, .. }
        | ValidationError::InvalidFormat { field, .. } => field.as_str(),
    }
}

/// Result type for app operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use shop_core::Money;

    #[test]
    fn test_core_errors_are_recoverable() {
        let err: AppError = CoreError::InsufficientFunds {
            required: Money::from_major(95_000),
            available: Money::from_major(500),
        }
        .into();
        assert!(err.is_recoverable());
        assert_eq!(err.user_message(), "Insufficient funds!");

        let err: AppError = ValidationError::Required {
            field: "amount".to_string(),
        }
        .into();
        assert!(err.is_recoverable());
        assert!(matches!(err, AppError::Core(CoreError::Validation(_))));
        assert_eq!(err.user_message(), "Invalid amount.");

        let err: AppError = ValidationError::OutOfRange {
            field: "category".to_string(),
            min: 1,
            max: 2,
        }
        .into();
        assert_eq!(err.user_message(), "Invalid choice.");

        let err: AppError = ValidationError::OutOfRange {
            field: "amount".to_string(),
            min: 1,
            max: 5,
        }
        .into();
        assert_eq!(err.user_message(), "Amount is too large.");
    }

    #[test]
    fn test_store_errors_are_fatal() {
        let err: AppError = DbError::ConnectionFailed("disk gone".to_string()).into();
        assert!(!err.is_recoverable());
        assert_eq!(err.to_string(), "Purchase store error: Connection failed: disk gone");
    }

    #[test]
    fn test_io_errors_are_fatal() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert!(!err.is_recoverable());
    }
}
