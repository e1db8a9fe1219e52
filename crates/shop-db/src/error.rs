//! # Database Error Types
//!
//! Error types for purchase store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError::Db (in shop-cli) ← Always fatal, never retried              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Logged, session ends with a non-zero exit code                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Purchase store errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Could not open the database file.
    ///
    /// ## When This Occurs
    /// - Parent directory doesn't exist
    /// - File permissions issue
    /// - File is not a SQLite database
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Begin/commit of a checkout transaction failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// A stored row could not be turned back into a purchase record.
    ///
    /// ## When This Occurs
    /// - `product_price` is NULL or not a finite number
    #[error("Invalid purchase row {id}: {reason}")]
    InvalidRow { id: i64, reason: String },

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    pub fn invalid_row(id: i64, reason: impl Into<String>) -> Self {
        DbError::InvalidRow {
            id,
            reason: reason.into(),
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database  → DbError::QueryFailed
/// sqlx::Error::Io        → DbError::ConnectionFailed
/// Other                  → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),
            sqlx::Error::Io(io_err) => DbError::ConnectionFailed(io_err.to_string()),
            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
