//! # Connection Management
//!
//! Configuration and short-lived connections for the purchase store.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  One Connection Per Operation                           │
//! │                                                                         │
//! │  store.append(...)                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  config.connect() ──► SqliteConnection (file opened)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  run statement(s)                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  release(conn, result) ──► conn.close() (always, success or not)       │
//! │                                                                         │
//! │  No pool, no connection held between menu actions. One user,           │
//! │  a handful of rows: open/close cost is irrelevant.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
use sqlx::{Connection, SqliteConnection};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{DbError, DbResult};

/// File name used when no path is configured.
pub const DEFAULT_DATABASE_FILE: &str = "shop.db";

// =============================================================================
// Configuration
// =============================================================================

/// Purchase store configuration.
///
/// ## Example
/// ```rust
/// use shop_db::StoreConfig;
/// use std::time::Duration;
///
/// let config = StoreConfig::new("./data/shop.db")
///     .busy_timeout(Duration::from_secs(2))
///     .run_migrations(false);
/// assert!(!config.run_migrations);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the SQLite database file. Created if missing; its parent
    /// directory must exist.
    pub database_path: PathBuf,

    /// How long a statement waits on a locked database file.
    /// Default: 5 seconds
    pub busy_timeout: Duration,

    /// Whether `PurchaseStore::open` applies migrations.
    /// Default: true
    pub run_migrations: bool,
}

impl StoreConfig {
    /// Creates a configuration for the database file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            database_path: path.into(),
            busy_timeout: Duration::from_secs(5),
            run_migrations: true,
        }
    }

    /// Sets the busy timeout.
    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Sets whether to run migrations on open.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    pub fn path(&self) -> &Path {
        &self.database_path
    }

    fn connect_options(&self) -> SqliteConnectOptions {
        SqliteConnectOptions::new()
            .filename(&self.database_path)
            .create_if_missing(true)
            // Rollback journal: no -wal/-shm files left next to shop.db
            .journal_mode(SqliteJournalMode::Delete)
            .synchronous(SqliteSynchronous::Full)
            .busy_timeout(self.busy_timeout)
    }

    /// Opens a fresh connection to the configured file.
    pub async fn connect(&self) -> DbResult<SqliteConnection> {
        debug!(path = %self.database_path.display(), "Opening connection");

        SqliteConnection::connect_with(&self.connect_options())
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::new(DEFAULT_DATABASE_FILE)
    }
}

// =============================================================================
// Release
// =============================================================================

/// Closes `conn` and hands back `result`.
///
/// The connection is closed whether or not the operation succeeded. An
/// operation error wins over a close error.
pub(crate) async fn release<T>(conn: SqliteConnection, result: DbResult<T>) -> DbResult<T> {
    let closed = conn.close().await;

    let value = result?;
    if let Err(e) = closed {
        warn!(error = %e, "Failed to close connection cleanly");
        return Err(e.into());
    }
    Ok(value)
}
