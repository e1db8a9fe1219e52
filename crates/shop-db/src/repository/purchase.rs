//! # Purchase Store
//!
//! Durable, append-only log of purchased line items.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     purchase_history                                    │
//! │                                                                         │
//! │  append(purchase)        INSERT one row, own commit                     │
//! │  append_all(purchases)   BEGIN; INSERT × n; COMMIT  (one checkout)      │
//! │  list_all()              SELECT ... ORDER BY id                         │
//! │  count()                 SELECT COUNT(*)                                │
//! │                                                                         │
//! │  Rows are never updated or deleted.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Prices live in a `REAL` column as major units (500.0). They are rounded
//! back to minor units on the way out, so a stored 0.30000000000000004 reads
//! as 0.30.

use sqlx::{Connection, FromRow, SqliteConnection};
use tracing::{debug, info};

use crate::connection::{release, StoreConfig};
use crate::error::{DbError, DbResult};
use crate::migrations;
use shop_core::{Money, NewPurchase, PurchaseRecord};

/// Raw `purchase_history` row.
///
/// Both data columns are nullable in the schema, so they decode as Option.
#[derive(Debug, FromRow)]
struct PurchaseRow {
    id: i64,
    product_name: Option<String>,
    product_price: Option<f64>,
}

impl TryFrom<PurchaseRow> for PurchaseRecord {
    type Error = DbError;

    fn try_from(row: PurchaseRow) -> DbResult<Self> {
        let price = row
            .product_price
            .ok_or_else(|| DbError::invalid_row(row.id, "product_price is NULL"))?;
        let product_price = Money::from_major_f64(price)
            .ok_or_else(|| DbError::invalid_row(row.id, format!("price {price} out of range")))?;

        Ok(PurchaseRecord {
            id: row.id,
            product_name: row.product_name.unwrap_or_default(),
            product_price,
        })
    }
}

/// Repository for the purchase history table.
///
/// Holds only configuration. Every method opens its own connection and
/// closes it before returning.
#[derive(Debug, Clone)]
pub struct PurchaseStore {
    config: StoreConfig,
}

impl PurchaseStore {
    /// Creates a store without touching the database.
    pub fn new(config: StoreConfig) -> Self {
        PurchaseStore { config }
    }

    /// Creates a store and, if configured, ensures the schema exists.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let store = PurchaseStore::open(StoreConfig::new("shop.db")).await?;
    /// ```
    pub async fn open(config: StoreConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Initializing purchase store"
        );

        let store = PurchaseStore::new(config);
        if store.config.run_migrations {
            store.init().await?;
        }
        Ok(store)
    }

    /// Creates `purchase_history` if it does not exist.
    pub async fn init(&self) -> DbResult<()> {
        let mut conn = self.config.connect().await?;
        let result = migrations::run_migrations(&mut conn).await;
        release(conn, result).await
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Appends one record in its own commit and returns it with its new id.
    pub async fn append(&self, purchase: &NewPurchase) -> DbResult<PurchaseRecord> {
        let mut conn = self.config.connect().await?;
        let result = insert(&mut conn, purchase).await;
        release(conn, result).await
    }

    /// Appends all records of one checkout in a single transaction.
    ///
    /// Either every line is written, in order, or none is. An empty slice
    /// writes nothing and does not open the database.
    pub async fn append_all(&self, purchases: &[NewPurchase]) -> DbResult<Vec<PurchaseRecord>> {
        if purchases.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.config.connect().await?;
        let result = insert_all(&mut conn, purchases).await;
        release(conn, result).await
    }

    /// All records in insertion order.
    pub async fn list_all(&self) -> DbResult<Vec<PurchaseRecord>> {
        let mut conn = self.config.connect().await?;
        let result = select_all(&mut conn).await;
        release(conn, result).await
    }

    /// Number of stored records.
    pub async fn count(&self) -> DbResult<i64> {
        let mut conn = self.config.connect().await?;
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM purchase_history")
            .fetch_one(&mut conn)
            .await
            .map_err(DbError::from);
        release(conn, result).await
    }
}

// =============================================================================
// Statements
// =============================================================================

async fn insert(conn: &mut SqliteConnection, purchase: &NewPurchase) -> DbResult<PurchaseRecord> {
    debug!(
        name = %purchase.product_name,
        price = %purchase.product_price,
        "Recording purchase"
    );

    let result = sqlx::query(
        "INSERT INTO purchase_history (product_name, product_price) VALUES (?1, ?2)",
    )
    .bind(&purchase.product_name)
    .bind(purchase.product_price.to_major_f64())
    .execute(conn)
    .await?;

    Ok(PurchaseRecord {
        id: result.last_insert_rowid(),
        product_name: purchase.product_name.clone(),
        product_price: purchase.product_price,
    })
}

async fn insert_all(
    conn: &mut SqliteConnection,
    purchases: &[NewPurchase],
) -> DbResult<Vec<PurchaseRecord>> {
    let mut tx = conn
        .begin()
        .await
        .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

    let mut records = Vec::with_capacity(purchases.len());
    for purchase in purchases {
        // Dropping `tx` on error rolls the whole checkout back
        records.push(insert(&mut *tx, purchase).await?);
    }

    tx.commit()
        .await
        .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

    debug!(lines = records.len(), "Checkout lines committed");
    Ok(records)
}

async fn select_all(conn: &mut SqliteConnection) -> DbResult<Vec<PurchaseRecord>> {
    let rows: Vec<PurchaseRow> = sqlx::query_as(
        "SELECT id, product_name, product_price FROM purchase_history ORDER BY id",
    )
    .fetch_all(conn)
    .await?;

    rows.into_iter().map(PurchaseRecord::try_from).collect()
}

// =============================================================================
// Tests
// =============================================================================
