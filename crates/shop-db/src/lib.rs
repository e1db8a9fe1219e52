//! # shop-db: Purchase Store for the Shop Simulator
//!
//! Durable purchase history in a local SQLite file, accessed through sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shop Data Flow                                   │
//! │                                                                         │
//! │  CheckoutEngine (shop-cli)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     shop-db (THIS CRATE)                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  StoreConfig  │    │ PurchaseStore │    │  Migrations  │  │   │
//! │  │   │(connection.rs)│◄───│ (purchase.rs) │    │  (embedded)  │  │   │
//! │  │   │ open / close  │    │ append, list  │    │ 001_...sql   │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │            ./shop.db  (relative to working directory)           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`connection`] - Store configuration and per-call connections
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shop_db::{PurchaseStore, StoreConfig};
//! use shop_core::{Money, NewPurchase};
//!
//! let store = PurchaseStore::open(StoreConfig::new("shop.db")).await?;
//! store.append(&NewPurchase::new("1984", Money::from_major(500))).await?;
//! for record in store.list_all().await? {
//!     println!("{} - {}", record.product_name, record.product_price);
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod connection;
pub mod error;
pub mod migrations;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use connection::{StoreConfig, DEFAULT_DATABASE_FILE};
pub use error::{DbError, DbResult};
pub use repository::purchase::PurchaseStore;
