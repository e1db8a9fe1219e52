//! # Repository Module
//!
//! Database repository implementations for the shop.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  CheckoutEngine / Session                                              │
//! │       │                                                                 │
//! │       │  store.append_all(plan.purchases())                            │
//! │       ▼                                                                 │
//! │  PurchaseStore                                                         │
//! │  ├── append(&self, purchase)                                           │
//! │  ├── append_all(&self, purchases)                                      │
//! │  ├── list_all(&self)                                                   │
//! │  └── count(&self)                                                      │
//! │       │                                                                 │
//! │       │  SQL                                                            │
//! │       ▼                                                                 │
//! │  SQLite file (shop.db)                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`PurchaseStore`](purchase::PurchaseStore) - Purchase history log

pub mod purchase;
