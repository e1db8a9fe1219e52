//! # shop-core: Pure Business Logic for the Shop Simulator
//!
//! This crate contains all business logic of the shop as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shop Architecture                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    shop-cli (Session Shell)                     │   │
//! │  │    Menu ──► Browse ──► Cart ──► Checkout ──► History            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shop-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   cart    │  │  ledger   │  │ checkout  │  │   │
//! │  │   │   Item    │  │   Cart    │  │  Ledger   │  │   plan    │  │   │
//! │  │   │ Category  │  │           │  │           │  │  settle   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO STDIN • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    shop-db (Purchase Store)                     │   │
//! │  │              purchase_history table in SQLite                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Item, ItemKind, PurchaseRecord
//! - [`money`] - Money type with integer arithmetic
//! - [`catalog`] - The fixed product catalog
//! - [`cart`] - Ordered cart
//! - [`ledger`] - Non-negative balance
//! - [`checkout`] - Funds check and settlement
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use shop_core::{checkout, Cart, Catalog, Ledger, Money};
//!
//! let catalog = Catalog::standard().unwrap();
//! let mut cart = Cart::new();
//! let mut ledger = Ledger::new();
//!
//! ledger.deposit(Money::from_major(500)).unwrap();
//! cart.add(catalog.item(0, 0).unwrap().clone()); // "1984", 500.00
//!
//! let plan = checkout::plan(&cart, &ledger).unwrap();
//! // ... persist plan.purchases() ...
//! let receipt = plan.settle(&mut cart, &mut ledger).unwrap();
//!
//! assert!(receipt.balance_after.is_zero());
//! assert!(cart.is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ledger;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use catalog::{Catalog, Category};
pub use checkout::{CheckoutPlan, Receipt};
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::Ledger;
pub use money::Money;
pub use types::*;
