//! # Checkout Engine
//!
//! Turns a cart into purchase records and a balance debit.
//!
//! ## Order of Effects
//! ```text
//! 1. shop_core::checkout::plan(cart, ledger)     funds check, no effects
//!        └── InsufficientFunds ──► return, nothing changed
//! 2. store.append_all(plan.purchases())           one transaction
//!        └── DbError ──► return, cart and ledger untouched, no rows
//! 3. plan.settle(cart, ledger)                    debit + clear
//! ```
//!
//! Writing before debiting means a store failure never costs the user money.

use chrono::Utc;
use tracing::{info, warn};

use crate::error::AppResult;
use shop_core::{checkout, Cart, Ledger, PurchaseRecord, Receipt};
use shop_db::PurchaseStore;

/// Orchestrates cart, ledger and purchase store.
#[derive(Debug, Clone)]
pub struct CheckoutEngine {
    store: PurchaseStore,
}

impl CheckoutEngine {
    pub fn new(store: PurchaseStore) -> Self {
        CheckoutEngine { store }
    }

    pub fn store(&self) -> &PurchaseStore {
        &self.store
    }

    /// Finalizes the cart.
    ///
    /// ## Errors
    /// - `CoreError::InsufficientFunds` (recoverable): nothing changed
    /// - `DbError` (fatal): nothing changed, nothing written
    pub async fn checkout(&self, cart: &mut Cart, ledger: &mut Ledger) -> AppResult<Receipt> {
        let plan = checkout::plan(cart, ledger).inspect_err(|e| {
            warn!(error = %e, items = cart.len(), "Checkout rejected");
        })?;

        self.store.append_all(plan.purchases()).await?;

        let receipt = plan.settle(cart, ledger)?;
        let cart_age = Utc::now() - receipt.opened_at;

        info!(
            items = receipt.purchases.len(),
            cart_age_secs = cart_age.num_seconds(),
            total = %receipt.total,
            balance = %receipt.balance_after,
            "Checkout completed"
        );
        Ok(receipt)
    }

    /// Full purchase history, oldest first.
    pub async fn history(&self) -> AppResult<Vec<PurchaseRecord>> {
        Ok(self.store.list_all().await?)
    }
}
