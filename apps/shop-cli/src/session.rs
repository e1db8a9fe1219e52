//! # Shop Session
//!
//! Everything one run of the shop owns: the catalog, the cart, the ledger
//! and the checkout engine.
//!
//! ## Ownership
//! ```text
//! ShopSession
//!   ├── catalog: Catalog          read-only, built at startup
//!   ├── cart: Cart                emptied by a successful checkout
//!   ├── ledger: Ledger            changed by deposit and checkout only
//!   └── engine: CheckoutEngine    owns the PurchaseStore
//! ```
//!
//! The session is single-threaded and owned by the shell, so plain `&mut self`
//! methods are enough. Nothing here reads or writes the terminal.

use tracing::{debug, info, warn};

use crate::checkout::CheckoutEngine;
use crate::error::AppResult;
use shop_core::{
    Cart, Catalog, CoreError, Item, Ledger, Money, PurchaseRecord, Receipt, ValidationError,
};

/// State of one shop session.
#[derive(Debug)]
pub struct ShopSession {
    catalog: Catalog,
    cart: Cart,
    ledger: Ledger,
    engine: CheckoutEngine,
}

impl ShopSession {
    /// Starts a session with an empty cart.
    pub fn new(catalog: Catalog, ledger: Ledger, engine: CheckoutEngine) -> Self {
        ShopSession {
            catalog,
            cart: Cart::new(),
            ledger,
            engine,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn balance(&self) -> Money {
        self.ledger.balance()
    }

    /// Adds a copy of a catalog item to the cart.
    ///
    /// Both indices are 0-based. A missing category or item is a validation
    /// error and leaves the cart unchanged.
    pub fn add_to_cart(&mut self, category: usize, item: usize) -> AppResult<&Item> {
        let category_ref = self
            .catalog
            .category(category)
            .ok_or_else(|| out_of_range("category", self.catalog.categories().len()))?;
        let chosen = category_ref
            .item(item)
            .ok_or_else(|| out_of_range("item", category_ref.items().len()))?
            .clone();

        debug!(name = chosen.name(), price = %chosen.price(), "Adding item to cart");
        self.cart.add(chosen);

        let added = &self.cart.items()[self.cart.len() - 1];
        Ok(added)
    }

    /// Adds funds to the balance and returns the new balance.
    pub fn deposit(&mut self, amount: Money) -> AppResult<Money> {
        let balance = self.ledger.deposit(amount).inspect_err(|e| {
            warn!(error = %e, "Deposit rejected");
        })?;
        info!(amount = %amount, balance = %balance, "Deposit accepted");
        Ok(balance)
    }

    /// Checks out the whole cart.
    pub async fn checkout(&mut self) -> AppResult<Receipt> {
        self.engine.checkout(&mut self.cart, &mut self.ledger).await
    }

    /// Purchase history across all sessions, oldest first.
    pub async fn history(&self) -> AppResult<Vec<PurchaseRecord>> {
        self.engine.history().await
    }
}

fn out_of_range(field: &str, count: usize) -> CoreError {
    CoreError::Validation(ValidationError::OutOfRange {
        field: field.to_string(),
        min: 1,
        max: count as i64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use shop_db::{PurchaseStore, StoreConfig};
    use tempfile::TempDir;

    async fn session(opening: Money) -> (TempDir, ShopSession) {
        let dir = tempfile::tempdir().unwrap();
        let store = PurchaseStore::open(StoreConfig::new(dir.path().join("shop.db")))
            .await
            .unwrap();
        let session = ShopSession::new(
            Catalog::standard().unwrap(),
            Ledger::with_balance(opening).unwrap(),
            CheckoutEngine::new(store),
        );
        (dir, session)
    }

    #[tokio::test]
    async fn test_add_to_cart_copies_catalog_item() {
        let (_dir, mut session) = session(Money::zero()).await;

        let added = session.add_to_cart(1, 1).unwrap().clone();
        assert_eq!(added.name(), "Aspire 5");
        assert_eq!(session.cart().len(), 1);
        assert_eq!(session.catalog().item(1, 1), Some(&added));
    }

    #[tokio::test]
    async fn test_add_to_cart_rejects_missing_indices() {
        let (_dir, mut session) = session(Money::zero()).await;

        let err = session.add_to_cart(2, 0).unwrap_err();
        assert!(matches!(
            err,
            AppError::Core(CoreError::Validation(ValidationError::OutOfRange { max: 2, .. }))
        ));
        assert!(session.add_to_cart(0, 5).is_err());
        assert!(session.cart().is_empty());
    }

    #[tokio::test]
    async fn test_deposit_then_checkout() {
        let (_dir, mut session) = session(Money::zero()).await;

        assert_eq!(session.deposit(Money::from_major(600)).unwrap(), Money::from_major(600));
        session.add_to_cart(0, 0).unwrap();

        let receipt = session.checkout().await.unwrap();
        assert_eq!(receipt.total, Money::from_major(500));
        assert_eq!(session.balance(), Money::from_major(100));
        assert!(session.cart().is_empty());

        let history = session.history().await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].product_name, "1984");
    }

    #[tokio::test]
    async fn test_rejected_deposit_keeps_balance() {
        let (_dir, mut session) = session(Money::from_major(50)).await;

        let err = session.deposit(Money::from_major(-10)).unwrap_err();
        assert!(matches!(err, AppError::Core(CoreError::InvalidDeposit { .. })));
        assert!(session.deposit(Money::zero()).is_err());
        assert_eq!(session.ledger().balance(), Money::from_major(50));
    }
}
