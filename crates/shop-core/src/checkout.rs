//! # Checkout Planning
//!
//! The pure half of checkout: the funds check and the state transition.
//! Writing the purchase records is I/O and lives in the app layer, which
//! calls into this module on both sides of the write.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  plan(&cart, &ledger)            ← THIS MODULE (pure)                   │
//! │       │                                                                 │
//! │       ├── total > balance ──► Err(InsufficientFunds)                    │
//! │       │                       nothing touched, nothing written          │
//! │       ▼                                                                 │
//! │  CheckoutPlan { total, purchases }                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.append_all(plan.purchases())   ← shop-db (I/O, may fail)         │
//! │       │                                                                 │
//! │       ├── Err(DbError) ──► propagate; cart and ledger untouched         │
//! │       ▼                                                                 │
//! │  plan.settle(&mut cart, &mut ledger)  ← THIS MODULE (pure)              │
//! │       │   debit total, clear cart                                       │
//! │       ▼                                                                 │
//! │  Receipt                                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::ledger::Ledger;
use crate::money::Money;
use crate::types::NewPurchase;

/// An approved checkout that has not been applied yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutPlan {
    total: Money,
    purchases: Vec<NewPurchase>,
    opened_at: DateTime<Utc>,
}

/// Outcome of a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    /// Lines written to the purchase store, in cart order.
    pub purchases: Vec<NewPurchase>,
    pub total: Money,
    pub balance_after: Money,
    /// When the checked-out cart was created or last cleared.
    pub opened_at: DateTime<Utc>,
}

/// Checks that the cart is affordable and snapshots its lines.
///
/// An empty cart plans a zero-total checkout with no lines.
///
/// ## Errors
/// `InsufficientFunds` when the cart total exceeds the balance.
pub fn plan(cart: &Cart, ledger: &Ledger) -> CoreResult<CheckoutPlan> {
    let total = cart.total();
    let available = ledger.balance();

    if total > available {
        return Err(CoreError::InsufficientFunds {
            required: total,
            available,
        });
    }

    Ok(CheckoutPlan {
        total,
        purchases: cart.items().iter().map(NewPurchase::from).collect(),
        opened_at: cart.created_at(),
    })
}

impl CheckoutPlan {
    pub fn total(&self) -> Money {
        self.total
    }

    /// Purchase lines in cart order.
    pub fn purchases(&self) -> &[NewPurchase] {
        &self.purchases
    }

    /// Applies the plan once its lines are durable: debits the ledger and
    /// clears the cart.
    ///
    /// If the balance dropped below the total since planning, nothing is
    /// changed and `InsufficientFunds` is returned.
    pub fn settle(self, cart: &mut Cart, ledger: &mut Ledger) -> CoreResult<Receipt> {
        let balance_after = ledger.debit(self.total)?;
        cart.clear();

        Ok(Receipt {
            purchases: self.purchases,
            total: self.total,
            balance_after,
            opened_at: self.opened_at,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
