//! # Ledger
//!
//! The user's spendable balance.
//!
//! ## Invariant
//! The balance is never negative. Both mutating paths enforce it:
//! - `deposit` rejects amounts `<= 0`
//! - `debit` rejects amounts larger than the balance
//!
//! Checkout is the only caller of `debit`, and it has already compared the
//! total with the balance, so the guard in `debit` should never fire.

use serde::Serialize;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;

/// A single non-negative balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Ledger {
    balance: Money,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Ledger::default()
    }

    /// Creates a ledger with an opening balance.
    ///
    /// ## Errors
    /// `InvalidDeposit` when `opening` is negative.
    pub fn with_balance(opening: Money) -> CoreResult<Self> {
        if opening.is_negative() {
            return Err(CoreError::InvalidDeposit { amount: opening });
        }
        Ok(Ledger { balance: opening })
    }

    /// Current balance.
    #[inline]
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Adds a positive amount and returns the new balance.
    ///
    /// ## Behavior
    /// ```text
    /// deposit(500)  → Ok(balance + 500)
    /// deposit(0)    → Err(InvalidDeposit), balance unchanged
    /// deposit(-10)  → Err(InvalidDeposit), balance unchanged
    /// deposit(huge) → Err(Validation(OutOfRange)), balance unchanged
    /// ```
    pub fn deposit(&mut self, amount: Money) -> CoreResult<Money> {
        if !amount.is_positive() {
            return Err(CoreError::InvalidDeposit { amount });
        }
        let headroom = i64::MAX - self.balance.cents();
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "amount".to_string(),
                min: 1,
                max: headroom,
            })?;
        Ok(self.balance)
    }

    /// Subtracts `amount`. Only checkout calls this.
    pub(crate) fn debit(&mut self, amount: Money) -> CoreResult<Money> {
        if amount > self.balance {
            return Err(CoreError::InsufficientFunds {
                required: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }
}
