//! # Cart
//!
//! The ordered list of items a user intends to buy.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐   add()    ┌──────────────┐  checkout ok   ┌──────────┐   │
//! │  │  Empty   │──────────►│ Accumulating │──────────────►│  Empty   │   │
//! │  └──────────┘            └──────┬───────┘   (clear)      └──────────┘   │
//! │                                 │                                       │
//! │                                 │ checkout failed                       │
//! │                                 ▼                                       │
//! │                          (unchanged)                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unlike a POS cart, lines are never merged: adding the same item twice
//! gives two lines, each becoming its own purchase record.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::money::Money;
use crate::types::Item;

/// The shopping cart.
///
/// ## Invariants
/// - Insertion order is display order and purchase order
/// - Duplicates allowed
#[derive(Debug, Clone, Serialize)]
pub struct Cart {
    items: Vec<Item>,

    /// When the cart was created/last cleared.
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Appends an item. Never fails.
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Empties the cart and restarts its clock.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Flat sum of item prices. Empty cart totals zero.
    pub fn total(&self) -> Money {
        self.items.iter().map(Item::price).sum()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(name: &str, major: i64) -> Item {
        Item::book(name, Money::from_major(major), "Author").unwrap()
    }

    #[test]
    fn test_cart_add_keeps_order_and_duplicates() {
        let mut cart = Cart::new();
        cart.add(book("B", 600));
        cart.add(book("A", 500));
        cart.add(book("B", 600));

        let names: Vec<&str> = cart.items().iter().map(Item::name).collect();
        assert_eq!(names, ["B", "A", "B"]);
        assert_eq!(cart.len(), 3);
    }

    #[test]
    fn test_cart_total() {
        let mut cart = Cart::new();
        assert_eq!(cart.total(), Money::zero());

        cart.add(book("1984", 500));
        cart.add(book("The Master and Margarita", 600));
        assert_eq!(cart.total(), Money::from_major(1100));
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        cart.add(book("1984", 500));
        let before = cart.created_at();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
        assert!(cart.created_at() >= before);
    }
}
