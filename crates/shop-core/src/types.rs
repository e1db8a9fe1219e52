//! # Domain Types
//!
//! Core domain types used throughout the shop.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │    ItemKind     │   │ PurchaseRecord  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  Book {author}  │   │  id (autoinc)   │       │
//! │  │  price (Money)  │   │  Laptop {brand} │   │  product_name   │       │
//! │  │  kind           │   │                 │   │  product_price  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Items are catalog constants: built once, cloned into carts, never
//! mutated. A `PurchaseRecord` is the snapshot of an item's name and price
//! taken at checkout.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Item Kind
// =============================================================================

/// The category-specific attribute of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemKind {
    Book { author: String },
    Laptop { brand: String },
}

impl ItemKind {
    /// Human-readable label for the kind ("Book", "Laptop").
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Book { .. } => "Book",
            ItemKind::Laptop { .. } => "Laptop",
        }
    }
}

// =============================================================================
// Item
// =============================================================================

/// A purchasable catalog item.
///
/// ## Invariants
/// - `price >= 0` (enforced by [`Item::book`] / [`Item::laptop`] via
///   [`crate::validation::validate_price`])
/// - Never mutated after construction; fields are private.
///
/// Serialize only: deserializing would bypass the constructors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    name: String,
    price: Money,
    #[serde(flatten)]
    kind: ItemKind,
}

impl Item {
    /// Creates a book.
    ///
    /// ## Errors
    /// `ValidationError` for a negative price or an empty name.
    pub fn book(
        name: impl Into<String>,
        price: Money,
        author: impl Into<String>,
    ) -> Result<Self, crate::error::ValidationError> {
        Item::new(
            name.into(),
            price,
            ItemKind::Book {
                author: author.into(),
            },
        )
    }

    /// Creates a laptop.
    pub fn laptop(
        name: impl Into<String>,
        price: Money,
        brand: impl Into<String>,
    ) -> Result<Self, crate::error::ValidationError> {
        Item::new(
            name.into(),
            price,
            ItemKind::Laptop {
                brand: brand.into(),
            },
        )
    }

    fn new(
        name: String,
        price: Money,
        kind: ItemKind,
    ) -> Result<Self, crate::error::ValidationError> {
        crate::validation::validate_item_name(&name)?;
        crate::validation::validate_price(price)?;
        Ok(Item { name, price, kind })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    /// One-line description, dispatched on the kind.
    ///
    /// ```rust
    /// use shop_core::{Item, Money};
    ///
    /// let book = Item::book("1984", Money::from_major(500), "George Orwell").unwrap();
    /// assert_eq!(book.describe(), "Book: 1984, Author: George Orwell, Price: 500.00");
    /// ```
    pub fn describe(&self) -> String {
        match &self.kind {
            ItemKind::Book { author } => format!(
                "Book: {}, Author: {}, Price: {}",
                self.name, author, self.price
            ),
            ItemKind::Laptop { brand } => format!(
                "Laptop: {}, Brand: {}, Price: {}",
                self.name, brand, self.price
            ),
        }
    }
}

// =============================================================================
// Purchase Record
// =============================================================================

/// One completed purchase line, as stored in `purchase_history`.
///
/// Uses the snapshot pattern: name and price are copied from the item at
/// checkout, so history never depends on the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Auto-incremented row id.
    pub id: i64,
    pub product_name: String,
    pub product_price: Money,
}

/// A purchase line that has not been written yet.
///
/// The store assigns the id on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPurchase {
    pub product_name: String,
    pub product_price: Money,
}

impl NewPurchase {
    pub fn new(product_name: impl Into<String>, product_price: Money) -> Self {
        NewPurchase {
            product_name: product_name.into(),
            product_price,
        }
    }
}

impl From<&Item> for NewPurchase {
    fn from(item: &Item) -> Self {
        NewPurchase::new(item.name(), item.price())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_dispatches_on_kind() {
        let laptop = Item::laptop("MacBook Air", Money::from_major(95_000), "Apple").unwrap();
        assert_eq!(
            laptop.describe(),
            "Laptop: MacBook Air, Brand: Apple, Price: 95000.00"
        );
        assert_eq!(laptop.kind().label(), "Laptop");
    }

    #[test]
    fn test_negative_price_rejected() {
        let result = Item::book("Free?", Money::from_cents(-1), "Nobody");
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_price_allowed() {
        let item = Item::book("Pamphlet", Money::zero(), "Anonymous").unwrap();
        assert!(item.price().is_zero());
    }

    #[test]
    fn test_new_purchase_snapshot() {
        let book = Item::book("1984", Money::from_major(500), "George Orwell").unwrap();
        let purchase = NewPurchase::from(&book);
        assert_eq!(purchase.product_name, "1984");
        assert_eq!(purchase.product_price, Money::from_major(500));
    }

    #[test]
    fn test_item_serializes_with_kind_tag() {
        let book = Item::book("1984", Money::from_major(500), "George Orwell").unwrap();
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["kind"], "book");
        assert_eq!(json["author"], "George Orwell");
        assert_eq!(json["price"], 50_000);
    }
}
