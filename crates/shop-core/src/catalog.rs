//! # Catalog
//!
//! The fixed, ordered list of product categories and their items.
//!
//! ```text
//! Catalog
//! ├── 1. Books
//! │   ├── 1. 1984                       500.00   George Orwell
//! │   └── 2. The Master and Margarita   600.00   Mikhail Bulgakov
//! └── 2. Laptops
//!     ├── 1. MacBook Air              95000.00   Apple
//!     └── 2. Aspire 5                 45000.00   Acer
//! ```
//!
//! Built once at startup and read-only afterwards. There is no API for
//! adding or removing items.

use serde::Serialize;

use crate::money::Money;
use crate::types::Item;
use crate::validation::ValidationResult;

/// A named, ordered group of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    name: String,
    items: Vec<Item>,
}

impl Category {
    pub fn new(name: impl Into<String>, items: Vec<Item>) -> Self {
        Category {
            name: name.into(),
            items,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Bounds-checked lookup by 0-based index.
    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }
}

/// The shop catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Catalog { categories }
    }

    /// The standard two-category catalog the shop ships with.
    pub fn standard() -> ValidationResult<Self> {
        Ok(Catalog::new(vec![
            Category::new(
                "Books",
                vec![
                    Item::book("1984", Money::from_major(500), "George Orwell")?,
                    Item::book(
                        "The Master and Margarita",
                        Money::from_major(600),
                        "Mikhail Bulgakov",
                    )?,
                ],
            ),
            Category::new(
                "Laptops",
                vec![
                    Item::laptop("MacBook Air", Money::from_major(95_000), "Apple")?,
                    Item::laptop("Aspire 5", Money::from_major(45_000), "Acer")?,
                ],
            ),
        ]))
    }

    /// All categories, in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    /// Looks up an item by 0-based category and item index.
    pub fn item(&self, category: usize, item: usize) -> Option<&Item> {
        self.category(category).and_then(|c| c.item(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemKind;

    #[test]
    fn test_standard_catalog_layout() {
        let catalog = Catalog::standard().unwrap();
        let names: Vec<&str> = catalog.categories().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["Books", "Laptops"]);

        let books = catalog.category(0).unwrap();
        assert_eq!(books.items().len(), 2);
        assert_eq!(books.items()[0].name(), "1984");
        assert_eq!(books.items()[0].price(), Money::from_major(500));
        assert!(matches!(books.items()[0].kind(), ItemKind::Book { .. }));
    }

    #[test]
    fn test_item_lookup() {
        let catalog = Catalog::standard().unwrap();
        let macbook = catalog.item(1, 0).unwrap();
        assert_eq!(macbook.name(), "MacBook Air");
        assert_eq!(macbook.price(), Money::from_major(95_000));

        assert!(catalog.item(2, 0).is_none());
        assert!(catalog.item(0, 2).is_none());
    }

    #[test]
    fn test_all_prices_non_negative() {
        let catalog = Catalog::standard().unwrap();
        for category in catalog.categories() {
            for item in category.items() {
                assert!(!item.price().is_negative(), "{}", item.name());
            }
        }
    }
}
