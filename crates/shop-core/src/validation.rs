//! # Validation Module
//!
//! Input validation utilities for the shop.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell (shop-cli)                                             │
//! │  ├── Reads raw lines from stdin                                        │
//! │  └── THIS MODULE: menu choices, amounts                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Domain (shop-core)                                           │
//! │  ├── THIS MODULE: item names, prices                                   │
//! │  └── Ledger / checkout business rules                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── Column types only; no constraints beyond the primary key          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shop_core::validation::{parse_menu_choice, validate_price};
//! use shop_core::Money;
//!
//! assert_eq!(parse_menu_choice("2", 4, "item").unwrap(), 1);
//! assert!(validate_price(Money::from_cents(-1)).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of an item name, in characters.
pub const MAX_ITEM_NAME_LEN: usize = 200;

// =============================================================================
// Item Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 200 characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::OutOfRange {
            field: "name length".to_string(),
            min: 1,
            max: MAX_ITEM_NAME_LEN as i64,
        });
    }

    Ok(())
}

/// Validates an item price. Zero is allowed, negative is not.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }
    Ok(())
}

// =============================================================================
// Input Validators
// =============================================================================

/// Parses a 1-based menu choice into a 0-based index.
///
/// ## Rules
/// - Must be an integer
/// - Must be in `1..=count`
///
/// ## Example
/// ```rust
/// use shop_core::validation::parse_menu_choice;
///
/// assert_eq!(parse_menu_choice(" 1 ", 2, "category").unwrap(), 0);
/// assert!(parse_menu_choice("3", 2, "category").is_err());
/// assert!(parse_menu_choice("abc", 2, "category").is_err());
/// ```
pub fn parse_menu_choice(input: &str, count: usize, field: &str) -> ValidationResult<usize> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let out_of_range = || ValidationError::OutOfRange {
        field: field.to_string(),
        min: 1,
        max: count as i64,
    };

    let choice: i64 = input.parse().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "expected a number".to_string(),
    })?;

    if choice < 1 || choice as u64 > count as u64 {
        return Err(out_of_range());
    }

    Ok((choice - 1) as usize)
}

/// Parses a deposit amount typed by the user.
///
/// Only the format is checked here. Whether a zero or negative amount is
/// acceptable is the ledger's decision.
pub fn parse_amount(input: &str) -> ValidationResult<Money> {
    input.parse()
}

/// Interprets a yes/no answer. Anything other than a yes is a no.
///
/// ```rust
/// use shop_core::validation::is_affirmative;
///
/// assert!(is_affirmative("Y"));
/// assert!(is_affirmative(" yes "));
/// assert!(!is_affirmative("nope"));
/// ```
pub fn is_affirmative(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

// =============================================================================
// Unit Tests
// =============================================================================
