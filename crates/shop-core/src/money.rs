//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Balance 0.1 + deposit 0.2 = 0.30000000000000004  ❌                    │
//! │  Checkout compares total > balance → off by one ulp, wrong answer      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units (kopecks)                            │
//! │    10 + 20 = 30, compared exactly                                       │
//! │                                                                         │
//! │  Floats appear in exactly two places, both at the edge:                │
//! │    • parsing what the user typed   (text → Money)                      │
//! │    • the REAL price column         (Money ↔ f64, rounded)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shop_core::money::Money;
//!
//! let price = Money::from_major(500);           // 500.00
//! let deposit: Money = "12.50".parse().unwrap(); // 12.50
//! assert_eq!((price + deposit).cents(), 51_250);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use crate::error::ValidationError;

/// Minor units per major unit.
pub const MINOR_PER_MAJOR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: a rejected deposit of `-10` must still be representable
///   so it can be reported back
/// - **Single field tuple struct**: zero-cost abstraction over i64
///
/// ## Where Money Flows
/// ```text
/// Item.price ──► Cart.total() ──► checkout::plan ──► Ledger.debit
///                                       │
///                                       └──► PurchaseRecord.product_price
///
/// "500" typed by user ──► Money::from_str ──► Ledger.deposit
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.to_string(), "10.99");
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole major units.
    ///
    /// Catalog prices are whole numbers, so this is what the catalog uses.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * MINOR_PER_MAJOR)
    }

    /// Converts a floating point amount in major units, rounding to the
    /// nearest minor unit.
    ///
    /// Only used when reading the `REAL` price column back out of the
    /// purchase store. Returns `None` for NaN, infinities, and values that
    /// do not fit in an i64.
    pub fn from_major_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * MINOR_PER_MAJOR as f64).round();
        if cents < i64::MIN as f64 || cents > i64::MAX as f64 {
            return None;
        }
        Some(Money(cents as i64))
    }

    /// Returns the value as floating point major units (for the `REAL`
    /// price column).
    #[inline]
    pub fn to_major_f64(&self) -> f64 {
        self.0 as f64 / MINOR_PER_MAJOR as f64
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole major-unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the minor-unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Checked addition. `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Money(v)),
            None => None,
        }
    }

    /// Checked subtraction. `None` on overflow.
    #[inline]
    pub const fn checked_sub(self, other: Money) -> Option<Money> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Money(v)),
            None => None,
        }
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses user-typed amounts.
///
/// ## Accepted Forms
/// ```text
/// "500"      → 500.00
/// "12.5"     → 12.50
/// "12,50"    → 12.50   (comma decimal separator)
/// "-10"      → -10.00  (parsed; the ledger decides whether to accept it)
/// "+7.05"    → 7.05
/// ```
///
/// ## Rejected Forms
/// Empty input, more than two fractional digits, anything that is not a
/// digit, and values that overflow i64 minor units.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Required {
                field: "amount".to_string(),
            });
        }

        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: reason.to_string(),
        };

        let (negative, unsigned) = match s.as_bytes()[0] {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };

        let normalized = unsigned.replace(',', ".");
        let (whole, frac) = match normalized.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (normalized.as_str(), ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid("expected digits"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid("expected a number like 500 or 12.50"));
        }
        if frac.len() > 2 {
            return Err(invalid("at most two decimal places"));
        }

        let overflow = || invalid("amount is too large");

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| overflow())?
        };
        // "5" means 50 minor units, "05" means 5
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| overflow())? * 10,
            _ => frac.parse().map_err(|_| overflow())?,
        };

        let cents = whole
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|c| c.checked_add(frac))
            .ok_or_else(overflow)?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain `major.minor` rendering without a currency marker; the app decides
/// how the currency is shown.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents_and_major() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor_part(), 99);

        assert_eq!(Money::from_major(95_000).cents(), 9_500_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(Money::from_major(500).to_string(), "500.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);

        let mut c = a;
        c += b;
        c -= Money::from_cents(100);
        assert_eq!(c.cents(), 1400);
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_major(500), Money::from_major(600)];
        let total: Money = prices.iter().sum();
        assert_eq!(total, Money::from_major(1100));

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_checked_ops() {
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
        assert_eq!(Money::from_cents(i64::MIN).checked_sub(Money::from_cents(1)), None);
        assert_eq!(
            Money::from_cents(5).checked_sub(Money::from_cents(3)),
            Some(Money::from_cents(2))
        );
    }

    #[test]
    fn test_parse_accepted_forms() {
        assert_eq!("500".parse::<Money>().unwrap(), Money::from_major(500));
        assert_eq!("12.5".parse::<Money>().unwrap(), Money::from_cents(1250));
        assert_eq!("12,50".parse::<Money>().unwrap(), Money::from_cents(1250));
        assert_eq!("0.05".parse::<Money>().unwrap(), Money::from_cents(5));
        assert_eq!(".5".parse::<Money>().unwrap(), Money::from_cents(50));
        assert_eq!("7.".parse::<Money>().unwrap(), Money::from_major(7));
        assert_eq!("+7.05".parse::<Money>().unwrap(), Money::from_cents(705));
        assert_eq!("  -10 ".parse::<Money>().unwrap(), Money::from_major(-10));
    }

    #[test]
    fn test_parse_rejected_forms() {
        assert!(matches!(
            "".parse::<Money>(),
            Err(ValidationError::Required { .. })
        ));
        for bad in ["abc", "1.2.3", "1.234", "-", ".", "12a", "1 000", "--5"] {
            assert!(
                matches!(bad.parse::<Money>(), Err(ValidationError::InvalidFormat { .. })),
                "expected {bad:?} to be rejected"
            );
        }
        assert!("99999999999999999999".parse::<Money>().is_err());
    }

    #[test]
    fn test_f64_conversion() {
        assert_eq!(Money::from_major(500).to_major_f64(), 500.0);
        assert_eq!(Money::from_major_f64(95000.0), Some(Money::from_major(95_000)));
        // 0.1 + 0.2 lands on 30 minor units after rounding
        assert_eq!(Money::from_major_f64(0.1 + 0.2), Some(Money::from_cents(30)));
        assert_eq!(Money::from_major_f64(f64::NAN), None);
        assert_eq!(Money::from_major_f64(f64::INFINITY), None);
        assert_eq!(Money::from_major_f64(1e30), None);
    }
}
