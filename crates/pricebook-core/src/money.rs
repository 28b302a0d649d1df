//! # Money Module
//!
//! Provides the `Money` type for rounded report amounts.
//!
//! ## Exact Inputs, One Rounding
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE DOUBLE ROUNDING PROBLEM                                            │
//! │                                                                         │
//! │  Round inputs first, then round the result again:                       │
//! │    price 100.0099 → 100.01, × 0.5 = 50.005 → 50.01  ❌ Premium!         │
//! │                                                                         │
//! │  OUR SOLUTION: exact Decimal inputs, round once at the end             │
//! │    100.0099 × 0.5 = 50.00495 → 50.00  ✅ Standard                       │
//! │                                                                         │
//! │  Decimal (not f64) keeps 1.005 as exactly 1.005                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Prices and discounts stay [`Decimal`] end to end. `Money` only exists
//! after rounding, as whole cents.
//!
//! ## Usage
//! ```rust
//! use pricebook_core::money::Money;
//! use pricebook_core::types::Discount;
//! use rust_decimal::Decimal;
//!
//! let price = Decimal::new(1000099, 4); // 100.0099
//! let half = Discount::from_fraction(Decimal::new(5, 1)); // 50%
//! assert_eq!(Money::discounted(price, half).cents(), 5000); // $50.00
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use crate::types::Discount;

// =============================================================================
// Money Type
// =============================================================================

/// A rounded monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: malformed negative prices pass through arithmetic
/// - **Saturating**: conversions and sums clamp at the i64 range instead of
///   panicking, so unvalidated input never aborts a report
/// - **Serde**: serialized as the bare cent count
///
/// ## Where Money is Used
/// ```text
/// Product.price (Decimal) ──► Money::discounted ──► ReportEntry.discounted_price_cents
///                                                            │
///                                                            ├──► Tier::classify
///                                                            └──► ReportSummary.total_value
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Largest representable amount.
    pub const MAX: Money = Money(i64::MAX);

    /// Smallest representable amount.
    pub const MIN: Money = Money(i64::MIN);

    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use pricebook_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds a decimal amount to cents, half away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use pricebook_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(Money::from_decimal(Decimal::new(1005, 3)).cents(), 101); // 1.005
    /// assert_eq!(Money::from_decimal(Decimal::new(-125, 3)).cents(), -13); // -0.125
    /// ```
    pub fn from_decimal(amount: Decimal) -> Self {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        // scale is at most 2 after rounding; mantissa fits 96 bits, so ×100 fits i128
        let cents = rounded.mantissa() * 10_i128.pow(2 - rounded.scale());
        Money(cents.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }

    /// Applies a discount exactly, `price * (1 - discount)`, then rounds once
    /// to cents, half away from zero.
    ///
    /// Discounts outside 0..=1 are applied as-is (a negative discount is a
    /// markup). Results beyond the i64 cent range saturate.
    ///
    /// ## Example
    /// ```rust
    /// use pricebook_core::money::Money;
    /// use pricebook_core::types::Discount;
    /// use rust_decimal::Decimal;
    ///
    /// // 1.006 at 50% = 0.503 → $0.50
    /// let discount = Discount::from_fraction(Decimal::new(5, 1));
    /// assert_eq!(Money::discounted(Decimal::new(1006, 3), discount).cents(), 50);
    /// ```
    pub fn discounted(price: Decimal, discount: Discount) -> Self {
        let fraction = discount.fraction();
        let exact = Decimal::ONE
            .checked_sub(fraction)
            .and_then(|remaining| price.checked_mul(remaining));

        match exact {
            Some(exact) => Money::from_decimal(exact),
            None if price.is_sign_negative() != (fraction > Decimal::ONE) => Money::MIN,
            None => Money::MAX,
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as `$D.CC` (or `-$D.CC`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().unsigned_abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Saturating addition; totals clamp at the i64 cent range.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
