//! # Domain Types
//!
//! Core domain types used throughout Pricebook.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Category     │   │  ReportEntry    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u64)       │   │  id (u64)       │   │  id             │       │
//! │  │  name           │──►│  discount       │   │  name           │       │
//! │  │  category_id    │   └─────────────────┘   │  discounted_    │       │
//! │  │  price (dec)    │                         │    price_cents  │       │
//! │  └─────────────────┘                         │  tier           │       │
//! │                                              └─────────────────┘       │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Discount     │   │      Tier       │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  Decimal        │   │  Standard       │                             │
//! │  │  0.1 = 10%      │   │  Premium        │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `category_id` is a soft reference: nothing guarantees a matching
//! [`Category`] exists.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

/// Identifier shared by products and categories.
pub type EntityId = u64;

// =============================================================================
// Discount
// =============================================================================

/// Fractional price reduction, kept at full decimal precision.
///
/// 0.1 = 10% off, 1 = free. No rounding happens here: 0.12344 stays
/// 0.12344 until [`Money::discounted`] rounds the final price.
///
/// Valid discounts are 0..=1. Values outside that range are representable
/// so that unvalidated input passes through arithmetic unchanged; see
/// [`crate::validation::validate_discount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Discount(Decimal);

impl Discount {
    /// Creates a discount from a fraction (0.1 = 10%).
    ///
    /// ## Example
    /// ```rust
    /// use pricebook_core::types::Discount;
    /// use rust_decimal::Decimal;
    ///
    /// let discount = Discount::from_fraction(Decimal::new(825, 4));
    /// assert_eq!(discount.to_string(), "8.25%");
    /// ```
    #[inline]
    pub const fn from_fraction(fraction: Decimal) -> Self {
        Discount(fraction)
    }

    /// Returns the discount as a fraction.
    #[inline]
    pub const fn fraction(&self) -> Decimal {
        self.0
    }

    /// No discount.
    #[inline]
    pub const fn zero() -> Self {
        Discount(Decimal::ZERO)
    }

    /// Checks if the discount is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks the discount lies within 0%..=100%.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.0 >= Decimal::ZERO && self.0 <= Decimal::ONE
    }
}

impl Default for Discount {
    fn default() -> Self {
        Discount::zero()
    }
}

/// Percent with trailing zeros dropped: `10%`, `8.25%`, `12.344%`.
impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.checked_mul(Decimal::ONE_HUNDRED) {
            Some(percent) => write!(f, "{}%", percent.normalize()),
            None => write!(f, "{}", self.0),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product to be priced in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier.
    pub id: EntityId,

    /// Display name.
    pub name: String,

    /// Category this product belongs to. May not resolve.
    pub category_id: EntityId,

    /// Base price in major units, unrounded (1.006 stays 1.006).
    pub price: Decimal,
}

impl Product {
    pub fn new(id: EntityId, name: impl Into<String>, category_id: EntityId, price: Decimal) -> Self {
        Product {
            id,
            name: name.into(),
            category_id,
            price,
        }
    }
}

// =============================================================================
// Category
// =============================================================================

/// A product category carrying a discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier. Duplicates resolve last-write-wins.
    pub id: EntityId,

    pub discount: Discount,
}

impl Category {
    pub fn new(id: EntityId, discount: Discount) -> Self {
        Category { id, discount }
    }
}

// =============================================================================
// Tier
// =============================================================================

/// Price tier assigned from the discounted price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// Discounted price at or below the threshold.
    Standard,
    /// Discounted price strictly above the threshold.
    Premium,
}

impl Tier {
    /// Classifies a discounted price against the premium threshold.
    ///
    /// The comparison is strict: a price equal to the threshold is Standard.
    ///
    /// ## Example
    /// ```rust
    /// use pricebook_core::{Money, Tier, PREMIUM_THRESHOLD};
    ///
    /// assert_eq!(Tier::classify(Money::from_cents(5000), PREMIUM_THRESHOLD), Tier::Standard);
    /// assert_eq!(Tier::classify(Money::from_cents(5001), PREMIUM_THRESHOLD), Tier::Premium);
    /// ```
    #[inline]
    pub fn classify(price: Money, threshold: Money) -> Self {
        if price > threshold {
            Tier::Premium
        } else {
            Tier::Standard
        }
    }

    /// Label used in reports.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Tier::Standard => "Standard",
            Tier::Premium => "Premium",
        }
    }
}

impl Default for Tier {
    fn default() -> Self {
        Tier::Standard
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Report Entry
// =============================================================================

/// One priced line of the inventory report.
/// Carries a snapshot of the product name so the report stands alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub id: EntityId,
    pub name: String,
    /// Price after the category discount, rounded to cents.
    pub discounted_price_cents: i64,
    pub tier: Tier,
}

impl ReportEntry {
    /// Returns the discounted price as Money.
    #[inline]
    pub fn discounted_price(&self) -> Money {
        Money::from_cents(self.discounted_price_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
