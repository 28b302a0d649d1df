//! # Discount Index
//!
//! Category id → discount lookup table, built once per report.
//!
//! ```text
//! categories (M)            DiscountIndex                products (N)
//! ┌──────────────┐  O(M)   ┌──────────────┐   O(1) each ┌──────────────┐
//! │ {0, 10%}     │ ──────► │ 0 → 10%      │ ◄────────── │ category 0   │
//! │ {1, 20%}     │         │ 1 → 25%  ◄─┐ │             │ category 7 ──┼─► miss → 0%
//! │ {1, 25%}     │ ────────┼────────────┘ │             └──────────────┘
//! └──────────────┘         └──────────────┘
//!                   last write wins
//! ```

use std::collections::HashMap;

use tracing::debug;

use crate::types::{Category, Discount, EntityId};

/// Maps category ids to their discount.
#[derive(Debug, Clone, Default)]
pub struct DiscountIndex {
    discounts: HashMap<EntityId, Discount>,
    overwritten: usize,
}

impl DiscountIndex {
    /// Builds the index in a single pass.
    ///
    /// When a category id repeats, the later entry replaces the earlier one.
    ///
    /// ## Example
    /// ```rust
    /// use pricebook_core::{Category, Discount, DiscountIndex};
    /// use rust_decimal::Decimal;
    ///
    /// let index = DiscountIndex::build(&[
    ///     Category::new(1, Discount::from_fraction(Decimal::new(20, 2))),
    ///     Category::new(1, Discount::from_fraction(Decimal::new(25, 2))),
    /// ]);
    ///
    /// assert_eq!(index.discount_for(1).fraction(), Decimal::new(25, 2));
    /// assert!(index.discount_for(99).is_zero());
    /// assert_eq!(index.overwritten(), 1);
    /// ```
    pub fn build(categories: &[Category]) -> Self {
        let mut discounts = HashMap::with_capacity(categories.len());
        let mut overwritten = 0;

        for category in categories {
            if discounts.insert(category.id, category.discount).is_some() {
                overwritten += 1;
            }
        }

        if overwritten > 0 {
            debug!(overwritten, "duplicate category ids, keeping last entry");
        }

        DiscountIndex {
            discounts,
            overwritten,
        }
    }

    /// Discount for a category, or zero when the id does not resolve.
    #[inline]
    pub fn discount_for(&self, category_id: EntityId) -> Discount {
        self.get(category_id).unwrap_or_default()
    }

    /// Discount for a category if it is indexed.
    #[inline]
    pub fn get(&self, category_id: EntityId) -> Option<Discount> {
        self.discounts.get(&category_id).copied()
    }

    /// Number of distinct category ids.
    pub fn len(&self) -> usize {
        self.discounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discounts.is_empty()
    }

    /// How many entries were replaced by a later duplicate id.
    pub fn overwritten(&self) -> usize {
        self.overwritten
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
