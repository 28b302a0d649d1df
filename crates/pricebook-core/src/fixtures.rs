//! # Synthetic Data Sets
//!
//! Deterministic products and categories for benchmarks and tests.
//!
//! ## Default Data Set
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  10,000 products  ─┐                                                    │
//! │    id:          0..10000                                                │
//! │    name:        Product_{id}                                            │
//! │    category_id: id % 50                                                 │
//! │    price:       0.0000 - 99.9999 (hashed from id, sub-cent)             │
//! │                    │                                                    │
//! │  50 categories  ◄──┘                                                    │
//! │    id:          0..50                                                   │
//! │    discount:    10%                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every call builds fresh vectors; the same arguments always give the same
//! data.

use rust_decimal::Decimal;

use crate::types::{Category, Discount, EntityId, Product};

/// Products in the default data set.
pub const DEFAULT_PRODUCT_COUNT: usize = 10_000;

/// Categories in the default data set.
pub const DEFAULT_CATEGORY_COUNT: usize = 50;

/// Discount every default category carries (10%).
pub const DEFAULT_CATEGORY_DISCOUNT: Discount =
    Discount::from_fraction(Decimal::from_parts(1, 0, 0, false, 1));

/// Synthetic prices carry four decimal places, finer than a cent.
const PRICE_SCALE: u32 = 4;

/// Exclusive upper bound for synthetic prices, in ten-thousandths (100.0000).
const PRICE_SPAN: u64 = 1_000_000;

/// Multiplier spreading consecutive ids across the price range.
/// Coprime with `PRICE_SPAN`, so ids never collide within one span.
const PRICE_STRIDE: u64 = 7_919;

/// Builds `count` categories with ids `0..count`, all sharing `discount`.
///
/// ## Example
/// ```rust
/// use pricebook_core::fixtures::{synthetic_categories, DEFAULT_CATEGORY_DISCOUNT};
///
/// let categories = synthetic_categories(3, DEFAULT_CATEGORY_DISCOUNT);
/// assert_eq!(categories.len(), 3);
/// assert_eq!(categories[2].id, 2);
/// ```
pub fn synthetic_categories(count: usize, discount: Discount) -> Vec<Category> {
    (0..count as EntityId)
        .map(|id| Category::new(id, discount))
        .collect()
}

/// Builds `count` products spread round-robin over `category_count`
/// categories. With `category_count == 0` every product points at
/// category 0.
pub fn synthetic_products(count: usize, category_count: usize) -> Vec<Product> {
    let category_count = category_count as EntityId;

    (0..count as EntityId)
        .map(|id| {
            let category_id = if category_count == 0 { 0 } else { id % category_count };
            Product::new(id, format!("Product_{id}"), category_id, synthetic_price(id))
        })
        .collect()
}

/// The demo data set: 10,000 products over 50 categories at 10% off.
pub fn default_data_set() -> (Vec<Product>, Vec<Category>) {
    (
        synthetic_products(DEFAULT_PRODUCT_COUNT, DEFAULT_CATEGORY_COUNT),
        synthetic_categories(DEFAULT_CATEGORY_COUNT, DEFAULT_CATEGORY_DISCOUNT),
    )
}

fn synthetic_price(id: EntityId) -> Decimal {
    Decimal::new((id.wrapping_mul(PRICE_STRIDE) % PRICE_SPAN) as i64, PRICE_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_shape() {
        let products = synthetic_products(120, 50);

        assert_eq!(products.len(), 120);
        assert_eq!(products[0].name, "Product_0");
        assert_eq!(products[51].category_id, 1);
        let span = Decimal::ZERO..Decimal::ONE_HUNDRED;
        assert!(products.iter().all(|p| span.contains(&p.price)));
    }

    #[test]
    fn test_prices_vary() {
        let products = synthetic_products(100, 10);
        assert_ne!(products[1].price, products[2].price);
        assert_eq!(products[1].price, Decimal::new(7919, 4));
    }

    #[test]
    fn test_prices_have_sub_cent_digits() {
        let products = synthetic_products(100, 10);
        assert!(products.iter().any(|p| p.price.round_dp(2) != p.price));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(synthetic_products(500, 7), synthetic_products(500, 7));
    }

    #[test]
    fn test_zero_categories() {
        let products = synthetic_products(5, 0);
        assert!(products.iter().all(|p| p.category_id == 0));
        assert!(synthetic_categories(0, Discount::zero()).is_empty());
    }

    #[test]
    fn test_default_data_set() {
        let (products, categories) = default_data_set();

        assert_eq!(products.len(), DEFAULT_PRODUCT_COUNT);
        assert_eq!(categories.len(), DEFAULT_CATEGORY_COUNT);
        assert!(categories.iter().all(|c| c.discount.fraction() == Decimal::new(1, 1)));
    }
}
