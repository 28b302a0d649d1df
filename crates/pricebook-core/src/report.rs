//! # Report Generator
//!
//! Turns products and categories into priced, tiered report entries.
//!
//! ## Indexed vs Naive
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  generate_naive: for each product, scan every category                  │
//! │    N products × M categories = O(N·M)                                   │
//! │    10,000 × 50 = 500,000 comparisons                                    │
//! │                                                                         │
//! │  generate: build DiscountIndex once, then one lookup per product        │
//! │    O(M) + O(N) = O(N + M)                                               │
//! │    50 inserts + 10,000 lookups                                          │
//! │                                                                         │
//! │  Both produce identical output, including for duplicate category ids   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Per-Product Pipeline
//! ```text
//! Product { price: $100.00, category: 1 }
//!      │
//!      ▼
//! discount lookup (category 1 → 50%, miss → 0%)
//!      │
//!      ▼
//! Money::discounted → exact 50.000, rounded once → $50.00
//!      │
//!      ▼
//! Tier::classify($50.00 > $50.00?) → Standard
//!      │
//!      ▼
//! ReportEntry { id, name, discounted_price_cents: 5000, tier: Standard }
//! ```
//!
//! Inputs are borrowed and never mutated; output order follows product order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CoreResult;
use crate::index::DiscountIndex;
use crate::money::Money;
use crate::types::{Category, Discount, Product, ReportEntry, Tier};
use crate::validation::{validate_categories, validate_products};
use crate::PREMIUM_THRESHOLD;

// =============================================================================
// Configuration
// =============================================================================

/// Knobs for [`generate_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Discounted prices strictly above this are Premium.
    pub premium_threshold: Money,

    /// Reject negative prices, blank names and out-of-range discounts
    /// instead of passing them through.
    pub validate_input: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            premium_threshold: PREMIUM_THRESHOLD,
            validate_input: false,
        }
    }
}

// =============================================================================
// Generators
// =============================================================================

/// Generates the report with the default configuration.
///
/// Unresolved category ids get no discount. Never fails.
///
/// ## Example
/// ```rust
/// use pricebook_core::{generate, Product};
/// use rust_decimal::Decimal;
///
/// let products = vec![Product::new(1, "Orphan", 404, Decimal::new(1234, 2))];
/// let report = generate(&products, &[]);
///
/// assert_eq!(report.len(), 1);
/// assert_eq!(report[0].discounted_price_cents, 1234);
/// ```
pub fn generate(products: &[Product], categories: &[Category]) -> Vec<ReportEntry> {
    let index = DiscountIndex::build(categories);
    price_products(products, &index, PREMIUM_THRESHOLD)
}

/// Generates the report with an explicit configuration.
///
/// With `validate_input` set, all categories and then all products are
/// checked before any entry is produced; the first failure is returned.
///
/// ## Example
/// ```rust
/// use pricebook_core::{generate_with, CoreError, Product, ReportConfig};
/// use rust_decimal::Decimal;
///
/// let products = vec![Product::new(9, "Broken", 1, Decimal::new(-1, 2))];
/// let config = ReportConfig { validate_input: true, ..ReportConfig::default() };
///
/// let err = generate_with(&products, &[], &config).unwrap_err();
/// assert!(matches!(err, CoreError::InvalidInput { id: 9, .. }));
/// ```
pub fn generate_with(
    products: &[Product],
    categories: &[Category],
    config: &ReportConfig,
) -> CoreResult<Vec<ReportEntry>> {
    if config.validate_input {
        validate_categories(categories)?;
        validate_products(products)?;
    }

    let index = DiscountIndex::build(categories);
    Ok(price_products(products, &index, config.premium_threshold))
}

/// Nested-scan baseline: for every product, walks all categories and keeps
/// the last match.
///
/// O(N·M). Output is identical to [`generate`]; kept for benchmarking and as
/// a reference in tests.
pub fn generate_naive(products: &[Product], categories: &[Category]) -> Vec<ReportEntry> {
    products
        .iter()
        .map(|product| {
            let mut discount = Discount::zero();
            for category in categories {
                if category.id == product.category_id {
                    discount = category.discount;
                }
            }
            price_product(product, discount, PREMIUM_THRESHOLD)
        })
        .collect()
}

fn price_products(products: &[Product], index: &DiscountIndex, threshold: Money) -> Vec<ReportEntry> {
    debug!(
        products = products.len(),
        categories = index.len(),
        "pricing products"
    );

    products
        .iter()
        .map(|product| price_product(product, index.discount_for(product.category_id), threshold))
        .collect()
}

/// The tier is decided on the rounded price, so the reported cents and the
/// tier always agree.
fn price_product(product: &Product, discount: Discount, threshold: Money) -> ReportEntry {
    let discounted = Money::discounted(product.price, discount);

    ReportEntry {
        id: product.id,
        name: product.name.clone(),
        discounted_price_cents: discounted.cents(),
        tier: Tier::classify(discounted, threshold),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
