//! # Validation Module
//!
//! Optional input validation for report generation.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      When Validation Runs                               │
//! │                                                                         │
//! │  generate(...)                                                          │
//! │  └── never validates: bad values pass through the arithmetic           │
//! │                                                                         │
//! │  generate_with(..., ReportConfig { validate_input: true, .. })          │
//! │  ├── every category: discount within 0..=1                             │
//! │  ├── every product: name present, price >= 0                           │
//! │  └── first failure aborts → CoreError::InvalidInput                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pricebook_core::validation::{validate_discount, validate_price};
//! use pricebook_core::Discount;
//! use rust_decimal::Decimal;
//!
//! assert!(validate_price(Decimal::new(1099, 2)).is_ok());
//! assert!(validate_discount(Discount::from_fraction(Decimal::new(15, 1))).is_err());
//! ```

use rust_decimal::Decimal;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{Category, Discount, Product};
use crate::MAX_PRODUCT_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a base price. Zero is allowed (free items).
///
/// ## Example
/// ```rust
/// use pricebook_core::validation::validate_price;
/// use rust_decimal::Decimal;
///
/// assert!(validate_price(Decimal::ZERO).is_ok());
/// assert!(validate_price(Decimal::new(-1, 3)).is_err());
/// ```
pub fn validate_price(price: Decimal) -> ValidationResult<()> {
    if price < Decimal::ZERO {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount fraction: 0 (no discount) to 1 (free).
pub fn validate_discount(discount: Discount) -> ValidationResult<()> {
    if !discount.is_valid() {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 1,
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates one product, tagging failures with its id.
pub fn validate_product(product: &Product) -> CoreResult<()> {
    validate_product_name(&product.name)
        .and_then(|_| validate_price(product.price))
        .map_err(|source| CoreError::InvalidInput {
            entity: "product",
            id: product.id,
            source,
        })
}

/// Validates one category, tagging failures with its id.
pub fn validate_category(category: &Category) -> CoreResult<()> {
    validate_discount(category.discount).map_err(|source| CoreError::InvalidInput {
        entity: "category",
        id: category.id,
        source,
    })
}

/// Validates every product, stopping at the first failure.
pub fn validate_products(products: &[Product]) -> CoreResult<()> {
    products.iter().try_for_each(validate_product)
}

/// Validates every category, stopping at the first failure.
pub fn validate_categories(categories: &[Category]) -> CoreResult<()> {
    categories.iter().try_for_each(validate_category)
}

// =============================================================================
// Unit Tests
// =============================================================================
