//! # pricebook-core: Pure Report Logic for Pricebook
//!
//! This crate holds the inventory report generator as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pricebook Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 pricebook CLI (apps/pricebook-cli)              │   │
//! │  │    config ──► synthetic data ──► timed runs ──► summary/JSON    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ function calls                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ pricebook-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   index   │  │  report   │  │   │
//! │  │   │  Product  │  │   Money   │  │ Discount  │  │ generate  │  │   │
//! │  │   │ Category  │  │ rounding  │  │   Index   │  │  naive    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO GLOBAL STATE • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, ReportEntry, Tier, Discount)
//! - [`money`] - Rounded cent amounts and the exact discount calculation
//! - [`index`] - Category id → discount lookup table
//! - [`report`] - Indexed and naive report generators
//! - [`summary`] - Aggregate counts over a generated report
//! - [`validation`] - Optional input validation
//! - [`fixtures`] - Deterministic synthetic data sets
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use pricebook_core::{generate, Category, Discount, Product, Tier};
//! use rust_decimal::Decimal;
//!
//! let products = vec![Product::new(1, "A", 1, Decimal::new(100, 0))];
//! let categories = vec![Category::new(1, Discount::from_fraction(Decimal::new(5, 1)))];
//!
//! let report = generate(&products, &categories);
//!
//! // $100.00 at 50% off is exactly $50.00, which is still Standard
//! assert_eq!(report[0].discounted_price().cents(), 5000);
//! assert_eq!(report[0].tier, Tier::Standard);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod fixtures;
pub mod index;
pub mod money;
pub mod report;
pub mod summary;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use index::DiscountIndex;
pub use money::Money;
pub use report::{generate, generate_naive, generate_with, ReportConfig};
pub use summary::ReportSummary;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Discounted prices strictly above this are [`Tier::Premium`].
///
/// Exactly $50.00 is still Standard.
pub const PREMIUM_THRESHOLD: Money = Money::from_cents(5000);

/// Maximum product name length accepted by validation.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;
