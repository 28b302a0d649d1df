//! # Error Types
//!
//! Domain-specific error types for pricebook-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pricebook-core errors (this file)                                     │
//! │  ├── CoreError        - Report generation failures                     │
//! │  └── ValidationError  - Field-level input validation failures          │
//! │                                                                         │
//! │  pricebook-cli errors (app)                                            │
//! │  └── ConfigError      - Bad environment configuration                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError::InvalidInput → anyhow (main)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The plain [`generate`](crate::generate) never fails. Errors only appear
//! when validation is switched on through [`ReportConfig`](crate::ReportConfig).

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Report generation errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A product or category failed validation.
    ///
    /// ## When This Occurs
    /// - `ReportConfig::validate_input` is set, and
    /// - a product has a negative price or blank name, or
    /// - a category discount is outside 0%..=100%
    ///
    /// Generation is all-or-nothing: the first invalid record aborts the run.
    #[error("Invalid {entity} {id}: {source}")]
    InvalidInput {
        entity: &'static str,
        id: u64,
        source: ValidationError,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
