//! Aggregate figures over a generated report.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{ReportEntry, Tier};

/// Counts and totals for one report run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_entries: usize,
    pub premium_count: usize,
    pub standard_count: usize,
    /// Sum of all discounted prices in cents, saturating at the i64 range.
    pub total_value_cents: i64,
}

impl ReportSummary {
    /// Summarizes a report in one pass.
    ///
    /// ## Example
    /// ```rust
    /// use pricebook_core::{generate, Product, ReportSummary};
    /// use rust_decimal::Decimal;
    ///
    /// let products = vec![
    ///     Product::new(1, "Cheap", 0, Decimal::new(10, 0)),
    ///     Product::new(2, "Dear", 0, Decimal::new(90, 0)),
    /// ];
    /// let summary = ReportSummary::from_entries(&generate(&products, &[]));
    ///
    /// assert_eq!(summary.premium_count, 1);
    /// assert_eq!(summary.total_value().cents(), 10000);
    /// ```
    pub fn from_entries(entries: &[ReportEntry]) -> Self {
        let premium_count = entries.iter().filter(|e| e.tier == Tier::Premium).count();
        let total_value: Money = entries.iter().map(ReportEntry::discounted_price).sum();

        ReportSummary {
            total_entries: entries.len(),
            premium_count,
            standard_count: entries.len() - premium_count,
            total_value_cents: total_value.cents(),
        }
    }

    #[inline]
    pub fn total_value(&self) -> Money {
        Money::from_cents(self.total_value_cents)
    }
}
