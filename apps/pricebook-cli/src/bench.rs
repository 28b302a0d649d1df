//! Timed report runs.
//!
//! ```text
//! BenchConfig ──► synthetic data ──┬──► generate_naive  (timed, optional)
//!                                  └──► generate_with   (timed)
//!                                              │
//!                                  outputs compared ──► BenchOutcome
//! ```

use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use pricebook_core::fixtures::{synthetic_categories, synthetic_products};
use pricebook_core::{generate_naive, generate_with, ReportConfig, ReportEntry, ReportSummary};
use tracing::{debug, info};

use crate::config::BenchConfig;

/// What to run on top of the configured data set.
#[derive(Debug, Clone, Copy, Default)]
pub struct BenchOptions {
    pub validate_input: bool,
    pub skip_naive: bool,
}

/// Result of one benchmark run.
#[derive(Debug)]
pub struct BenchOutcome {
    pub indexed_elapsed: Duration,
    pub naive_elapsed: Option<Duration>,
    pub entries: Vec<ReportEntry>,
    pub summary: ReportSummary,
}

impl BenchOutcome {
    /// How many times faster the indexed run was, when both ran.
    pub fn speedup(&self) -> Option<f64> {
        let naive = self.naive_elapsed?;
        let indexed = self.indexed_elapsed.as_secs_f64();
        (indexed > 0.0).then(|| naive.as_secs_f64() / indexed)
    }
}

pub fn run(config: &BenchConfig, options: BenchOptions) -> Result<BenchOutcome> {
    let products = synthetic_products(config.products, config.categories);
    let categories = synthetic_categories(config.categories, config.discount);
    debug!(
        products = products.len(),
        categories = categories.len(),
        discount = %config.discount,
        "synthetic data set ready"
    );

    let report_config = ReportConfig {
        premium_threshold: config.premium_threshold,
        validate_input: options.validate_input,
    };

    let naive = if options.skip_naive {
        None
    } else {
        let start = Instant::now();
        let entries = generate_naive(&products, &categories);
        let elapsed = start.elapsed();
        info!(?elapsed, entries = entries.len(), "naive report generated");
        Some((entries, elapsed))
    };

    let start = Instant::now();
    let entries = generate_with(&products, &categories, &report_config)
        .context("indexed report generation failed")?;
    let indexed_elapsed = start.elapsed();
    info!(elapsed = ?indexed_elapsed, entries = entries.len(), "indexed report generated");

    let naive_elapsed = match naive {
        Some((naive_entries, elapsed)) => {
            ensure_same_prices(&naive_entries, &entries)?;
            Some(elapsed)
        }
        None => None,
    };

    let summary = ReportSummary::from_entries(&entries);

    Ok(BenchOutcome {
        indexed_elapsed,
        naive_elapsed,
        entries,
        summary,
    })
}

/// The naive baseline always uses the default threshold, so only ids and
/// prices are compared.
fn ensure_same_prices(naive: &[ReportEntry], indexed: &[ReportEntry]) -> Result<()> {
    if naive.len() != indexed.len() {
        bail!(
            "naive report has {} entries, indexed report has {}",
            naive.len(),
            indexed.len()
        );
    }

    if let Some((a, b)) = naive.iter().zip(indexed).find(|(a, b)| {
        a.id != b.id || a.discounted_price_cents != b.discounted_price_cents
    }) {
        bail!(
            "reports disagree on product {}: naive {} vs indexed {}",
            a.id,
            a.discounted_price(),
            b.discounted_price()
        );
    }

    Ok(())
}
