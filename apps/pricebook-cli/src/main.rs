//! # Pricebook Benchmark
//!
//! Times the naive O(N·M) report generator against the indexed O(N + M) one
//! over a synthetic data set.
//!
//! ## Usage
//! ```bash
//! # Default data set: 10,000 products, 50 categories, 10% off
//! pricebook
//!
//! # Bigger run, indexed generator only
//! pricebook --products 1000000 --categories 5000 --skip-naive
//!
//! # Full report as JSON on stdout (logs stay on stderr)
//! pricebook --json > report.json
//! ```

mod bench;
mod config;

use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use pricebook_core::{Money, ReportEntry, ReportSummary};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::bench::{BenchOptions, BenchOutcome};
use crate::config::{parse_discount, BenchConfig};

#[derive(Parser)]
#[command(name = "pricebook")]
#[command(about = "Benchmark the naive and indexed inventory report generators", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of synthetic products [env: PRICEBOOK_PRODUCTS]
    #[arg(short, long)]
    products: Option<usize>,

    /// Number of synthetic categories [env: PRICEBOOK_CATEGORIES]
    #[arg(short, long)]
    categories: Option<usize>,

    /// Discount of every category as a fraction, 0.1 = 10% [env: PRICEBOOK_DISCOUNT]
    #[arg(short, long)]
    discount: Option<Decimal>,

    /// Premium threshold in dollars [env: PRICEBOOK_PREMIUM_THRESHOLD]
    #[arg(short, long)]
    threshold: Option<Decimal>,

    /// Reject invalid prices and discounts instead of passing them through
    #[arg(long)]
    validate: bool,

    /// Only run the indexed generator
    #[arg(long)]
    skip_naive: bool,

    /// Print the full report as JSON to stdout
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    summary: ReportSummary,
    entries: &'a [ReportEntry],
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = BenchConfig::load().context("failed to load configuration")?;
    apply_overrides(&mut config, &cli)?;

    init_logging(&config.log_level);
    info!(
        products = config.products,
        categories = config.categories,
        discount = %config.discount,
        threshold = %config.premium_threshold,
        "starting benchmark"
    );

    let options = BenchOptions {
        validate_input: cli.validate,
        skip_naive: cli.skip_naive,
    };
    let outcome = bench::run(&config, options)?;

    if cli.json {
        print_json(&outcome)
    } else {
        print_summary(&outcome);
        Ok(())
    }
}

fn apply_overrides(config: &mut BenchConfig, cli: &Cli) -> Result<()> {
    if let Some(products) = cli.products {
        config.products = products;
    }
    if let Some(categories) = cli.categories {
        config.categories = categories;
    }
    if let Some(discount) = cli.discount {
        config.discount = parse_discount(discount, "--discount")?;
    }
    if let Some(threshold) = cli.threshold {
        config.premium_threshold = Money::from_decimal(threshold);
    }
    Ok(())
}

/// Logs go to stderr so `--json` output on stdout stays parseable.
/// RUST_LOG wins over the configured level.
fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn print_summary(outcome: &BenchOutcome) {
    let summary = &outcome.summary;

    println!("Pricebook Report Benchmark");
    println!("==========================");
    if let Some(naive) = outcome.naive_elapsed {
        println!("Naive   (O(N·M)): {:?}", naive);
    }
    println!("Indexed (O(N+M)): {:?}", outcome.indexed_elapsed);
    if let Some(speedup) = outcome.speedup() {
        println!("Speedup:          {:.1}x", speedup);
    }
    println!();
    println!("Entries:  {}", summary.total_entries);
    println!("Premium:  {}", summary.premium_count);
    println!("Standard: {}", summary.standard_count);
    println!("Total:    {}", summary.total_value());
}

fn print_json(outcome: &BenchOutcome) -> Result<()> {
    let report = JsonReport {
        generated_at: Utc::now(),
        summary: outcome.summary,
        entries: &outcome.entries,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &report).context("failed to write JSON report")?;
    writeln!(out)?;
    Ok(())
}
