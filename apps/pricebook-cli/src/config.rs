//! Benchmark configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Command line flags override whatever is loaded here.

use std::env;
use std::str::FromStr;

use pricebook_core::fixtures::{
    DEFAULT_CATEGORY_COUNT, DEFAULT_CATEGORY_DISCOUNT, DEFAULT_PRODUCT_COUNT,
};
use pricebook_core::{Discount, Money, PREMIUM_THRESHOLD};
use rust_decimal::Decimal;

/// Benchmark configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Number of synthetic products
    pub products: usize,

    /// Number of synthetic categories
    pub categories: usize,

    /// Discount carried by every synthetic category
    pub discount: Discount,

    /// Discounted prices above this are Premium
    pub premium_threshold: Money,

    /// Default log filter when RUST_LOG is unset
    pub log_level: String,
}

impl BenchConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let products = parse_var(&lookup, "PRICEBOOK_PRODUCTS", DEFAULT_PRODUCT_COUNT)?;
        let categories = parse_var(&lookup, "PRICEBOOK_CATEGORIES", DEFAULT_CATEGORY_COUNT)?;

        let discount = parse_discount(
            parse_var(&lookup, "PRICEBOOK_DISCOUNT", DEFAULT_CATEGORY_DISCOUNT.fraction())?,
            "PRICEBOOK_DISCOUNT",
        )?;

        let premium_threshold = Money::from_decimal(parse_var(
            &lookup,
            "PRICEBOOK_PREMIUM_THRESHOLD",
            Decimal::new(PREMIUM_THRESHOLD.cents(), 2),
        )?);

        let log_level = lookup("PRICEBOOK_LOG").unwrap_or_else(|| "info".to_string());

        Ok(BenchConfig {
            products,
            categories,
            discount,
            premium_threshold,
            log_level,
        })
    }
}

/// Converts a fractional discount (0.1 = 10%), rejecting values outside [0, 1].
pub fn parse_discount(fraction: Decimal, key: &str) -> Result<Discount, ConfigError> {
    let discount = Discount::from_fraction(fraction);
    if !discount.is_valid() {
        return Err(ConfigError::InvalidValue(key.to_string()));
    }

    Ok(discount)
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = BenchConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.products, 10_000);
        assert_eq!(config.categories, 50);
        assert_eq!(config.discount, DEFAULT_CATEGORY_DISCOUNT);
        assert_eq!(config.premium_threshold.cents(), 5000);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_overrides_from_env() {
        let config = BenchConfig::from_lookup(lookup_from(&[
            ("PRICEBOOK_PRODUCTS", "250"),
            ("PRICEBOOK_CATEGORIES", " 5 "),
            ("PRICEBOOK_DISCOUNT", "0.12344"),
            ("PRICEBOOK_PREMIUM_THRESHOLD", "19.995"),
            ("PRICEBOOK_LOG", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.products, 250);
        assert_eq!(config.categories, 5);
        assert_eq!(config.discount.fraction(), Decimal::new(12344, 5));
        assert_eq!(config.premium_threshold.cents(), 2000);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_unparseable_value() {
        let err = BenchConfig::from_lookup(lookup_from(&[("PRICEBOOK_PRODUCTS", "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "PRICEBOOK_PRODUCTS"));
    }

    #[test]
    fn test_discount_out_of_range() {
        let err = BenchConfig::from_lookup(lookup_from(&[("PRICEBOOK_DISCOUNT", "1.5")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "PRICEBOOK_DISCOUNT"));

        let err = parse_discount(Decimal::new(-1, 1), "--discount").unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for --discount");
        assert_eq!(
            parse_discount(Decimal::ONE, "--discount").unwrap().fraction(),
            Decimal::ONE
        );
    }

    #[test]
    fn test_threshold_rejects_non_numbers() {
        let err = BenchConfig::from_lookup(lookup_from(&[("PRICEBOOK_PREMIUM_THRESHOLD", "inf")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "PRICEBOOK_PREMIUM_THRESHOLD"));
    }
}
