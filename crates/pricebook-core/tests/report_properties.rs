//! Report properties checked over the synthetic data sets.

use std::collections::HashMap;

use pricebook_core::fixtures::{
    default_data_set, synthetic_categories, synthetic_products, DEFAULT_CATEGORY_DISCOUNT,
};
use pricebook_core::{
    generate, generate_naive, generate_with, Category, CoreError, Discount, Money, Product,
    ReportConfig, ReportEntry, ReportSummary, Tier, PREMIUM_THRESHOLD,
};
use rust_decimal::Decimal;

/// round(price * (1 - d), 2), half away from zero, as an exact fraction.
///
/// price = pm / 10^ps and d = dm / 10^ds, so the price in cents is
/// pm * (10^ds - dm) * 100 / 10^(ps + ds).
fn expected_cents(price: Decimal, discount: Discount) -> i64 {
    let fraction = discount.fraction();
    let ds = 10_i128.pow(fraction.scale());
    let numerator = price.mantissa() * (ds - fraction.mantissa()) * 100;
    let denominator = 10_i128.pow(price.scale()) * ds;

    let half = denominator / 2;
    let rounded = if numerator >= 0 {
        (numerator + half) / denominator
    } else {
        (numerator - half) / denominator
    };
    rounded as i64
}

fn price(raw: &str) -> Decimal {
    raw.parse().unwrap()
}

fn discount(raw: &str) -> Discount {
    Discount::from_fraction(raw.parse().unwrap())
}

#[test]
fn default_data_set_prices_match_formula() {
    let (products, categories) = default_data_set();

    let report = generate(&products, &categories);

    assert_eq!(report.len(), products.len());
    for (product, entry) in products.iter().zip(&report) {
        assert_eq!(entry.id, product.id);
        assert_eq!(entry.name, product.name);
        assert_eq!(
            entry.discounted_price_cents,
            expected_cents(product.price, DEFAULT_CATEGORY_DISCOUNT),
            "product {} at {}",
            product.id,
            product.price
        );
    }
}

#[test]
fn sub_cent_prices_and_fine_discounts_round_once() {
    let raw_prices = [
        "100.0099", "1.006", "10000.00", "0.005", "0.0049", "55.5555", "99.9999", "-0.125",
        "62.49995", "0.0001",
    ];
    let products: Vec<Product> = raw_prices
        .iter()
        .enumerate()
        .map(|(i, raw)| Product::new(i as u64, format!("P{i}"), (i % 3) as u64, price(raw)))
        .collect();
    let categories = vec![
        Category::new(0, discount("0.5")),
        Category::new(1, discount("0.12344")),
        Category::new(2, discount("0.00001")),
    ];

    let report = generate(&products, &categories);

    for (product, entry) in products.iter().zip(&report) {
        let discount = categories[product.category_id as usize].discount;
        assert_eq!(
            entry.discounted_price_cents,
            expected_cents(product.price, discount),
            "product {} at {} with {}",
            product.id,
            product.price,
            discount
        );
    }

    // 100.0099 at 50% is 50.00495: rounds to $50.00, which stays Standard
    assert_eq!(report[0].discounted_price_cents, 5000);
    assert_eq!(report[0].tier, Tier::Standard);
    // 1.006 at 12.344% is 0.88182...
    assert_eq!(report[1].discounted_price_cents, 88);
    // 10000.00 at 0.001% is 9999.90
    assert_eq!(report[2].discounted_price_cents, 999990);
}

#[test]
fn exact_oracle_cases() {
    assert_eq!(expected_cents(price("10000.00"), discount("0.12344")), 876560);
    assert_eq!(expected_cents(price("1.006"), discount("0.5")), 50);
    assert_eq!(expected_cents(price("100.0099"), discount("0.5")), 5000);
    assert_eq!(expected_cents(price("-0.125"), Discount::zero()), -13);
}

#[test]
fn tier_follows_strict_threshold() {
    let (products, categories) = default_data_set();

    for entry in generate(&products, &categories) {
        let premium = entry.discounted_price() > PREMIUM_THRESHOLD;
        assert_eq!(entry.tier == Tier::Premium, premium, "entry {}", entry.id);
    }
}

#[test]
fn naive_and_indexed_agree_on_default_data_set() {
    let (products, categories) = default_data_set();

    assert_eq!(generate_naive(&products, &categories), generate(&products, &categories));
}

#[test]
fn naive_and_indexed_agree_with_duplicates_and_misses() {
    let products = synthetic_products(1_000, 40);
    let mut categories = synthetic_categories(30, discount("0.15"));
    categories.extend([
        Category::new(3, discount("0.9")),
        Category::new(7, discount("0.25")),
        Category::new(3, discount("0.04321")),
    ]);

    let indexed = generate(&products, &categories);

    assert_eq!(indexed, generate_naive(&products, &categories));

    let product_3 = products.iter().position(|p| p.category_id == 3).unwrap();
    assert_eq!(
        indexed[product_3].discounted_price_cents,
        expected_cents(products[product_3].price, discount("0.04321"))
    );

    // categories 30..40 do not exist
    let orphan = products.iter().position(|p| p.category_id == 35).unwrap();
    assert_eq!(
        indexed[orphan].discounted_price_cents,
        expected_cents(products[orphan].price, Discount::zero())
    );
}

#[test]
fn empty_categories_only_round_prices() {
    let products = synthetic_products(250, 10);

    let report = generate(&products, &[]);

    for (product, entry) in products.iter().zip(&report) {
        assert_eq!(entry.discounted_price(), Money::from_decimal(product.price));
    }
}

#[test]
fn empty_products_give_empty_report() {
    let categories = synthetic_categories(10, DEFAULT_CATEGORY_DISCOUNT);

    assert!(generate(&[], &categories).is_empty());
    assert!(generate_naive(&[], &categories).is_empty());
}

#[test]
fn inputs_are_not_mutated_and_output_is_repeatable() {
    let (products, categories) = default_data_set();
    let products_before = products.clone();
    let categories_before = categories.clone();

    let first = generate(&products, &categories);
    let second = generate(&products, &categories);

    assert_eq!(first, second);
    assert_eq!(products, products_before);
    assert_eq!(categories, categories_before);
}

#[test]
fn mixed_discounts_resolve_per_category() {
    let categories: Vec<Category> = (0..5)
        .map(|id| Category::new(id, Discount::from_fraction(Decimal::new(id as i64 * 2, 1))))
        .collect();
    let products: Vec<Product> = (0..5)
        .map(|id| Product::new(id, format!("P{id}"), id, Decimal::ONE_HUNDRED))
        .collect();

    let prices: HashMap<u64, i64> = generate(&products, &categories)
        .into_iter()
        .map(|e| (e.id, e.discounted_price_cents))
        .collect();

    assert_eq!(prices[&0], 10000);
    assert_eq!(prices[&1], 8000);
    assert_eq!(prices[&2], 6000);
    assert_eq!(prices[&3], 4000);
    assert_eq!(prices[&4], 2000);
}

#[test]
fn validated_generation_rejects_negative_price() {
    let mut products = synthetic_products(10, 2);
    products[6].price = price("-0.0001");
    let categories = synthetic_categories(2, DEFAULT_CATEGORY_DISCOUNT);
    let config = ReportConfig {
        validate_input: true,
        ..ReportConfig::default()
    };

    let err = generate_with(&products, &categories, &config).unwrap_err();

    assert!(matches!(
        err,
        CoreError::InvalidInput {
            entity: "product",
            id: 6,
            ..
        }
    ));
}

#[test]
fn summary_counts_add_up() {
    let (products, categories) = default_data_set();
    let report = generate(&products, &categories);

    let summary = ReportSummary::from_entries(&report);

    assert_eq!(summary.total_entries, products.len());
    assert_eq!(summary.premium_count + summary.standard_count, summary.total_entries);
    let total: i64 = report.iter().map(|e| e.discounted_price_cents).sum();
    assert_eq!(summary.total_value_cents, total);
}

#[test]
fn summary_total_saturates_near_i64_max() {
    let entries = vec![
        ReportEntry {
            id: 1,
            name: "Huge".to_string(),
            discounted_price_cents: i64::MAX,
            tier: Tier::Premium,
        },
        ReportEntry {
            id: 2,
            name: "Penny".to_string(),
            discounted_price_cents: 1,
            tier: Tier::Standard,
        },
    ];

    let summary = ReportSummary::from_entries(&entries);

    assert_eq!(summary.premium_count, 1);
    assert_eq!(summary.total_value_cents, i64::MAX);
}
