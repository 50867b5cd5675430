//! Built-in demo store, used when no fixture set is given.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::USD};

use till::prelude::*;

/// The four-product demo catalog, priced in USD.
pub(crate) fn catalog() -> Result<Catalog<'static>, CatalogError> {
    Catalog::with_products(
        [
            Product::new("ipd", "Super iPad", Money::from_minor(549_99, USD)),
            Product::new("mbp", "MacBook Pro", Money::from_minor(1399_99, USD)),
            Product::new("atv", "Apple TV", Money::from_minor(109_50, USD)),
            Product::new("vga", "VGA adapter", Money::from_minor(30_00, USD)),
        ],
        USD,
    )
}

/// 30% off the three most expensive items, 3-for-2 Apple TVs, and bulk iPads.
pub(crate) fn rules() -> Vec<PricingRule<'static>> {
    vec![
        LargestXDiscount::new(3, Percentage::from(Decimal::new(30, 2))).into(),
        BuyXGetYFree::new("atv", 2, 1).into(),
        BulkDiscount::new("ipd", 4, Money::from_minor(499_99, USD)).into(),
    ]
}

pub(crate) fn scans() -> Vec<String> {
    ["ipd", "mbp", "atv", "atv", "atv", "vga"]
        .into_iter()
        .map(String::from)
        .collect()
}
