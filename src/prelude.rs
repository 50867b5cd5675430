//! Till prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{Catalog, CatalogError},
    checkout::{Checkout, CheckoutError},
    fixtures::{Fixture, FixtureError},
    items::Item,
    pricing::{format_money, fraction_of, round_to_minor},
    products::Product,
    receipt::{Receipt, ReceiptError, ReceiptLine, RuleDiscount},
    rules::{BulkDiscount, BuyXGetYFree, LargestXDiscount, PricingRule},
};
