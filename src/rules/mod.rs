//! Pricing Rules
//!
//! Every rule computes a discount from the full list of scanned items. Rules
//! are independent: none sees another's output, and the checkout simply sums
//! what they return.

use std::fmt;

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

use crate::items::Item;

pub mod bulk_discount;
pub mod buy_x_get_y_free;
pub mod largest_x_discount;

pub use bulk_discount::BulkDiscount;
pub use buy_x_get_y_free::BuyXGetYFree;
pub use largest_x_discount::LargestXDiscount;

/// Pricing rule enum
#[derive(Debug, Clone)]
pub enum PricingRule<'a> {
    /// Percentage off the most expensive items
    LargestXDiscount(LargestXDiscount),

    /// Buy X of a SKU, get Y free
    BuyXGetYFree(BuyXGetYFree),

    /// Bulk unit price for a SKU
    BulkDiscount(BulkDiscount<'a>),
}

impl PricingRule<'_> {
    /// Calculate this rule's discount for the given items.
    ///
    /// Never negative, and zero for an empty list.
    pub fn apply(&self, items: &[Item<'_>]) -> Decimal {
        match self {
            PricingRule::LargestXDiscount(largest_x) => largest_x.apply(items),
            PricingRule::BuyXGetYFree(buy_x_get_y) => buy_x_get_y.apply(items),
            PricingRule::BulkDiscount(bulk) => bulk.apply(items),
        }
    }
}

impl fmt::Display for PricingRule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingRule::LargestXDiscount(largest_x) => fmt::Display::fmt(largest_x, f),
            PricingRule::BuyXGetYFree(buy_x_get_y) => fmt::Display::fmt(buy_x_get_y, f),
            PricingRule::BulkDiscount(bulk) => fmt::Display::fmt(bulk, f),
        }
    }
}

impl From<LargestXDiscount> for PricingRule<'_> {
    fn from(rule: LargestXDiscount) -> Self {
        PricingRule::LargestXDiscount(rule)
    }
}

impl From<BuyXGetYFree> for PricingRule<'_> {
    fn from(rule: BuyXGetYFree) -> Self {
        PricingRule::BuyXGetYFree(rule)
    }
}

impl<'a> From<BulkDiscount<'a>> for PricingRule<'a> {
    fn from(rule: BulkDiscount<'a>) -> Self {
        PricingRule::BulkDiscount(rule)
    }
}

/// Converts a fractional percentage to percent points for display.
pub(crate) fn percent_points(percentage: Percentage) -> Decimal {
    // `Percentage` is a fraction (e.g. 0.25)
    (percentage * Decimal::ONE_HUNDRED).normalize()
}
