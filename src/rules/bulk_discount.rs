//! Bulk Discount
//!
//! Once at least `min_quantity` units of a SKU are scanned, every unit of that
//! SKU is re-priced, not only the units past the threshold.

use std::fmt;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

use crate::items::{Item, matching, saturating_sum};

/// Unit price override for a SKU bought in bulk.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkDiscount<'a> {
    sku: String,
    min_quantity: usize,
    new_price: Money<'a, Currency>,
}

impl<'a> BulkDiscount<'a> {
    /// Create a new bulk discount rule for a SKU.
    pub fn new(
        sku: impl Into<String>,
        min_quantity: usize,
        new_price: Money<'a, Currency>,
    ) -> Self {
        Self {
            sku: sku.into(),
            min_quantity,
            new_price,
        }
    }

    /// Return the target SKU
    pub fn sku(&self) -> &str {
        &self.sku
    }

    /// Return the quantity that triggers the new price
    pub fn min_quantity(&self) -> usize {
        self.min_quantity
    }

    /// Return the bulk unit price
    pub fn new_price(&self) -> &Money<'a, Currency> {
        &self.new_price
    }

    /// Calculate the discount for the given items.
    ///
    /// Units already cheaper than the bulk price contribute nothing.
    pub fn apply(&self, items: &[Item<'_>]) -> Decimal {
        if matching(items, &self.sku).count() < self.min_quantity {
            return Decimal::ZERO;
        }

        let new_price = *self.new_price.amount();

        saturating_sum(
            matching(items, &self.sku)
                .map(|item| item.unit_price().saturating_sub(new_price).max(Decimal::ZERO)),
        )
    }
}

impl fmt::Display for BulkDiscount<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} each for {} or more",
            self.sku, self.new_price, self.min_quantity
        )
    }
}
