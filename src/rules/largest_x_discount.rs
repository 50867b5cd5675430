//! Largest X Discount
//!
//! A percentage discount on the X most expensive items in the checkout,
//! whatever their SKU.

use std::fmt;

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use smallvec::SmallVec;

use crate::{
    items::{Item, saturating_sum},
    rules::percent_points,
};

/// Percentage off the `x` highest priced items.
#[derive(Debug, Copy, Clone)]
pub struct LargestXDiscount {
    x: usize,
    percentage: Percentage,
}

impl LargestXDiscount {
    /// Create a new largest-X discount. `percentage` is a fraction, so 30% off is `0.30`.
    pub fn new(x: usize, percentage: Percentage) -> Self {
        Self { x, percentage }
    }

    /// Return the number of items discounted
    pub fn x(&self) -> usize {
        self.x
    }

    /// Return the discount percentage
    pub fn percentage(&self) -> Percentage {
        self.percentage
    }

    /// The items this rule discounts, most expensive first.
    ///
    /// Items sharing a price keep their scan order, so the selection is
    /// reproducible between calls.
    pub fn discounted_items<'a>(&self, items: &[Item<'a>]) -> SmallVec<[Item<'a>; 16]> {
        let mut ranked: SmallVec<[Item<'a>; 16]> = items.iter().copied().collect();

        // `sort_by` is stable
        ranked.sort_by(|a, b| b.unit_price().cmp(&a.unit_price()));
        ranked.truncate(self.x);

        ranked
    }

    /// Calculate the discount for the given items.
    ///
    /// Zero when `x` is zero or the percentage is not positive.
    pub fn apply(&self, items: &[Item<'_>]) -> Decimal {
        let fraction = self.percentage * Decimal::ONE;

        if self.x == 0 || fraction <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        saturating_sum(
            self.discounted_items(items)
                .iter()
                .map(|item| fraction.saturating_mul(item.unit_price())),
        )
    }
}

impl fmt::Display for LargestXDiscount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}% off the {} most expensive items",
            percent_points(self.percentage),
            self.x
        )
    }
}
