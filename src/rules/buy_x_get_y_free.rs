//! Buy X Get Y Free
//!
//! For every full group of `x + y` units of one SKU, `y` units are free.
//! The free units are always the cheapest matching ones.

use std::fmt;

use rust_decimal::Decimal;
use smallvec::SmallVec;

use crate::items::{Item, matching, saturating_sum};

/// Buy `x` of a SKU, get `y` more free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyXGetYFree {
    sku: String,
    x: usize,
    y: usize,
}

impl BuyXGetYFree {
    /// Create a new buy-X-get-Y-free rule for a SKU.
    pub fn new(sku: impl Into<String>, x: usize, y: usize) -> Self {
        Self {
            sku: sku.into(),
            x,
            y,
        }
    }

    /// Return the target SKU
    pub fn sku(&self) -> &str {
        &self.sku
    }

    /// Return the number of units paid for in each group
    pub fn x(&self) -> usize {
        self.x
    }

    /// Return the number of free units in each group
    pub fn y(&self) -> usize {
        self.y
    }

    /// Number of units that are free when `count` matching units are scanned.
    ///
    /// A group size of zero never frees anything.
    pub fn free_units(&self, count: usize) -> usize {
        count
            .checked_div(self.x.saturating_add(self.y))
            .map_or(0, |groups| groups.saturating_mul(self.y))
    }

    /// Calculate the discount for the given items.
    pub fn apply(&self, items: &[Item<'_>]) -> Decimal {
        let mut prices: SmallVec<[Decimal; 8]> =
            matching(items, &self.sku).map(Item::unit_price).collect();

        let free = self.free_units(prices.len());

        if free == 0 {
            return Decimal::ZERO;
        }

        prices.sort_unstable();
        saturating_sum(prices.iter().take(free).copied())
    }
}

impl fmt::Display for BuyXGetYFree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Buy {} {} get {} free", self.x, self.sku, self.y)
    }
}
