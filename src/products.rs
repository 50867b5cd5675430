//! Products

use rusty_money::{Money, iso::Currency};

/// A catalog product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    /// Stock keeping unit, unique within a catalog
    pub sku: String,

    /// Product name
    pub name: String,

    /// Unit price
    pub price: Money<'a, Currency>,
}

impl<'a> Product<'a> {
    /// Create a new product.
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        price: Money<'a, Currency>,
    ) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            price,
        }
    }
}
