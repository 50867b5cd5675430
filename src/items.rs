//! Items

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

use crate::products::Product;

/// A scanned unit of a catalog product.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Item<'a> {
    product: &'a Product<'a>,
}

impl<'a> Item<'a> {
    /// Creates a new item for the given product
    pub fn new(product: &'a Product<'a>) -> Self {
        Self { product }
    }

    /// Returns the product this item was scanned as
    pub fn product(&self) -> &'a Product<'a> {
        self.product
    }

    /// Returns the SKU of the scanned product
    pub fn sku(&self) -> &'a str {
        &self.product.sku
    }

    /// Returns the price of the item
    pub fn price(&self) -> &'a Money<'a, Currency> {
        &self.product.price
    }

    /// Returns the unit price as a plain decimal amount
    pub fn unit_price(&self) -> Decimal {
        *self.product.price.amount()
    }
}

/// Returns the items scanned as the given SKU, in scan order
pub fn matching<'i, 'a>(
    items: &'i [Item<'a>],
    sku: &'i str,
) -> impl Iterator<Item = &'i Item<'a>> + 'i {
    items.iter().filter(move |item| item.sku() == sku)
}

/// Sums the unit prices of a list of items
pub fn sum_prices<'i, 'a: 'i>(items: impl IntoIterator<Item = &'i Item<'a>>) -> Decimal {
    saturating_sum(items.into_iter().map(Item::unit_price))
}

/// Sums amounts, clamping at `Decimal::MAX` / `Decimal::MIN` instead of overflowing
pub fn saturating_sum(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts.into_iter().fold(Decimal::ZERO, Decimal::saturating_add)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;

    use super::*;

    #[test]
    fn accessors_delegate_to_product() {
        let product = Product::new("atv", "Apple TV", Money::from_minor(109_50, USD));
        let item = Item::new(&product);

        assert_eq!(item.sku(), "atv");
        assert_eq!(item.product().name, "Apple TV");
        assert_eq!(item.price(), &Money::from_minor(109_50, USD));
        assert_eq!(item.unit_price(), Decimal::new(109_50, 2));
    }

    #[test]
    fn matching_filters_by_sku_in_scan_order() {
        let atv = Product::new("atv", "Apple TV", Money::from_minor(109_50, USD));
        let vga = Product::new("vga", "VGA adapter", Money::from_minor(30_00, USD));
        let items = [Item::new(&atv), Item::new(&vga), Item::new(&atv)];

        let matched: Vec<&str> = matching(&items, "atv").map(Item::sku).collect();

        assert_eq!(matched, ["atv", "atv"]);
        assert_eq!(matching(&items, "ipd").count(), 0);
    }

    #[test]
    fn sum_prices_of_no_items_is_zero() {
        let items: [Item<'static>; 0] = [];

        assert_eq!(sum_prices(&items), Decimal::ZERO);
    }

    #[test]
    fn sum_prices_adds_unit_prices() {
        let atv = Product::new("atv", "Apple TV", Money::from_minor(109_50, USD));
        let vga = Product::new("vga", "VGA adapter", Money::from_minor(30_00, USD));
        let items = [Item::new(&atv), Item::new(&vga)];

        assert_eq!(sum_prices(&items), Decimal::new(139_50, 2));
    }

    #[test]
    fn sums_clamp_at_the_decimal_bounds() {
        let big = Product::new("big", "Priceless", Money::from_decimal(Decimal::MAX, USD));
        let items = [Item::new(&big), Item::new(&big)];

        assert_eq!(sum_prices(&items), Decimal::MAX);
        assert_eq!(saturating_sum([Decimal::MIN, -Decimal::ONE]), Decimal::MIN);
        assert_eq!(saturating_sum([Decimal::MAX, Decimal::MIN]), Decimal::ZERO);
    }
}
