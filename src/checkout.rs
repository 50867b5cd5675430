//! Checkout

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    catalog::Catalog,
    items::{Item, saturating_sum, sum_prices},
    rules::PricingRule,
};

/// Errors raised while scanning items.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// The scanned SKU has no catalog entry.
    #[error("Product not found: {0}")]
    UnknownProduct(String),
}

/// A checkout session: the scanned items and the rules they are priced with.
#[derive(Debug)]
pub struct Checkout<'a> {
    catalog: &'a Catalog<'a>,
    items: Vec<Item<'a>>,
    rules: Vec<PricingRule<'a>>,
}

impl<'a> Checkout<'a> {
    /// Start a new checkout against a catalog with the given pricing rules.
    pub fn new(catalog: &'a Catalog<'a>, rules: Vec<PricingRule<'a>>) -> Self {
        Checkout {
            catalog,
            items: Vec::new(),
            rules,
        }
    }

    /// Scan a product by SKU.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::UnknownProduct`] if the SKU is not in the
    /// catalog. Nothing is added in that case.
    pub fn scan(&mut self, sku: &str) -> Result<(), CheckoutError> {
        let catalog: &'a Catalog<'a> = self.catalog;

        let product = catalog
            .get(sku)
            .ok_or_else(|| CheckoutError::UnknownProduct(sku.to_string()))?;

        self.items.push(Item::new(product));

        Ok(())
    }

    /// Sum of the unit prices of every scanned item.
    pub fn subtotal(&self) -> Money<'a, Currency> {
        Money::from_decimal(sum_prices(&self.items), self.currency())
    }

    /// Discount from each rule, in rule order.
    pub fn discounts(&self) -> SmallVec<[Money<'a, Currency>; 4]> {
        self.rules
            .iter()
            .map(|rule| Money::from_decimal(rule.apply(&self.items), self.currency()))
            .collect()
    }

    /// Subtotal less the sum of every rule's discount, never below zero.
    pub fn total(&self) -> Money<'a, Currency> {
        let subtotal = sum_prices(&self.items);

        let discount = saturating_sum(self.rules.iter().map(|rule| rule.apply(&self.items)));

        Money::from_decimal(
            subtotal.saturating_sub(discount).max(Decimal::ZERO),
            self.currency(),
        )
    }

    /// Scanned items, in scan order.
    pub fn items(&self) -> &[Item<'a>] {
        &self.items
    }

    /// Active pricing rules, in evaluation order.
    pub fn rules(&self) -> &[PricingRule<'a>] {
        &self.rules
    }

    /// Get the number of scanned items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing has been scanned.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Currency of the catalog this checkout prices against.
    pub fn currency(&self) -> &'static Currency {
        self.catalog.currency()
    }
}

#[cfg(test)]
mod tests {
    use decimal_percentage::Percentage;
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use crate::{
        products::Product,
        rules::{BulkDiscount, BuyXGetYFree, LargestXDiscount},
    };

    use super::*;

    fn test_catalog<'a>() -> Result<Catalog<'a>, crate::catalog::CatalogError> {
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

    fn usd(amount: Decimal) -> Money<'static, Currency> {
        Money::from_decimal(amount, USD)
    }

    #[test]
    fn scan_appends_in_scan_order() -> TestResult {
        let catalog = test_catalog()?;
        let mut checkout = Checkout::new(&catalog, Vec::new());

        checkout.scan("vga")?;
        checkout.scan("ipd")?;

        let skus: Vec<&str> = checkout.items().iter().map(Item::sku).collect();

        assert_eq!(skus, ["vga", "ipd"]);
        assert_eq!(checkout.len(), 2);

        Ok(())
    }

    #[test]
    fn scan_unknown_sku_leaves_checkout_unchanged() -> TestResult {
        let catalog = test_catalog()?;
        let mut checkout = Checkout::new(&catalog, Vec::new());

        checkout.scan("ipd")?;

        assert_eq!(
            checkout.scan("xyz"),
            Err(CheckoutError::UnknownProduct("xyz".to_string()))
        );
        assert_eq!(checkout.len(), 1);

        Ok(())
    }

    #[test]
    fn empty_checkout_totals_zero_whatever_the_rules() -> TestResult {
        let catalog = test_catalog()?;
        let checkout = Checkout::new(
            &catalog,
            vec![
                PricingRule::from(LargestXDiscount::new(1, Percentage::from(Decimal::ONE))),
                BuyXGetYFree::new("atv", 1, 1).into(),
                BulkDiscount::new("ipd", 0, Money::from_minor(0, USD)).into(),
            ],
        );

        assert!(checkout.is_empty());
        assert_eq!(checkout.subtotal(), usd(Decimal::ZERO));
        assert_eq!(checkout.total(), usd(Decimal::ZERO));

        Ok(())
    }

    #[test]
    fn total_is_floored_at_zero() -> TestResult {
        let catalog = test_catalog()?;

        // Two rules each discounting the whole of a single item.
        let mut checkout = Checkout::new(
            &catalog,
            vec![
                PricingRule::from(LargestXDiscount::new(1, Percentage::from(Decimal::ONE))),
                BuyXGetYFree::new("vga", 0, 1).into(),
            ],
        );

        checkout.scan("vga")?;

        assert_eq!(checkout.subtotal(), usd(Decimal::new(30_00, 2)));
        assert_eq!(checkout.total(), usd(Decimal::ZERO));

        Ok(())
    }

    #[test]
    fn discounts_are_reported_per_rule() -> TestResult {
        let catalog = test_catalog()?;
        let mut checkout = Checkout::new(
            &catalog,
            vec![
                PricingRule::from(BuyXGetYFree::new("atv", 2, 1)),
                BulkDiscount::new("ipd", 4, Money::from_minor(499_99, USD)).into(),
            ],
        );

        for sku in ["atv", "atv", "atv", "ipd"] {
            checkout.scan(sku)?;
        }

        assert_eq!(
            checkout.discounts().to_vec(),
            vec![usd(Decimal::new(109_50, 2)), usd(Decimal::ZERO)]
        );

        Ok(())
    }

    #[test]
    fn total_is_repeatable() -> TestResult {
        let catalog = test_catalog()?;
        let mut checkout = Checkout::new(
            &catalog,
            vec![PricingRule::from(LargestXDiscount::new(
                2,
                Percentage::from(Decimal::new(30, 2)),
            ))],
        );

        for sku in ["ipd", "mbp", "vga"] {
            checkout.scan(sku)?;
        }

        let first = checkout.total();

        assert_eq!(checkout.total(), first);
        assert_eq!(first, usd(Decimal::new(1_394_986, 3)));

        Ok(())
    }

    #[test]
    fn totals_saturate_instead_of_overflowing() -> TestResult {
        let catalog = Catalog::with_products(
            [Product::new("big", "Priceless", Money::from_decimal(Decimal::MAX, USD))],
            USD,
        )?;

        let mut plain = Checkout::new(&catalog, Vec::new());
        let mut discounted = Checkout::new(
            &catalog,
            vec![
                LargestXDiscount::new(2, Percentage::from(Decimal::ONE)).into(),
                BuyXGetYFree::new("big", 0, 1).into(),
                BulkDiscount::new("big", 1, Money::from_decimal(Decimal::MIN, USD)).into(),
            ],
        );

        for _ in 0..2 {
            plain.scan("big")?;
            discounted.scan("big")?;
        }

        assert_eq!(plain.subtotal(), usd(Decimal::MAX));
        assert_eq!(plain.total(), usd(Decimal::MAX));
        assert_eq!(
            discounted.discounts().to_vec(),
            vec![usd(Decimal::MAX), usd(Decimal::MAX), usd(Decimal::MAX)]
        );
        assert_eq!(discounted.total(), usd(Decimal::ZERO));

        Ok(())
    }

    #[test]
    fn rule_order_does_not_change_the_total() -> TestResult {
        let catalog = test_catalog()?;
        let mut rules: Vec<PricingRule<'_>> = vec![
            BuyXGetYFree::new("atv", 2, 1).into(),
            LargestXDiscount::new(2, Percentage::from(Decimal::new(30, 2))).into(),
            BulkDiscount::new("ipd", 1, Money::from_minor(499_99, USD)).into(),
        ];

        let mut orders = Vec::new();

        for _ in 0..rules.len() {
            orders.push(rules.clone());
            orders.push(rules.iter().rev().cloned().collect::<Vec<_>>());
            rules.rotate_left(1);
        }

        for order in orders {
            let mut checkout = Checkout::new(&catalog, order);

            for sku in ["ipd", "atv", "atv", "atv"] {
                checkout.scan(sku)?;
            }

            let discount: Decimal = checkout.discounts().iter().map(|money| *money.amount()).sum();

            // 109.50 free atv, 30% of (549.99 + 109.50), 50.00 off the ipd
            assert_eq!(discount, Decimal::new(357_347, 3));
            assert_eq!(checkout.total(), usd(Decimal::new(521_143, 3)));
        }

        Ok(())
    }
}
