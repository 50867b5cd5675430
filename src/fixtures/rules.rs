//! Pricing Rule Fixtures

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    catalog::Catalog,
    fixtures::{FixtureError, products::parse_price},
    rules::{BulkDiscount, BuyXGetYFree, LargestXDiscount, PricingRule},
};

/// Wrapper for pricing rules in YAML
#[derive(Debug, Deserialize)]
pub struct RulesFixture {
    /// Rules in evaluation order
    pub rules: Vec<RuleFixture>,
}

/// Pricing rule fixture from YAML
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleFixture {
    /// Percentage off the most expensive items
    LargestXDiscount {
        /// Number of items discounted
        x: usize,

        /// Discount percentage (e.g., "30%" or "0.30")
        percentage: String,
    },

    /// Buy X get Y free
    BuyXGetYFree {
        /// Target SKU
        sku: String,

        /// Units paid for in each group
        x: usize,

        /// Free units in each group
        y: usize,
    },

    /// Bulk unit price
    BulkDiscount {
        /// Target SKU
        sku: String,

        /// Quantity that triggers the bulk price
        min_quantity: usize,

        /// Bulk unit price (e.g., "499.99 USD")
        new_price: String,
    },
}

impl RuleFixture {
    /// Convert to a `PricingRule`, checking it against the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if a percentage or price is invalid, a target SKU is
    /// not in the catalog, or a bulk price is in another currency.
    pub fn try_into_rule<'a>(
        self,
        catalog: &Catalog<'a>,
    ) -> Result<PricingRule<'a>, FixtureError> {
        match self {
            RuleFixture::LargestXDiscount { x, percentage } => {
                Ok(LargestXDiscount::new(x, parse_percentage(&percentage)?).into())
            }
            RuleFixture::BuyXGetYFree { sku, x, y } => {
                ensure_known_sku(catalog, &sku)?;

                Ok(BuyXGetYFree::new(sku, x, y).into())
            }
            RuleFixture::BulkDiscount {
                sku,
                min_quantity,
                new_price,
            } => {
                ensure_known_sku(catalog, &sku)?;

                let new_price = parse_price(&new_price)?;

                if new_price.currency() != catalog.currency() {
                    return Err(FixtureError::CurrencyMismatch(
                        catalog.currency().iso_alpha_code.to_string(),
                        new_price.currency().iso_alpha_code.to_string(),
                    ));
                }

                Ok(BulkDiscount::new(sku, min_quantity, new_price).into())
            }
        }
    }
}

fn ensure_known_sku(catalog: &Catalog<'_>, sku: &str) -> Result<(), FixtureError> {
    if catalog.contains(sku) {
        Ok(())
    } else {
        Err(FixtureError::ProductNotFound(sku.to_string()))
    }
}

/// Parse percentage string (e.g., "30%" or "0.30") into a `Percentage`
///
/// Accepts two formats:
/// - Percentage format: "30%" for 30%
/// - Decimal format: "0.30" for 30%
///
/// # Errors
///
/// Returns an error if the string cannot be parsed or lies outside 0–100%.
pub fn parse_percentage(s: &str) -> Result<Percentage, FixtureError> {
    let trimmed = s.trim();

    let fraction = if let Some(percent_str) = trimmed.strip_suffix('%') {
        percent_str
            .trim()
            .parse::<Decimal>()
            .ok()
            .and_then(|points| points.checked_div(Decimal::ONE_HUNDRED))
    } else {
        trimmed.parse::<Decimal>().ok()
    };

    match fraction {
        Some(fraction) if fraction >= Decimal::ZERO && fraction <= Decimal::ONE => {
            Ok(Percentage::from(fraction))
        }
        _ => Err(FixtureError::InvalidPercentage(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{
        Money,
        iso::{GBP, USD},
    };
    use testresult::TestResult;

    use crate::products::Product;

    use super::*;

    fn test_catalog<'a>() -> Result<Catalog<'a>, crate::catalog::CatalogError> {
        Catalog::with_products(
            [Product::new("ipd", "Super iPad", Money::from_minor(549_99, USD))],
            USD,
        )
    }

    #[test]
    fn rule_fixture_rejects_unknown_type() {
        let yaml = r"
type: mystery_rule
x: 1
";
        let result: Result<RuleFixture, _> = serde_norway::from_str(yaml);

        assert!(result.is_err());
    }

    #[test]
    fn largest_x_discount_parses_from_yaml() -> TestResult {
        let yaml = r"
type: largest_x_discount
x: 3
percentage: 30%
";
        let fixture: RuleFixture = serde_norway::from_str(yaml)?;
        let rule = fixture.try_into_rule(&test_catalog()?)?;

        assert!(matches!(
            rule,
            PricingRule::LargestXDiscount(largest_x)
                if largest_x.x() == 3
                    && largest_x.percentage() == Percentage::from(Decimal::new(30, 2))
        ));

        Ok(())
    }

    #[test]
    fn bulk_discount_parses_from_yaml() -> TestResult {
        let yaml = r"
type: bulk_discount
sku: ipd
min_quantity: 4
new_price: 499.99 USD
";
        let fixture: RuleFixture = serde_norway::from_str(yaml)?;
        let rule = fixture.try_into_rule(&test_catalog()?)?;

        assert!(matches!(
            rule,
            PricingRule::BulkDiscount(bulk)
                if bulk.sku() == "ipd"
                    && bulk.min_quantity() == 4
                    && *bulk.new_price() == Money::from_minor(499_99, USD)
        ));

        Ok(())
    }

    #[test]
    fn rule_for_unknown_sku_is_rejected() -> TestResult {
        let fixture = RuleFixture::BuyXGetYFree {
            sku: "atv".to_string(),
            x: 2,
            y: 1,
        };

        let result = fixture.try_into_rule(&test_catalog()?);

        assert!(matches!(result, Err(FixtureError::ProductNotFound(sku)) if sku == "atv"));

        Ok(())
    }

    #[test]
    fn bulk_price_in_another_currency_is_rejected() -> TestResult {
        let fixture = RuleFixture::BulkDiscount {
            sku: "ipd".to_string(),
            min_quantity: 4,
            new_price: "499.99 GBP".to_string(),
        };

        let result = fixture.try_into_rule(&test_catalog()?);

        assert!(matches!(
            result,
            Err(FixtureError::CurrencyMismatch(expected, found))
                if expected == USD.iso_alpha_code && found == GBP.iso_alpha_code
        ));

        Ok(())
    }

    #[test]
    fn parse_percentage_accepts_both_formats() -> Result<(), FixtureError> {
        assert_eq!(parse_percentage("15%")?, Percentage::from(Decimal::new(15, 2)));
        assert_eq!(parse_percentage("0.15")?, Percentage::from(Decimal::new(15, 2)));
        assert_eq!(parse_percentage("  100%  ")?, Percentage::from(Decimal::ONE));

        Ok(())
    }

    #[test]
    fn parse_percentage_rejects_out_of_range_values() {
        for input in ["150%", "-5%", "1.5", "invalid", "%"] {
            assert!(
                matches!(parse_percentage(input), Err(FixtureError::InvalidPercentage(_))),
                "expected {input} to be rejected"
            );
        }
    }
}
