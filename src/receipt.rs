//! Receipt

use std::io;

use decimal_percentage::Percentage;
use rusty_money::{Money, MoneyError, iso::Currency};
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    checkout::Checkout,
    pricing::{format_money, fraction_of},
    rules::percent_points,
};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Wrapper for money errors.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// The receipt could not be written out.
    #[error("Failed to write receipt: {0}")]
    Io(#[from] io::Error),
}

/// One scanned item on a receipt.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine<'a> {
    /// Product SKU
    pub sku: String,

    /// Product name
    pub name: String,

    /// Unit price
    pub price: Money<'a, Currency>,
}

/// The discount one pricing rule contributed.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleDiscount<'a> {
    /// Human readable rule description
    pub rule: String,

    /// Discount amount, zero when the rule did not apply
    pub discount: Money<'a, Currency>,
}

/// Snapshot of a checkout: what was scanned, what each rule took off, and the total.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    /// Scanned items, in scan order
    lines: Vec<ReceiptLine<'a>>,

    /// Per-rule discounts, in rule order
    discounts: SmallVec<[RuleDiscount<'a>; 4]>,

    /// Total cost before any discounts
    subtotal: Money<'a, Currency>,

    /// Total amount paid after discounts
    total: Money<'a, Currency>,
}

impl<'a> Receipt<'a> {
    /// Build a receipt from the current state of a checkout.
    pub fn from_checkout(checkout: &Checkout<'a>) -> Self {
        let lines = checkout
            .items()
            .iter()
            .map(|item| ReceiptLine {
                sku: item.sku().to_string(),
                name: item.product().name.clone(),
                price: *item.price(),
            })
            .collect();

        let discounts = checkout
            .rules()
            .iter()
            .zip(checkout.discounts())
            .map(|(rule, discount)| RuleDiscount {
                rule: rule.to_string(),
                discount,
            })
            .collect();

        Receipt {
            lines,
            discounts,
            subtotal: checkout.subtotal(),
            total: checkout.total(),
        }
    }

    /// Scanned items, in scan order
    pub fn lines(&self) -> &[ReceiptLine<'a>] {
        &self.lines
    }

    /// Per-rule discounts, in rule order
    pub fn discounts(&self) -> &[RuleDiscount<'a>] {
        &self.discounts
    }

    /// Total cost before any discounts
    pub fn subtotal(&self) -> Money<'a, Currency> {
        self.subtotal
    }

    /// Total amount paid after discounts
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Calculate the savings made by applying the pricing rules.
    ///
    /// This can be less than the sum of the rule discounts when the total
    /// was floored at zero.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn savings(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.subtotal.sub(self.total)
    }

    /// Calculates the savings as a fraction of the subtotal.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn savings_percent(&self) -> Result<Percentage, MoneyError> {
        let savings = self.savings()?;

        Ok(fraction_of(*savings.amount(), *self.subtotal.amount()))
    }

    /// Writes the receipt as tables followed by the totals.
    ///
    /// # Errors
    ///
    /// Returns an error if the receipt cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        writeln!(out, "\n{}", self.items_table())?;

        if !self.discounts.is_empty() {
            writeln!(out, "{}", self.discounts_table())?;
        }

        let savings = format_money(&self.savings()?);
        let savings_percent = percent_points(self.savings_percent()?).round_dp(2);

        writeln!(out, "{:>10}  {}", "Subtotal:", format_money(&self.subtotal))?;
        writeln!(out, "{:>10}  {savings} ({savings_percent}%)", "Savings:")?;
        writeln!(out, "{:>10}  {}", "Total:", format_money(&self.total))?;

        Ok(())
    }

    fn items_table(&self) -> String {
        let mut builder = Builder::default();

        builder.push_record(["", "SKU", "Item", "Price"]);

        for (idx, line) in self.lines.iter().enumerate() {
            builder.push_record([
                format!("#{:<3}", idx + 1),
                line.sku.clone(),
                line.name.clone(),
                format_money(&line.price),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(3..4), Alignment::right());
        table.modify(Rows::first(), Alignment::center());

        table.to_string()
    }

    fn discounts_table(&self) -> String {
        let mut builder = Builder::default();

        builder.push_record(["Rule", "Discount"]);

        for line in &self.discounts {
            builder.push_record([
                line.rule.clone(),
                format!("-{}", format_money(&line.discount)),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..2), Alignment::right());

        table.to_string()
    }
}
