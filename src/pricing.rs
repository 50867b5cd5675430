//! Pricing helpers
//!
//! Checkout arithmetic is exact; these helpers only shape results for display.

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso::Currency};

/// Rounds an amount to the currency's minor unit, midpoints away from zero.
pub fn round_to_minor<'a>(money: &Money<'a, Currency>) -> Money<'a, Currency> {
    let currency = money.currency();

    let rounded = money
        .amount()
        .round_dp_with_strategy(currency.exponent, RoundingStrategy::MidpointAwayFromZero);

    Money::from_decimal(rounded, currency)
}

/// Formats an amount rounded to the minor unit with its symbol and no digit
/// grouping, e.g. `$1581.14`.
pub fn format_money(money: &Money<'_, Currency>) -> String {
    let currency = money.currency();
    let mut amount = *round_to_minor(money).amount();

    amount.rescale(currency.exponent);

    if currency.symbol_first {
        format!("{}{amount}", currency.symbol)
    } else {
        format!("{amount}{}", currency.symbol)
    }
}

/// Share of `whole` that `part` makes up, or zero when `whole` is zero.
pub fn fraction_of(part: Decimal, whole: Decimal) -> Percentage {
    Percentage::from(part.checked_div(whole).unwrap_or(Decimal::ZERO))
}
