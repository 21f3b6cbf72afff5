//! Derived price totals.
//!
//! Totals are always recomputed from current lines. Nothing in this
//! crate keeps a running total counter alongside the line data, so the
//! figures here cannot drift from the state they describe.

use rust_decimal::Decimal;
use rusty_money::{Money, MoneyError, iso::Currency};

use crate::{items::CartLine, pack::Pack};

/// Price of one line: unit price times quantity.
pub fn line_total<'a>(line: &CartLine<'a>) -> Money<'a, Currency> {
    let amount = *line.item().price.amount() * Decimal::from(line.quantity().get());

    Money::from_decimal(amount, line.item().price.currency())
}

/// Sum of line totals across one pack.
///
/// # Errors
///
/// Returns a [`MoneyError`] if a line's currency differs from `currency`.
pub fn pack_total<'a>(
    pack: &Pack<'a>,
    currency: &'static Currency,
) -> Result<Money<'a, Currency>, MoneyError> {
    pack.lines()
        .iter()
        .try_fold(Money::from_minor(0, currency), |acc, line| {
            acc.add(line_total(line))
        })
}

/// Sum of line totals across all packs.
///
/// # Errors
///
/// Returns a [`MoneyError`] if a line's currency differs from `currency`.
pub fn packs_total<'a>(
    packs: &[Pack<'a>],
    currency: &'static Currency,
) -> Result<Money<'a, Currency>, MoneyError> {
    packs
        .iter()
        .try_fold(Money::from_minor(0, currency), |acc, pack| {
            acc.add(pack_total(pack, currency)?)
        })
}
