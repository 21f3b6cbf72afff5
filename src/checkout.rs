//! Checkout quotes and the payment handoff summary.

use rust_decimal::RoundingStrategy;
use rusty_money::{Money, MoneyError, iso::Currency};

use crate::restaurant::Restaurant;

/// Itemised checkout figures for one session against one restaurant.
///
/// Every field is derived from the subtotal and the restaurant's
/// charges; a quote holds no state of its own.
#[derive(Debug, Clone)]
pub struct Quote<'a> {
    /// Item total across all packs, before charges.
    pub subtotal: Money<'a, Currency>,

    /// Restaurant service charge.
    pub restaurant_charges: Money<'a, Currency>,

    /// Delivery fee.
    pub delivery_fee: Money<'a, Currency>,

    /// Discount amount: subtotal times the restaurant's discount fraction.
    pub discount: Money<'a, Currency>,

    /// `subtotal + restaurant_charges + delivery_fee - discount`,
    /// rounded half-up to 2 decimal places.
    pub total: Money<'a, Currency>,
}

/// Build a quote from an item subtotal and a restaurant's charges.
///
/// # Errors
///
/// Returns a [`MoneyError`] if the subtotal and the restaurant's charges
/// are in different currencies.
pub fn quote<'a>(
    subtotal: Money<'a, Currency>,
    restaurant: &Restaurant<'a>,
) -> Result<Quote<'a>, MoneyError> {
    let discount_amount = restaurant.discount() * *subtotal.amount();
    let discount = Money::from_decimal(discount_amount, subtotal.currency());

    let total = subtotal
        .add(restaurant.restaurant_charges)?
        .add(restaurant.delivery_fee)?
        .sub(discount)?;

    let rounded = total
        .amount()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    Ok(Quote {
        subtotal,
        restaurant_charges: restaurant.restaurant_charges,
        delivery_fee: restaurant.delivery_fee,
        discount,
        total: Money::from_decimal(rounded, subtotal.currency()),
    })
}

/// The summary a payment screen consumes after finalize.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSummary<'a> {
    total_items: u64,
    total_price: Money<'a, Currency>,
}

impl<'a> CheckoutSummary<'a> {
    pub(crate) fn new(total_items: u64, total_price: Money<'a, Currency>) -> Self {
        Self {
            total_items,
            total_price,
        }
    }

    /// Total units across all packs and lines.
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Final payable amount, rounded to 2 decimal places.
    pub fn total_price(&self) -> Money<'a, Currency> {
        self.total_price
    }

    /// The payable amount as a plain 2-decimal string, the shape the
    /// payment initiation payload expects.
    pub fn total_price_display(&self) -> String {
        format!("{:.2}", self.total_price.amount())
    }
}
