//! Restaurants and their checkout charges.

use std::fmt;

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when constructing a restaurant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RestaurantError {
    /// The discount fraction falls outside `[0, 1]`.
    #[error("discount must be a fraction between 0 and 1, got {0}")]
    InvalidDiscount(Decimal),

    /// The service charge and delivery fee use different currencies.
    #[error("restaurant charges are in {charges}, but delivery fee is in {delivery_fee}")]
    CurrencyMismatch {
        /// Currency of the service charge.
        charges: &'static str,

        /// Currency of the delivery fee.
        delivery_fee: &'static str,
    },
}

/// Identifier binding a cart session to one restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantId(String);

impl RestaurantId {
    /// Create a restaurant identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A restaurant and the figures it contributes at checkout.
#[derive(Debug, Clone)]
pub struct Restaurant<'a> {
    /// Restaurant identifier.
    pub id: RestaurantId,

    /// Display name.
    pub name: String,

    /// Flat service charge added to every order.
    pub restaurant_charges: Money<'a, Currency>,

    /// Flat delivery fee added to every order.
    pub delivery_fee: Money<'a, Currency>,

    /// Discount applied to the item total, as a fraction in `[0, 1]`.
    discount: Percentage,
}

impl<'a> Restaurant<'a> {
    /// Create a restaurant, validating its discount and charge currencies.
    ///
    /// # Errors
    ///
    /// - [`RestaurantError::InvalidDiscount`] if the discount is not in `[0, 1]`.
    /// - [`RestaurantError::CurrencyMismatch`] if the charges and delivery
    ///   fee are in different currencies.
    pub fn new(
        id: RestaurantId,
        name: impl Into<String>,
        restaurant_charges: Money<'a, Currency>,
        delivery_fee: Money<'a, Currency>,
        discount: Percentage,
    ) -> Result<Self, RestaurantError> {
        let fraction = discount * Decimal::ONE;

        if fraction < Decimal::ZERO || fraction > Decimal::ONE {
            return Err(RestaurantError::InvalidDiscount(fraction));
        }

        if restaurant_charges.currency() != delivery_fee.currency() {
            return Err(RestaurantError::CurrencyMismatch {
                charges: restaurant_charges.currency().iso_alpha_code,
                delivery_fee: delivery_fee.currency().iso_alpha_code,
            });
        }

        Ok(Self {
            id,
            name: name.into(),
            restaurant_charges,
            delivery_fee,
            discount,
        })
    }

    /// Discount fraction applied to the item total.
    pub fn discount(&self) -> Percentage {
        self.discount
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn valid_restaurant_constructs() -> TestResult {
        let restaurant = Restaurant::new(
            RestaurantId::new("lagos-kitchen"),
            "Lagos Kitchen",
            Money::from_minor(10_000, iso::NGN),
            Money::from_minor(50_000, iso::NGN),
            Percentage::from(0.1),
        )?;

        assert_eq!(restaurant.id.as_str(), "lagos-kitchen");
        assert_eq!(restaurant.discount() * Decimal::ONE, Decimal::new(1, 1));

        Ok(())
    }

    #[test]
    fn discount_above_one_is_rejected() {
        let result = Restaurant::new(
            RestaurantId::new("lagos-kitchen"),
            "Lagos Kitchen",
            Money::from_minor(10_000, iso::NGN),
            Money::from_minor(50_000, iso::NGN),
            Percentage::from(1.5),
        );

        assert!(
            matches!(result, Err(RestaurantError::InvalidDiscount(_))),
            "expected InvalidDiscount, got {result:?}"
        );
    }

    #[test]
    fn mixed_charge_currencies_are_rejected() {
        let result = Restaurant::new(
            RestaurantId::new("lagos-kitchen"),
            "Lagos Kitchen",
            Money::from_minor(10_000, iso::NGN),
            Money::from_minor(500, iso::USD),
            Percentage::from(0.0),
        );

        assert!(
            matches!(result, Err(RestaurantError::CurrencyMismatch { .. })),
            "expected CurrencyMismatch, got {result:?}"
        );
    }
}
