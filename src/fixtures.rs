//! Fixtures
//!
//! YAML-backed menu and restaurant fixtures for demos and integration
//! tests. In the application this data arrives from the remote document
//! store; fixtures stand in for it here.

use std::{fs, num::NonZeroU32, path::Path, str::FromStr};

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    items::{CartLine, MenuItem},
    restaurant::{Restaurant, RestaurantError, RestaurantId},
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Item not found
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Invalid restaurant data
    #[error(transparent)]
    Restaurant(#[from] RestaurantError),
}

/// Restaurant section of a menu fixture
#[derive(Debug, Deserialize)]
struct RestaurantFixture {
    id: String,
    name: String,
    restaurant_charges: String,
    delivery_fee: String,
    discount: f64,
}

/// One menu item in a fixture
#[derive(Debug, Deserialize)]
struct MenuItemFixture {
    name: String,
    price: String,

    #[serde(default)]
    description: Option<String>,

    #[serde(default)]
    image: Option<String>,
}

/// Wrapper for a menu in YAML
#[derive(Debug, Deserialize)]
struct MenuFixture {
    currency: String,
    restaurant: RestaurantFixture,

    /// Map of item key -> item fixture
    items: FxHashMap<String, MenuItemFixture>,
}

/// A restaurant and its menu, loaded from a YAML fixture.
#[derive(Debug)]
pub struct Menu {
    restaurant: Restaurant<'static>,
    items: FxHashMap<String, MenuItem<'static>>,
    currency: &'static Currency,
}

impl Menu {
    /// Parse a menu from YAML text.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the YAML is malformed, a price or
    /// currency cannot be parsed, or the restaurant data is invalid.
    pub fn from_yaml(contents: &str) -> Result<Self, FixtureError> {
        let fixture: MenuFixture = serde_norway::from_str(contents)?;

        let currency = iso::find(&fixture.currency)
            .ok_or_else(|| FixtureError::UnknownCurrency(fixture.currency.clone()))?;

        let restaurant = Restaurant::new(
            RestaurantId::new(fixture.restaurant.id),
            fixture.restaurant.name,
            parse_price(&fixture.restaurant.restaurant_charges, currency)?,
            parse_price(&fixture.restaurant.delivery_fee, currency)?,
            Percentage::from(fixture.restaurant.discount),
        )?;

        let mut items = FxHashMap::default();

        for (key, item_fixture) in fixture.items {
            let price = parse_price(&item_fixture.price, currency)?;

            let mut item = MenuItem::new(key.clone(), item_fixture.name, price);

            if let Some(description) = item_fixture.description {
                item = item.with_description(description);
            }

            if let Some(image) = item_fixture.image {
                item = item.with_image(image);
            }

            items.insert(key, item);
        }

        Ok(Self {
            restaurant,
            items,
            currency,
        })
    }

    /// Load a menu from a YAML fixture file.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// The restaurant this menu belongs to.
    pub fn restaurant(&self) -> &Restaurant<'static> {
        &self.restaurant
    }

    /// Currency for every price on this menu.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Look up a menu item by its fixture key.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::ItemNotFound`] for an unknown key.
    pub fn item(&self, key: &str) -> Result<&MenuItem<'static>, FixtureError> {
        self.items
            .get(key)
            .ok_or_else(|| FixtureError::ItemNotFound(key.to_string()))
    }

    /// Build a cart line for the item at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::ItemNotFound`] for an unknown key.
    pub fn line(&self, key: &str, quantity: NonZeroU32) -> Result<CartLine<'static>, FixtureError> {
        Ok(CartLine::with_quantity(self.item(key)?.clone(), quantity))
    }
}

/// Parse a decimal price string like `"1500.00"` into money in the
/// fixture currency.
fn parse_price(
    raw: &str,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, FixtureError> {
    let amount =
        Decimal::from_str(raw.trim()).map_err(|_err| FixtureError::InvalidPrice(raw.to_string()))?;

    if amount < Decimal::ZERO {
        return Err(FixtureError::InvalidPrice(raw.to_string()));
    }

    Ok(Money::from_decimal(amount, currency))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const MENU_YAML: &str = r#"
currency: NGN
restaurant:
  id: lagos-kitchen
  name: Lagos Kitchen
  restaurant_charges: "100.00"
  delivery_fee: "500.00"
  discount: 0.10
items:
  jollof-rice:
    name: Jollof Rice
    price: "1500.00"
    description: Smoky party-style jollof
  suya:
    name: Suya
    price: "1200.00"
"#;

    #[test]
    fn parses_restaurant_and_items() -> TestResult {
        let menu = Menu::from_yaml(MENU_YAML)?;

        assert_eq!(menu.restaurant().id.as_str(), "lagos-kitchen");
        assert_eq!(menu.currency(), iso::NGN);

        let jollof = menu.item("jollof-rice")?;
        assert_eq!(jollof.name, "Jollof Rice");
        assert_eq!(jollof.price, Money::from_minor(150_000, iso::NGN));
        assert_eq!(jollof.description, "Smoky party-style jollof");

        Ok(())
    }

    #[test]
    fn unknown_currency_is_rejected() {
        let yaml = MENU_YAML.replace("NGN", "XQQ");

        let result = Menu::from_yaml(&yaml);

        assert!(
            matches!(result, Err(FixtureError::UnknownCurrency(_))),
            "expected UnknownCurrency, got {result:?}"
        );
    }

    #[test]
    fn malformed_price_is_rejected() {
        let yaml = MENU_YAML.replace("\"1500.00\"", "\"fifteen hundred\"");

        let result = Menu::from_yaml(&yaml);

        assert!(
            matches!(result, Err(FixtureError::InvalidPrice(_))),
            "expected InvalidPrice, got {result:?}"
        );
    }

    #[test]
    fn out_of_range_discount_is_rejected() {
        let yaml = MENU_YAML.replace("discount: 0.10", "discount: 1.25");

        let result = Menu::from_yaml(&yaml);

        assert!(
            matches!(
                result,
                Err(FixtureError::Restaurant(RestaurantError::InvalidDiscount(_)))
            ),
            "expected InvalidDiscount, got {result:?}"
        );
    }

    #[test]
    fn unknown_item_key_reports_not_found() -> TestResult {
        let menu = Menu::from_yaml(MENU_YAML)?;

        let result = menu.item("shawarma");

        assert!(
            matches!(result, Err(FixtureError::ItemNotFound(_))),
            "expected ItemNotFound, got {result:?}"
        );

        Ok(())
    }
}
