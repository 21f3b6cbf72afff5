//! Menu items and cart lines.

use std::num::NonZeroU32;

use rusty_money::{Money, iso::Currency};

/// A single entry on a restaurant's menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem<'a> {
    /// Stable identifier of the item within its menu.
    pub id: String,

    /// Display name. Unique within a pack: two lines in the same pack
    /// never reference the same item name.
    pub name: String,

    /// Unit price.
    pub price: Money<'a, Currency>,

    /// Short description shown alongside the item.
    pub description: String,

    /// Optional image reference (URL or asset key).
    pub image: Option<String>,
}

impl<'a> MenuItem<'a> {
    /// Create a new menu item with an empty description and no image.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money<'a, Currency>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            description: String::new(),
            image: None,
        }
    }

    /// Set the item description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the item image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// One menu item and its requested quantity within a pack.
///
/// The quantity is a [`NonZeroU32`]: a line at quantity zero does not
/// exist, it is removed from its pack instead.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'a> {
    item: MenuItem<'a>,
    quantity: NonZeroU32,
}

impl<'a> CartLine<'a> {
    /// Create a line for a single unit of the given item.
    pub fn new(item: MenuItem<'a>) -> Self {
        Self {
            item,
            quantity: NonZeroU32::MIN,
        }
    }

    /// Create a line with an explicit quantity.
    pub fn with_quantity(item: MenuItem<'a>, quantity: NonZeroU32) -> Self {
        Self { item, quantity }
    }

    /// The menu item this line refers to.
    pub fn item(&self) -> &MenuItem<'a> {
        &self.item
    }

    /// Requested quantity.
    pub fn quantity(&self) -> NonZeroU32 {
        self.quantity
    }

    /// Add units to this line, saturating at `u32::MAX`.
    pub(crate) fn add_units(&mut self, units: u32) {
        self.quantity = self.quantity.saturating_add(units);
    }

    /// Remove one unit. Returns `false` when the line held its last
    /// unit and should be removed from its pack.
    pub(crate) fn remove_unit(&mut self) -> bool {
        match NonZeroU32::new(self.quantity.get() - 1) {
            Some(remaining) => {
                self.quantity = remaining;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso};

    use super::*;

    fn jollof<'a>() -> MenuItem<'a> {
        MenuItem::new(
            "jollof-rice",
            "Jollof Rice",
            Money::from_minor(150_000, iso::NGN),
        )
    }

    #[test]
    fn new_line_has_quantity_one() {
        let line = CartLine::new(jollof());

        assert_eq!(line.quantity().get(), 1);
    }

    #[test]
    fn add_units_increments_quantity() {
        let mut line = CartLine::new(jollof());

        line.add_units(2);

        assert_eq!(line.quantity().get(), 3);
    }

    #[test]
    fn remove_unit_at_one_signals_removal() {
        let mut line = CartLine::new(jollof());

        assert!(!line.remove_unit());
    }

    #[test]
    fn remove_unit_above_one_decrements() {
        let mut line = CartLine::with_quantity(jollof(), NonZeroU32::new(2).expect("non-zero"));

        assert!(line.remove_unit());
        assert_eq!(line.quantity().get(), 1);
    }

    #[test]
    fn builder_sets_description_and_image() {
        let item = jollof()
            .with_description("Smoky party-style jollof")
            .with_image("items/jollof.png");

        assert_eq!(item.description, "Smoky party-style jollof");
        assert_eq!(item.image.as_deref(), Some("items/jollof.png"));
    }
}
