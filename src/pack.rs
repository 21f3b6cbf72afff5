//! Packs: labelled sub-orders within a cart session.

use std::num::NonZeroU32;

use thiserror::Error;

use crate::items::{CartLine, MenuItem};

/// Errors raised by pack line mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PackError {
    /// The named line does not exist in this pack.
    ///
    /// The reference behaviour for this case was a silent no-op; it is
    /// reported here so callers can decide whether to ignore it.
    #[error("no line named {0:?} in this pack")]
    LineNotFound(String),
}

/// Outcome of removing one unit from a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineChange {
    /// The line remains with the given quantity.
    Decremented(NonZeroU32),

    /// The line held its last unit and was removed.
    Removed,
}

/// A labelled sub-order: an ordered collection of cart lines, unique by
/// item name. Adding an item that is already present increments the
/// existing line instead of creating a duplicate.
#[derive(Debug, Clone)]
pub struct Pack<'a> {
    label: String,
    lines: Vec<CartLine<'a>>,
}

impl<'a> Pack<'a> {
    /// Create an empty pack with the given display label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            lines: Vec::new(),
        }
    }

    /// Create a pack from the given lines, merging lines that share an
    /// item name.
    pub fn with_lines(
        label: impl Into<String>,
        lines: impl IntoIterator<Item = CartLine<'a>>,
    ) -> Self {
        let mut pack = Self::new(label);

        for line in lines {
            match pack
                .lines
                .iter_mut()
                .find(|existing| existing.item().name == line.item().name)
            {
                Some(existing) => existing.add_units(line.quantity().get()),
                None => pack.lines.push(line),
            }
        }

        pack
    }

    /// The user-editable display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn set_label(&mut self, label: String) {
        self.label = label;
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine<'a>] {
        &self.lines
    }

    /// Look up a line by item name.
    pub fn line(&self, item_name: &str) -> Option<&CartLine<'a>> {
        self.lines.iter().find(|line| line.item().name == item_name)
    }

    fn line_mut(&mut self, item_name: &str) -> Result<&mut CartLine<'a>, PackError> {
        self.lines
            .iter_mut()
            .find(|line| line.item().name == item_name)
            .ok_or_else(|| PackError::LineNotFound(item_name.to_string()))
    }

    /// Add the given quantity of an item. If a line for the item name
    /// already exists its quantity is incremented; otherwise a new line
    /// is appended.
    pub fn add_item(&mut self, item: MenuItem<'a>, quantity: NonZeroU32) {
        match self
            .lines
            .iter_mut()
            .find(|line| line.item().name == item.name)
        {
            Some(line) => line.add_units(quantity.get()),
            None => self.lines.push(CartLine::with_quantity(item, quantity)),
        }
    }

    /// Add one unit to the named line.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::LineNotFound`] if no line has that item name.
    pub fn increase(&mut self, item_name: &str) -> Result<NonZeroU32, PackError> {
        let line = self.line_mut(item_name)?;
        line.add_units(1);

        Ok(line.quantity())
    }

    /// Remove one unit from the named line, removing the line entirely
    /// when its last unit goes.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::LineNotFound`] if no line has that item name.
    pub fn decrease(&mut self, item_name: &str) -> Result<LineChange, PackError> {
        let line = self.line_mut(item_name)?;

        if line.remove_unit() {
            return Ok(LineChange::Decremented(line.quantity()));
        }

        self.lines.retain(|line| line.item().name != item_name);

        Ok(LineChange::Removed)
    }

    /// Remove the named line unconditionally, whatever its quantity.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::LineNotFound`] if no line has that item name.
    pub fn remove_line(&mut self, item_name: &str) -> Result<(), PackError> {
        let before = self.lines.len();
        self.lines.retain(|line| line.item().name != item_name);

        if self.lines.len() == before {
            return Err(PackError::LineNotFound(item_name.to_string()));
        }

        Ok(())
    }

    /// Number of distinct lines in this pack (not summed quantity; see
    /// [`Pack::total_unit_count`] for that).
    pub fn distinct_line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of line quantities across this pack.
    pub fn total_unit_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity().get()))
            .sum()
    }

    /// Whether this pack has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Structural equality: same lines (name, quantity, unit price),
    /// regardless of line order or label.
    pub fn same_contents(&self, other: &Pack<'a>) -> bool {
        self.lines.len() == other.lines.len()
            && self.lines.iter().all(|line| {
                other.line(&line.item().name).is_some_and(|theirs| {
                    theirs.quantity() == line.quantity()
                        && theirs.item().price == line.item().price
                })
            })
    }

    /// A deep copy of this pack labelled `"{label} (Copy)"`. Mutating
    /// the copy never affects the original.
    pub fn duplicate(&self) -> Pack<'a> {
        Pack {
            label: format!("{} (Copy)", self.label),
            lines: self.lines.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso};

    use super::*;

    fn item<'a>(name: &str, minor: i64) -> MenuItem<'a> {
        MenuItem::new(
            name.to_lowercase().replace(' ', "-"),
            name,
            Money::from_minor(minor, iso::NGN),
        )
    }

    fn qty(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).expect("non-zero quantity")
    }

    #[test]
    fn adding_existing_name_merges_quantities() {
        let mut pack = Pack::new("Pack 1");

        pack.add_item(item("Jollof Rice", 150_000), qty(1));
        pack.add_item(item("Jollof Rice", 150_000), qty(2));

        assert_eq!(pack.distinct_line_count(), 1);
        assert_eq!(pack.total_unit_count(), 3);
    }

    #[test]
    fn decrease_at_quantity_one_removes_line() {
        let mut pack = Pack::new("Pack 1");
        pack.add_item(item("Moin Moin", 50_000), qty(1));

        let change = pack.decrease("Moin Moin").expect("line exists");

        assert_eq!(change, LineChange::Removed);
        assert!(pack.is_empty());
    }

    #[test]
    fn decrease_on_missing_line_reports_not_found() {
        let mut pack = Pack::new("Pack 1");

        let result = pack.decrease("Suya");

        assert_eq!(result, Err(PackError::LineNotFound("Suya".to_string())));
    }

    #[test]
    fn remove_line_ignores_quantity() {
        let mut pack = Pack::new("Pack 1");
        pack.add_item(item("Suya", 120_000), qty(4));

        pack.remove_line("Suya").expect("line exists");

        assert!(pack.is_empty());
    }

    #[test]
    fn line_counts_distinguish_lines_from_units() {
        let mut pack = Pack::new("Pack 1");
        pack.add_item(item("Jollof Rice", 150_000), qty(2));
        pack.add_item(item("Suya", 120_000), qty(3));

        assert_eq!(pack.distinct_line_count(), 2);
        assert_eq!(pack.total_unit_count(), 5);
    }

    #[test]
    fn same_contents_ignores_label_and_order() {
        let mut first = Pack::new("Pack 1");
        first.add_item(item("Jollof Rice", 150_000), qty(2));
        first.add_item(item("Suya", 120_000), qty(1));

        let mut second = Pack::new("Lunch");
        second.add_item(item("Suya", 120_000), qty(1));
        second.add_item(item("Jollof Rice", 150_000), qty(2));

        assert!(first.same_contents(&second));

        second.add_item(item("Suya", 120_000), qty(1));

        assert!(!first.same_contents(&second));
    }

    #[test]
    fn duplicate_is_independent_of_original() {
        let mut original = Pack::new("Pack 1");
        original.add_item(item("Jollof Rice", 150_000), qty(2));

        let mut copy = original.duplicate();

        assert_eq!(copy.label(), "Pack 1 (Copy)");
        assert!(copy.same_contents(&original));

        copy.increase("Jollof Rice").expect("line exists");

        let original_line = original.line("Jollof Rice").expect("line exists");
        assert_eq!(original_line.quantity().get(), 2);
    }
}
