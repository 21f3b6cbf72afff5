//! Cart sessions: the aggregate root of one checkout flow.

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::{
    checkout::{self, CheckoutSummary},
    items::CartLine,
    pack::{LineChange, Pack, PackError},
    pricing,
    restaurant::{Restaurant, RestaurantId},
};

/// Default upper bound on packs per session. Beyond it, the oldest pack
/// is evicted first.
pub const DEFAULT_PACK_CAP: usize = 10;

/// Errors raised by cart session operations.
///
/// Everything here is local and recoverable: failures are surfaced to
/// the hosting UI as values, never as panics.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Items from another restaurant were offered to this session.
    /// The session is left unchanged.
    #[error("this cart is for restaurant {expected}, but the items belong to {found}")]
    RestaurantMismatch {
        /// Restaurant the session is bound to.
        expected: RestaurantId,

        /// Restaurant the rejected items belong to.
        found: RestaurantId,
    },

    /// Finalize was called with nothing in the cart.
    #[error("cart is empty; nothing to check out")]
    EmptyCart,

    /// No pack exists at the given index.
    #[error("no pack at index {0}")]
    PackNotFound(usize),

    /// A line-level failure, e.g. mutating a line that does not exist.
    #[error(transparent)]
    Pack(#[from] PackError),

    /// Pack labels must be non-empty.
    #[error("pack label must not be empty")]
    EmptyLabel,

    /// An item's currency differs from the session currency.
    #[error("item {item:?} is priced in {found}, but this cart uses {expected}")]
    CurrencyMismatch {
        /// Name of the offending item.
        item: String,

        /// Session currency code.
        expected: &'static str,

        /// The item's currency code.
        found: &'static str,
    },

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Outcome of [`CartSession::add_pack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddPackOutcome {
    /// A new pack was appended.
    Added,

    /// A structurally identical pack already exists; nothing changed.
    Duplicate,
}

/// The full in-progress order for one restaurant: an ordered sequence
/// of packs, all bound to the session restaurant fixed at construction.
///
/// A session lives for exactly one checkout flow. The `Finalized` and
/// `Abandoned` terminal states of the reference design are encoded by
/// move semantics: [`CartSession::finalize`] consumes the session, and
/// abandoning one is dropping it. No operation can be called on a
/// session that has reached either terminal state.
#[derive(Debug)]
pub struct CartSession<'a> {
    restaurant_id: RestaurantId,
    currency: &'static Currency,
    packs: Vec<Pack<'a>>,
    pack_cap: usize,

    /// Packs ever created, used for default labels. Kept monotone so
    /// labels stay stable when old packs are evicted.
    packs_created: usize,
}

impl<'a> CartSession<'a> {
    /// Create an empty session bound to the given restaurant and currency.
    pub fn new(restaurant_id: RestaurantId, currency: &'static Currency) -> Self {
        Self::with_pack_cap(restaurant_id, currency, DEFAULT_PACK_CAP)
    }

    /// Create an empty session with an explicit pack cap (minimum 1).
    pub fn with_pack_cap(
        restaurant_id: RestaurantId,
        currency: &'static Currency,
        pack_cap: usize,
    ) -> Self {
        Self {
            restaurant_id,
            currency,
            packs: Vec::new(),
            pack_cap: pack_cap.max(1),
            packs_created: 0,
        }
    }

    /// The restaurant this session is bound to.
    pub fn restaurant_id(&self) -> &RestaurantId {
        &self.restaurant_id
    }

    /// The session currency.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Packs in insertion order.
    pub fn packs(&self) -> &[Pack<'a>] {
        &self.packs
    }

    /// Look up a pack by index.
    pub fn pack(&self, index: usize) -> Option<&Pack<'a>> {
        self.packs.get(index)
    }

    /// Number of packs currently in the session.
    pub fn pack_count(&self) -> usize {
        self.packs.len()
    }

    /// Whether the session has nothing to check out: no packs, or only
    /// packs with no lines.
    pub fn is_empty(&self) -> bool {
        self.packs.iter().all(Pack::is_empty)
    }

    fn check_restaurant(&self, restaurant_id: &RestaurantId) -> Result<(), SessionError> {
        if restaurant_id == &self.restaurant_id {
            return Ok(());
        }

        Err(SessionError::RestaurantMismatch {
            expected: self.restaurant_id.clone(),
            found: restaurant_id.clone(),
        })
    }

    fn check_currency(&self, line: &CartLine<'a>) -> Result<(), SessionError> {
        let found = line.item().price.currency();

        if found == self.currency {
            return Ok(());
        }

        Err(SessionError::CurrencyMismatch {
            item: line.item().name.clone(),
            expected: self.currency.iso_alpha_code,
            found: found.iso_alpha_code,
        })
    }

    fn pack_mut(&mut self, index: usize) -> Result<&mut Pack<'a>, SessionError> {
        self.packs
            .get_mut(index)
            .ok_or(SessionError::PackNotFound(index))
    }

    fn push_pack(&mut self, pack: Pack<'a>) {
        self.packs.push(pack);

        while self.packs.len() > self.pack_cap {
            // FIFO eviction: the oldest pack goes first.
            self.packs.remove(0);
        }
    }

    /// Append a new pack built from the given lines, labelled
    /// `"Pack N"`. Lines sharing an item name are merged. If a
    /// structurally identical pack already exists, nothing changes and
    /// [`AddPackOutcome::Duplicate`] is returned.
    ///
    /// # Errors
    ///
    /// - [`SessionError::RestaurantMismatch`] if `restaurant_id` differs
    ///   from the session restaurant; the session is left unchanged.
    /// - [`SessionError::CurrencyMismatch`] if any line's price is not in
    ///   the session currency; the session is left unchanged.
    pub fn add_pack(
        &mut self,
        restaurant_id: &RestaurantId,
        lines: impl IntoIterator<Item = CartLine<'a>>,
    ) -> Result<AddPackOutcome, SessionError> {
        self.check_restaurant(restaurant_id)?;

        let lines: Vec<CartLine<'a>> = lines.into_iter().collect();

        for line in &lines {
            self.check_currency(line)?;
        }

        let pack = Pack::with_lines(format!("Pack {}", self.packs_created + 1), lines);

        if self.packs.iter().any(|existing| existing.same_contents(&pack)) {
            return Ok(AddPackOutcome::Duplicate);
        }

        self.packs_created += 1;
        self.push_pack(pack);

        Ok(AddPackOutcome::Added)
    }

    /// Append a deep copy of the pack at `index`, labelled
    /// `"{label} (Copy)"`. The original pack is not touched.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::PackNotFound`] for an invalid index.
    pub fn duplicate_pack(&mut self, index: usize) -> Result<(), SessionError> {
        let copy = self
            .packs
            .get(index)
            .ok_or(SessionError::PackNotFound(index))?
            .duplicate();

        self.push_pack(copy);

        Ok(())
    }

    /// Remove the pack at `index` along with its label.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::PackNotFound`] for an invalid index.
    pub fn delete_pack(&mut self, index: usize) -> Result<(), SessionError> {
        if index >= self.packs.len() {
            return Err(SessionError::PackNotFound(index));
        }

        self.packs.remove(index);

        Ok(())
    }

    /// Set the display label of the pack at `index`.
    ///
    /// # Errors
    ///
    /// - [`SessionError::PackNotFound`] for an invalid index.
    /// - [`SessionError::EmptyLabel`] for an empty label.
    pub fn rename_pack(
        &mut self,
        index: usize,
        label: impl Into<String>,
    ) -> Result<(), SessionError> {
        let label = label.into();

        if label.trim().is_empty() {
            return Err(SessionError::EmptyLabel);
        }

        self.pack_mut(index)?.set_label(label);

        Ok(())
    }

    /// Add one unit to the named line in the pack at `pack_index`.
    ///
    /// # Errors
    ///
    /// - [`SessionError::RestaurantMismatch`] if `restaurant_id` differs
    ///   from the session restaurant.
    /// - [`SessionError::PackNotFound`] for an invalid index.
    /// - [`PackError::LineNotFound`] if no line has that item name.
    pub fn increase_quantity(
        &mut self,
        pack_index: usize,
        restaurant_id: &RestaurantId,
        item_name: &str,
    ) -> Result<(), SessionError> {
        self.check_restaurant(restaurant_id)?;
        self.pack_mut(pack_index)?.increase(item_name)?;

        Ok(())
    }

    /// Remove one unit from the named line in the pack at `pack_index`,
    /// removing the line when its last unit goes.
    ///
    /// # Errors
    ///
    /// - [`SessionError::RestaurantMismatch`] if `restaurant_id` differs
    ///   from the session restaurant.
    /// - [`SessionError::PackNotFound`] for an invalid index.
    /// - [`PackError::LineNotFound`] if no line has that item name.
    pub fn decrease_quantity(
        &mut self,
        pack_index: usize,
        restaurant_id: &RestaurantId,
        item_name: &str,
    ) -> Result<LineChange, SessionError> {
        self.check_restaurant(restaurant_id)?;

        Ok(self.pack_mut(pack_index)?.decrease(item_name)?)
    }

    /// Remove the named line from the pack at `pack_index`, whatever its
    /// quantity.
    ///
    /// # Errors
    ///
    /// - [`SessionError::RestaurantMismatch`] if `restaurant_id` differs
    ///   from the session restaurant.
    /// - [`SessionError::PackNotFound`] for an invalid index.
    /// - [`PackError::LineNotFound`] if no line has that item name.
    pub fn remove_item(
        &mut self,
        pack_index: usize,
        restaurant_id: &RestaurantId,
        item_name: &str,
    ) -> Result<(), SessionError> {
        self.check_restaurant(restaurant_id)?;
        self.pack_mut(pack_index)?.remove_line(item_name)?;

        Ok(())
    }

    /// Session total: sum of `quantity x unit price` over all lines in
    /// all packs, recomputed from current state.
    ///
    /// # Errors
    ///
    /// Returns a wrapped [`MoneyError`] if money arithmetic fails.
    pub fn total(&self) -> Result<Money<'a, Currency>, SessionError> {
        Ok(pricing::packs_total(&self.packs, self.currency)?)
    }

    /// Total units across all packs and lines.
    pub fn total_units(&self) -> u64 {
        self.packs.iter().map(Pack::total_unit_count).sum()
    }

    /// Number of distinct lines in the pack at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::PackNotFound`] for an invalid index.
    pub fn distinct_line_count(&self, index: usize) -> Result<usize, SessionError> {
        self.pack(index)
            .map(Pack::distinct_line_count)
            .ok_or(SessionError::PackNotFound(index))
    }

    /// Sum of line quantities in the pack at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::PackNotFound`] for an invalid index.
    pub fn total_unit_count(&self, index: usize) -> Result<u64, SessionError> {
        self.pack(index)
            .map(Pack::total_unit_count)
            .ok_or(SessionError::PackNotFound(index))
    }

    /// Convert this session into the summary a payment screen consumes,
    /// consuming the session: `total_price = subtotal +
    /// restaurant_charges + delivery_fee - subtotal x discount`, rounded
    /// to 2 decimal places.
    ///
    /// # Errors
    ///
    /// - [`SessionError::EmptyCart`] if the session has nothing in it.
    /// - [`SessionError::RestaurantMismatch`] if `restaurant` is not the
    ///   session restaurant.
    /// - A wrapped [`MoneyError`] if money arithmetic fails.
    pub fn finalize(
        self,
        restaurant: &Restaurant<'a>,
    ) -> Result<CheckoutSummary<'a>, SessionError> {
        if self.is_empty() {
            return Err(SessionError::EmptyCart);
        }

        self.check_restaurant(&restaurant.id)?;

        let quote = checkout::quote(self.total()?, restaurant)?;

        Ok(CheckoutSummary::new(self.total_units(), quote.total))
    }
}
