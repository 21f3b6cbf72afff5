//! Tiffin prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    checkout::{CheckoutSummary, Quote, quote},
    fixtures::{FixtureError, Menu},
    items::{CartLine, MenuItem},
    pack::{LineChange, Pack, PackError},
    pricing::{line_total, pack_total, packs_total},
    receipt::{Receipt, ReceiptError},
    restaurant::{Restaurant, RestaurantError, RestaurantId},
    session::{AddPackOutcome, CartSession, DEFAULT_PACK_CAP, SessionError},
};
