//! Tiffin
//!
//! Tiffin is a headless cart and checkout aggregation engine for
//! single-restaurant, multi-pack food-delivery orders: packs of cart
//! lines, derived totals, composition invariants, and the finalize step
//! that produces the figures a payment screen consumes.

pub mod checkout;
pub mod fixtures;
pub mod items;
pub mod pack;
pub mod prelude;
pub mod pricing;
pub mod receipt;
pub mod restaurant;
pub mod session;
pub mod utils;
