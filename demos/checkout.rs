//! Checkout demo: build a multi-pack cart from a menu fixture, print
//! the receipt, then finalize it into the payment summary.
//!
//! ```sh
//! cargo run --example checkout -- --menu fixtures/menus/lagos_kitchen.yml
//! ```

use std::{io, num::NonZeroU32};

use anyhow::Context;
use clap::Parser;

use tiffin::{
    prelude::{CartSession, Menu, Receipt},
    session::DEFAULT_PACK_CAP,
    utils::DemoCheckoutArgs,
};

fn main() -> anyhow::Result<()> {
    let args = DemoCheckoutArgs::parse();

    let menu = Menu::from_path(&args.menu)
        .with_context(|| format!("loading menu fixture {}", args.menu.display()))?;

    let restaurant = menu.restaurant();
    let one = NonZeroU32::MIN;
    let two = NonZeroU32::new(2).context("non-zero quantity")?;

    let mut session = CartSession::with_pack_cap(
        restaurant.id.clone(),
        menu.currency(),
        args.pack_cap.unwrap_or(DEFAULT_PACK_CAP),
    );

    session.add_pack(
        &restaurant.id,
        [menu.line("jollof-rice", two)?, menu.line("suya", one)?],
    )?;

    session.add_pack(
        &restaurant.id,
        [menu.line("moin-moin", one)?, menu.line("dodo", one)?],
    )?;

    session.duplicate_pack(0)?;
    session.rename_pack(2, "For the office")?;
    session.increase_quantity(2, &restaurant.id, "Suya")?;

    let receipt = Receipt::for_session(&session, restaurant)?;
    receipt.write_to(io::stdout().lock(), &session)?;

    let summary = session.finalize(restaurant)?;

    println!(
        "Checkout: {} items, {} payable",
        summary.total_items(),
        summary.total_price_display()
    );

    Ok(())
}
