//! Utils

use std::path::PathBuf;

use clap::Parser;

/// Arguments for the checkout demo
#[derive(Debug, Parser)]
pub struct DemoCheckoutArgs {
    /// Path to the menu fixture file
    #[clap(short, long, default_value = "fixtures/menus/lagos_kitchen.yml")]
    pub menu: PathBuf,

    /// Maximum number of packs the session may hold
    #[clap(short, long)]
    pub pack_cap: Option<usize>,
}
