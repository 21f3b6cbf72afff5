//! Receipt

use std::io;

use rusty_money::MoneyError;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    checkout::{self, Quote},
    pricing,
    restaurant::Restaurant,
    session::{CartSession, SessionError},
};

/// Errors that can occur when building or printing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Error deriving totals from the session.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Wrapper for money errors.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// An itemised receipt for a session against its restaurant.
///
/// Purely presentational: every figure is derived on construction from
/// the session's current lines and the restaurant's charges.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    quote: Quote<'a>,
}

impl<'a> Receipt<'a> {
    /// Build a receipt for the given session and restaurant.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if the restaurant is not the one the
    /// session is bound to, or if totals cannot be derived.
    pub fn for_session(
        session: &CartSession<'a>,
        restaurant: &Restaurant<'a>,
    ) -> Result<Self, ReceiptError> {
        if restaurant.id != *session.restaurant_id() {
            return Err(ReceiptError::Session(SessionError::RestaurantMismatch {
                expected: session.restaurant_id().clone(),
                found: restaurant.id.clone(),
            }));
        }

        let quote = checkout::quote(session.total()?, restaurant)?;

        Ok(Self { quote })
    }

    /// The derived checkout figures.
    pub fn quote(&self) -> &Quote<'a> {
        &self.quote
    }

    /// Print the receipt as a table followed by summary lines.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if the receipt cannot be printed.
    pub fn write_to(
        &self,
        mut out: impl io::Write,
        session: &CartSession<'a>,
    ) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["Pack", "Item", "Qty", "Unit Price", "Line Total"]);

        for pack in session.packs() {
            for (line_idx, line) in pack.lines().iter().enumerate() {
                let pack_cell = if line_idx == 0 { pack.label() } else { "" };

                builder.push_record([
                    pack_cell.to_string(),
                    line.item().name.clone(),
                    line.quantity().to_string(),
                    format!("{}", line.item().price),
                    format!("{}", pricing::line_total(line)),
                ]);
            }
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(2..5), Alignment::right());

        writeln!(out, "\n{table}").map_err(|_err| ReceiptError::IO)?;

        self.write_summary(&mut out)
    }

    fn write_summary(&self, out: &mut impl io::Write) -> Result<(), ReceiptError> {
        let lines = [
            ("Subtotal:", format!("{}", self.quote.subtotal)),
            ("Charges:", format!("{}", self.quote.restaurant_charges)),
            ("Delivery:", format!("{}", self.quote.delivery_fee)),
            ("Discount:", format!("-{}", self.quote.discount)),
            ("Total:", format!("{}", self.quote.total)),
        ];

        let value_width = lines
            .iter()
            .map(|(_, value)| value.len())
            .max()
            .unwrap_or(0);

        for (label, value) in &lines {
            writeln!(out, " {label:>9} {value:>value_width$}").map_err(|_err| ReceiptError::IO)?;
        }

        writeln!(out).map_err(|_err| ReceiptError::IO)
    }
}
