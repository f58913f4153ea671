use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::InvoiceError;
use crate::numbering;
use crate::product::Product;

/// One line on an invoice: a product and how many units of it.
///
/// Quantities accumulate in a `u64` and saturate at its maximum, so merging
/// lines never wraps or panics.
#[derive(Debug, Serialize)]
struct Line {
    product: Product,
    quantity: u64,
}

/// An invoice: an ordered list of product lines with on-demand totals.
///
/// Each invoice receives a unique, monotonically increasing number from a
/// process-wide sequence at construction. Lines keep insertion order; adding
/// a product whose name already appears merges quantities into the existing
/// line instead of creating a new one. Totals are recomputed from the lines
/// on every query, never cached.
#[derive(Debug, Serialize)]
pub struct Invoice {
    number: u64,
    lines: Vec<Line>,
}

impl Invoice {
    /// Create an empty invoice with the next number from the process-wide
    /// sequence.
    pub fn new() -> Self {
        Self {
            number: numbering::next_invoice_number(),
            lines: Vec::new(),
        }
    }

    /// The invoice number assigned at construction.
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Add one unit of `product`, merging with an existing line of the
    /// same name.
    pub fn add_product(&mut self, product: Product) {
        self.push_line(product, 1);
    }

    /// Add `quantity` units of `product`, merging with an existing line of
    /// the same name. Fails on a quantity of zero, leaving the invoice
    /// unchanged. A line's quantity accumulates in a `u64` and saturates at
    /// its maximum.
    pub fn add_product_with_quantity(
        &mut self,
        product: Product,
        quantity: u32,
    ) -> Result<(), InvoiceError> {
        if quantity == 0 {
            return Err(InvoiceError::ZeroQuantity);
        }
        self.push_line(product, quantity);
        Ok(())
    }

    // Lines are keyed by product name. The first product inserted under a
    // name keeps its price and category; later additions only raise the
    // quantity.
    fn push_line(&mut self, product: Product, quantity: u32) {
        let quantity = u64::from(quantity);
        match self.lines.iter_mut().find(|line| line.product == product) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(Line { product, quantity }),
        }
    }

    /// Sum of `price * quantity` over all lines.
    pub fn net_price(&self) -> Decimal {
        self.lines
            .iter()
            .map(|line| line.product.price() * Decimal::from(line.quantity))
            .sum()
    }

    /// Sum of `price_with_tax * quantity` over all lines.
    pub fn gross_price(&self) -> Decimal {
        self.lines
            .iter()
            .map(|line| line.product.price_with_tax() * Decimal::from(line.quantity))
            .sum()
    }

    /// Total tax, derived as gross minus net.
    pub fn tax(&self) -> Decimal {
        self.gross_price() - self.net_price()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = (&Product, u64)> {
        self.lines.iter().map(|line| (&line.product, line.quantity))
    }

    /// True if no product has been added yet.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render the invoice as text: a header with the invoice number, one
    /// line per distinct product in insertion order as
    /// `<name>, <quantity>, <unit net price>`, and a trailing count of
    /// distinct lines.
    pub fn print_invoice(&self) -> String {
        self.to_string()
    }
}

impl Default for Invoice {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Invoice number: {}", self.number)?;
        for line in &self.lines {
            writeln!(
                f,
                "{}, {}, {}",
                line.product.name(),
                line.quantity,
                line.product.price()
            )?;
        }
        write!(f, "Number of items: {}", self.lines.len())
    }
}
