//! # fakturka
//!
//! Invoice and product pricing with per-category tax rules: standard-rate,
//! tax-free, dairy at a reduced rate, and wine/fuel carrying excise duty.
//! An [`Invoice`] aggregates products by name, computes net, tax, and gross
//! totals on demand, and renders a plain-text summary.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//!
//! ## Quick start
//!
//! ```rust
//! use fakturka::{Invoice, Product};
//! use rust_decimal_macros::dec;
//!
//! # fn main() -> Result<(), fakturka::InvoiceError> {
//! let mut invoice = Invoice::new();
//! invoice.add_product(Product::tax_free("Warzywa", dec!(10))?);
//! invoice.add_product_with_quantity(Product::dairy("Mleko", dec!(3.50))?, 2)?;
//!
//! assert_eq!(invoice.net_price(), dec!(17.00));
//! assert_eq!(invoice.tax(), dec!(0.56));
//! assert_eq!(invoice.gross_price(), dec!(17.56));
//! # Ok(())
//! # }
//! ```

mod error;
mod invoice;
mod numbering;
mod product;

pub use error::InvoiceError;
pub use invoice::Invoice;
pub use product::{DAIRY_RATE, EXCISE_DUTY, Product, ProductKind, STANDARD_RATE};
