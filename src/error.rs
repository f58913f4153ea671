use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during product construction or invoice mutation.
///
/// Every variant is an invalid-argument failure raised before any state
/// changes: a failed call leaves the product or invoice untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum InvoiceError {
    /// Product name was empty or all whitespace.
    #[error("product name must not be empty")]
    EmptyName,

    /// Product price was negative.
    #[error("product price must not be negative (got {0})")]
    NegativePrice(Decimal),

    /// Quantity of zero passed to [`Invoice::add_product_with_quantity`].
    ///
    /// [`Invoice::add_product_with_quantity`]: crate::Invoice::add_product_with_quantity
    #[error("quantity must be at least 1")]
    ZeroQuantity,
}
