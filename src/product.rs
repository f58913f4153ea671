use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::InvoiceError;

/// Excise duty added on top of VAT for wine, and instead of VAT for fuel.
pub const EXCISE_DUTY: Decimal = dec!(5.56);

/// Standard VAT rate used by [`Product::standard`].
pub const STANDARD_RATE: Decimal = dec!(0.23);

/// Reduced VAT rate applied to dairy products.
pub const DAIRY_RATE: Decimal = dec!(0.08);

/// Tax category of a product.
///
/// A closed set: each kind carries exactly the data its pricing rule needs,
/// and [`Product::price_with_tax`] dispatches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductKind {
    /// Taxed at a caller-supplied VAT rate.
    Other {
        /// VAT rate as a decimal fraction (0.23 = 23%).
        tax_percent: Decimal,
    },
    /// VAT-exempt.
    TaxFree,
    /// Dairy, taxed at the fixed reduced rate ([`DAIRY_RATE`]).
    Dairy,
    /// Wine: VAT at a caller-supplied rate plus excise duty.
    BottleOfWine {
        /// VAT rate as a decimal fraction.
        tax_percent: Decimal,
    },
    /// Fuel: excise duty only, no percentage tax.
    FuelCanister,
}

/// A priced product on an invoice.
///
/// Products are immutable values identified by name: equality and hashing
/// look at the name alone, price and category are ignored. [`Invoice`]
/// relies on this to merge repeated additions of the same product into one
/// line; the first product inserted under a name keeps its price.
///
/// [`Invoice`]: crate::Invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawProduct")]
pub struct Product {
    name: String,
    price: Decimal,
    kind: ProductKind,
}

// Unvalidated mirror of `Product`. Deserialization lands here first and is
// routed through the same checks as the constructors, so serialized data
// cannot mint a product the constructors would reject.
#[derive(Deserialize)]
struct RawProduct {
    name: String,
    price: Decimal,
    kind: ProductKind,
}

impl TryFrom<RawProduct> for Product {
    type Error = InvoiceError;

    fn try_from(raw: RawProduct) -> Result<Self, Self::Error> {
        Self::new(raw.name, raw.price, raw.kind)
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Product {
    fn new(
        name: impl Into<String>,
        price: Decimal,
        kind: ProductKind,
    ) -> Result<Self, InvoiceError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(InvoiceError::EmptyName);
        }
        if price < Decimal::ZERO {
            return Err(InvoiceError::NegativePrice(price));
        }
        Ok(Self { name, price, kind })
    }

    /// Product taxed at an arbitrary VAT rate, given as a decimal fraction
    /// (`dec!(0.23)` = 23%). The rate is accepted as given, including zero.
    pub fn other(
        name: impl Into<String>,
        price: Decimal,
        tax_percent: Decimal,
    ) -> Result<Self, InvoiceError> {
        Self::new(name, price, ProductKind::Other { tax_percent })
    }

    /// Product taxed at [`STANDARD_RATE`].
    pub fn standard(name: impl Into<String>, price: Decimal) -> Result<Self, InvoiceError> {
        Self::other(name, price, STANDARD_RATE)
    }

    /// VAT-exempt product.
    pub fn tax_free(name: impl Into<String>, price: Decimal) -> Result<Self, InvoiceError> {
        Self::new(name, price, ProductKind::TaxFree)
    }

    /// Dairy product, taxed at [`DAIRY_RATE`].
    pub fn dairy(name: impl Into<String>, price: Decimal) -> Result<Self, InvoiceError> {
        Self::new(name, price, ProductKind::Dairy)
    }

    /// Bottle of wine: VAT at the given rate plus [`EXCISE_DUTY`].
    pub fn bottle_of_wine(
        name: impl Into<String>,
        price: Decimal,
        tax_percent: Decimal,
    ) -> Result<Self, InvoiceError> {
        Self::new(name, price, ProductKind::BottleOfWine { tax_percent })
    }

    /// Fuel canister: [`EXCISE_DUTY`] only, no percentage tax.
    pub fn fuel_canister(name: impl Into<String>, price: Decimal) -> Result<Self, InvoiceError> {
        Self::new(name, price, ProductKind::FuelCanister)
    }

    /// Product name — the identity key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price before tax.
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Tax category.
    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    /// VAT rate as a decimal fraction. Fixed per category except for
    /// [`ProductKind::Other`] and [`ProductKind::BottleOfWine`].
    pub fn tax_percent(&self) -> Decimal {
        match self.kind {
            ProductKind::Other { tax_percent } | ProductKind::BottleOfWine { tax_percent } => {
                tax_percent
            }
            ProductKind::TaxFree | ProductKind::FuelCanister => Decimal::ZERO,
            ProductKind::Dairy => DAIRY_RATE,
        }
    }

    /// Unit price including VAT and, where applicable, excise duty.
    pub fn price_with_tax(&self) -> Decimal {
        match self.kind {
            ProductKind::Other { tax_percent } => self.price + self.price * tax_percent,
            ProductKind::TaxFree => self.price,
            ProductKind::Dairy => self.price + self.price * DAIRY_RATE,
            ProductKind::BottleOfWine { tax_percent } => {
                self.price + self.price * tax_percent + EXCISE_DUTY
            }
            ProductKind::FuelCanister => self.price + EXCISE_DUTY,
        }
    }
}
