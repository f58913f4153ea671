use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use fakturka::{InvoiceError, Product, ProductKind, STANDARD_RATE};
use rust_decimal_macros::dec;

fn hash_of(product: &Product) -> u64 {
    let mut hasher = DefaultHasher::new();
    product.hash(&mut hasher);
    hasher.finish()
}

// --- Validation ---

#[test]
fn empty_name_is_rejected() {
    assert_eq!(
        Product::tax_free("", dec!(1)).unwrap_err(),
        InvoiceError::EmptyName
    );
    assert_eq!(
        Product::dairy("   ", dec!(1)).unwrap_err(),
        InvoiceError::EmptyName
    );
}

#[test]
fn negative_price_is_rejected_for_every_category() {
    let results = [
        Product::other("Chipsy", dec!(-1), dec!(0.23)),
        Product::standard("Chipsy", dec!(-1)),
        Product::tax_free("Chipsy", dec!(-1)),
        Product::dairy("Chipsy", dec!(-1)),
        Product::bottle_of_wine("Wino", dec!(-1), dec!(0.23)),
        Product::fuel_canister("Diesel", dec!(-1)),
    ];
    for result in results {
        assert_eq!(result.unwrap_err(), InvoiceError::NegativePrice(dec!(-1)));
    }
}

#[test]
fn zero_price_is_allowed() {
    let gratis = Product::tax_free("Gratis", dec!(0)).unwrap();
    assert_eq!(gratis.price_with_tax(), dec!(0));
}

// --- Pricing rules ---

#[test]
fn price_with_tax_per_category() {
    assert_eq!(
        Product::standard("Chipsy", dec!(10)).unwrap().price_with_tax(),
        dec!(12.30)
    );
    assert_eq!(
        Product::other("Ksiazka", dec!(50), dec!(0.05))
            .unwrap()
            .price_with_tax(),
        dec!(52.50)
    );
    assert_eq!(
        Product::tax_free("Warzywa", dec!(10)).unwrap().price_with_tax(),
        dec!(10)
    );
    assert_eq!(
        Product::dairy("Kefir", dec!(100)).unwrap().price_with_tax(),
        dec!(108)
    );
}

#[test]
fn wine_adds_vat_and_excise_duty() {
    let wine = Product::bottle_of_wine("Merlot", dec!(20.00), dec!(0.23)).unwrap();
    // 20 + 4.60 + 5.56
    assert_eq!(wine.price_with_tax(), dec!(30.16));
}

#[test]
fn fuel_adds_excise_duty_without_vat() {
    let fuel = Product::fuel_canister("Diesel", dec!(100.00)).unwrap();
    assert_eq!(fuel.price_with_tax(), dec!(105.56));
    assert_eq!(fuel.tax_percent(), dec!(0));
}

#[test]
fn tax_percent_per_category() {
    assert_eq!(
        Product::standard("Chipsy", dec!(1)).unwrap().tax_percent(),
        STANDARD_RATE
    );
    assert_eq!(Product::tax_free("Warzywa", dec!(1)).unwrap().tax_percent(), dec!(0));
    assert_eq!(Product::dairy("Kefir", dec!(1)).unwrap().tax_percent(), dec!(0.08));
    assert_eq!(
        Product::bottle_of_wine("Wino", dec!(1), dec!(0.23))
            .unwrap()
            .tax_percent(),
        dec!(0.23)
    );
}

// --- Identity ---

#[test]
fn equality_and_hash_use_name_only() {
    let dairy = Product::dairy("Mleko", dec!(3)).unwrap();
    let pricey = Product::standard("Mleko", dec!(100)).unwrap();
    let other = Product::dairy("Kefir", dec!(3)).unwrap();

    assert_eq!(dairy, pricey);
    assert_eq!(hash_of(&dairy), hash_of(&pricey));
    assert_ne!(dairy, other);
}

// --- Serialization ---

#[test]
fn deserialization_applies_constructor_validation() {
    let blank_name =
        serde_json::from_str::<Product>(r#"{"name":"","price":"-5.00","kind":"TaxFree"}"#);
    assert!(blank_name.is_err());

    let negative_price =
        serde_json::from_str::<Product>(r#"{"name":"Chipsy","price":"-5.00","kind":"TaxFree"}"#);
    assert!(negative_price.is_err());

    let valid =
        serde_json::from_str::<Product>(r#"{"name":"Chipsy","price":"5.00","kind":"TaxFree"}"#)
            .unwrap();
    assert_eq!(valid.name(), "Chipsy");
}

#[test]
fn product_survives_a_json_round_trip() {
    let wine = Product::bottle_of_wine("Merlot", dec!(20.00), dec!(0.23)).unwrap();
    let json = serde_json::to_string(&wine).unwrap();
    let back: Product = serde_json::from_str(&json).unwrap();

    assert_eq!(back.name(), "Merlot");
    assert_eq!(back.price(), dec!(20.00));
    assert_eq!(back.kind(), ProductKind::BottleOfWine { tax_percent: dec!(0.23) });
    assert_eq!(back.price_with_tax(), dec!(30.16));
}
