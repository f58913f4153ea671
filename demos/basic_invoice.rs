use fakturka::{Invoice, InvoiceError, Product};
use rust_decimal_macros::dec;

fn main() -> Result<(), InvoiceError> {
    let mut invoice = Invoice::new();
    invoice.add_product_with_quantity(Product::dairy("Mleko", dec!(3.50))?, 2)?;
    invoice.add_product(Product::tax_free("Chleb", dec!(5.20))?);
    invoice.add_product_with_quantity(Product::standard("Chipsy", dec!(7.99))?, 3)?;
    invoice.add_product(Product::bottle_of_wine("Merlot", dec!(20.00), dec!(0.23))?);
    invoice.add_product(Product::fuel_canister("Diesel", dec!(100.00))?);

    println!("{invoice}");
    println!("---");
    println!("Net:   {}", invoice.net_price());
    println!("Tax:   {}", invoice.tax());
    println!("Gross: {}", invoice.gross_price());
    Ok(())
}
