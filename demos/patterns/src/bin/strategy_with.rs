//! Strategy pattern: providers plug into the checkout as values.

use anyhow::Result;
use motif_catalogue::strategy::{Checkout, CreditCard, PayPal};

fn main() -> Result<()> {
    let mut checkout = Checkout::new();

    checkout.set_strategy(Box::new(CreditCard));
    println!("{}", checkout.process_payment(100)?);

    checkout.set_strategy(Box::new(PayPal));
    println!("{}", checkout.process_payment(250)?);

    let unconfigured = Checkout::new();
    if let Err(error) = unconfigured.process_payment(10) {
        println!("{error}");
    }

    Ok(())
}
