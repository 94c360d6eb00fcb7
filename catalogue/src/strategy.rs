//! Strategy: interchangeable payment behavior behind one capability trait.
//!
//! The checkout never matches on a provider name. Each provider is a value
//! implementing [`PaymentStrategy`], and adding one touches no checkout
//! code.

use thiserror::Error;
use tracing::debug;

/// A way to settle an amount.
pub trait PaymentStrategy: Send + Sync {
    /// Charge `amount` and return the receipt line.
    fn pay(&self, amount: u32) -> String;

    /// Provider name, for receipts and logs.
    fn name(&self) -> &'static str;
}

pub struct CreditCard;

impl PaymentStrategy for CreditCard {
    fn pay(&self, amount: u32) -> String { format!("Paid {amount} using Credit Card.") }
    fn name(&self) -> &'static str { "Credit Card" }
}

pub struct PayPal;

impl PaymentStrategy for PayPal {
    fn pay(&self, amount: u32) -> String { format!("Paid {amount} using PayPal.") }
    fn name(&self) -> &'static str { "PayPal" }
}

#[derive(Error, Debug, PartialEq)]
pub enum CheckoutError {
    /// Payment was requested before any strategy was selected.
    #[error("no payment strategy selected")]
    NoStrategy,
}

/// Checkout context: delegates settlement to whichever strategy is set.
#[derive(Default)]
pub struct Checkout {
    strategy: Option<Box<dyn PaymentStrategy>>,
}

impl Checkout {
    pub fn new() -> Self { Self::default() }

    /// Select the provider used by subsequent payments, replacing any
    /// previous selection.
    pub fn set_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        debug!("payment strategy set to {}", strategy.name());
        self.strategy = Some(strategy);
    }

    pub fn process_payment(&self, amount: u32) -> Result<String, CheckoutError> {
        let strategy = self.strategy.as_ref().ok_or(CheckoutError::NoStrategy)?;
        Ok(strategy.pay(amount))
    }
}
