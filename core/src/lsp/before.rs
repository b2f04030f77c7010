use solid_common::error::{Result, SolidError};
use solid_common::output::Sink;

/// Promises both directions of money movement for every variant.
pub trait Payment {
    fn process_payment(&self, amount: f64, sink: &dyn Sink) -> Result<()>;

    fn refund(&self, amount: f64, sink: &dyn Sink) -> Result<()>;
}

pub struct CreditCardPayment;

impl Payment for CreditCardPayment {
    fn process_payment(&self, amount: f64, sink: &dyn Sink) -> Result<()> {
        sink.emit(&format!("Processing credit card payment of {amount}"));
        Ok(())
    }

    fn refund(&self, amount: f64, sink: &dyn Sink) -> Result<()> {
        sink.emit(&format!("Refunding {amount} to credit card"));
        Ok(())
    }
}

pub struct PayPalPayment;

impl Payment for PayPalPayment {
    fn process_payment(&self, amount: f64, sink: &dyn Sink) -> Result<()> {
        sink.emit(&format!("Processing PayPal payment of {amount}"));
        Ok(())
    }

    fn refund(&self, amount: f64, sink: &dyn Sink) -> Result<()> {
        sink.emit(&format!("Refunding {amount} to PayPal"));
        Ok(())
    }
}

/// Accepts payments but cannot reverse them, weakening the contract.
pub struct CryptoPayment;

impl Payment for CryptoPayment {
    fn process_payment(&self, amount: f64, sink: &dyn Sink) -> Result<()> {
        sink.emit(&format!("Processing crypto payment of {amount}"));
        Ok(())
    }

    fn refund(&self, _amount: f64, _sink: &dyn Sink) -> Result<()> {
        Err(SolidError::unsupported("CryptoPayment", "refund"))
    }
}

/// Written against [`Payment`] alone, trusting every variant to refund.
pub fn checkout_then_refund(payment: &dyn Payment, amount: f64, sink: &dyn Sink) -> Result<()> {
    payment.process_payment(amount, sink)?;
    payment.refund(amount, sink)
}
