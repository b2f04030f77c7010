//! # Liskov Substitution (payments)
//!
//! In [`before`] every payment promises a refund, and crypto breaks that
//! promise at runtime, so code written against the contract fails the moment
//! a crypto payment is substituted in. [`after`] only promises what every
//! variant delivers and moves refunds to their own trait.

use solid_common::error::Result;
use solid_common::output::Sink;

use crate::lesson::{Lesson, Principle};

pub mod after;
pub mod before;

pub const PAYMENT_AMOUNT: f64 = 100.0;

pub struct LiskovSubstitution;

impl Lesson for LiskovSubstitution {
    fn principle(&self) -> Principle {
        Principle::LiskovSubstitution
    }

    fn before(&self, sink: &dyn Sink) -> Result<()> {
        let payments: [Box<dyn before::Payment>; 3] = [
            Box::new(before::CreditCardPayment),
            Box::new(before::PayPalPayment),
            Box::new(before::CryptoPayment),
        ];
        for payment in &payments {
            before::checkout_then_refund(payment.as_ref(), PAYMENT_AMOUNT, sink)?;
        }
        Ok(())
    }

    fn after(&self, sink: &dyn Sink) -> Result<()> {
        let methods: [Box<dyn after::PaymentMethod>; 4] = [
            Box::new(after::CreditCardPayment),
            Box::new(after::PayPalPayment),
            Box::new(after::BankTransferPayment),
            Box::new(after::CryptoPayment),
        ];
        for method in &methods {
            after::pay(method.as_ref(), PAYMENT_AMOUNT, sink);
        }

        let refundable: [Box<dyn after::Refundable>; 2] =
            [Box::new(after::CreditCardPayment), Box::new(after::PayPalPayment)];
        for method in &refundable {
            after::refund(method.as_ref(), PAYMENT_AMOUNT, sink);
        }
        Ok(())
    }
}
