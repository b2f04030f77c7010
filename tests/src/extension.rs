#![cfg(test)]
//! Variants defined here, outside the crate, must plug into the existing call
//! sites with no change to them.

use solid_common::error::SolidError;
use solid_common::output::{MemorySink, Sink};
use solid_core::lsp::after::{self as payments, PaymentMethod, Refundable};
use solid_core::ocp::after::{self as discounts, Customer};
use solid_core::ocp::before::DiscountCalculator;

struct GiftCardPayment;

impl PaymentMethod for GiftCardPayment {
    fn label(&self) -> &'static str {
        "gift card"
    }
}

impl Refundable for GiftCardPayment {
    fn refund(&self, amount: f64, sink: &dyn Sink) {
        sink.emit(&format!("Issuing store credit of {amount}"));
    }
}

struct EmployeeCustomer {
    amount: f64,
}

impl Customer for EmployeeCustomer {
    fn tier(&self) -> &'static str {
        "Employee"
    }

    fn amount(&self) -> f64 {
        self.amount
    }

    fn calculate_discount(&self) -> f64 {
        self.amount * 30.0 / 100.0
    }
}

#[test]
fn new_payment_method_uses_existing_call_sites() {
    let sink: MemorySink = MemorySink::new();
    payments::pay(&GiftCardPayment, 100.0, &sink);
    payments::refund(&GiftCardPayment, 100.0, &sink);

    assert_eq!(
        sink.messages(),
        vec!["Processing gift card payment of 100", "Issuing store credit of 100"]
    );
}

#[test]
fn new_tier_uses_existing_call_site() {
    let sink: MemorySink = MemorySink::new();
    let discount: f64 = discounts::apply_discount(&EmployeeCustomer { amount: 1000.0 }, &sink);

    assert_eq!(discount, 300.0);
    assert_eq!(
        sink.last().as_deref(),
        Some("Employee customer discount: 300 (pays 700 of 1000)")
    );
}

#[test]
fn tag_branching_calculator_cannot_grow_without_edits() {
    let calculator: DiscountCalculator = DiscountCalculator;
    for tag in ["premium", "employee"] {
        assert_eq!(
            calculator.calculate_discount(tag, 1000.0),
            Err(SolidError::unrecognized(tag))
        );
    }
}
