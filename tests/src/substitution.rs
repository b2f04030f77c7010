#![cfg(test)]
use solid_common::output::MemorySink;
use solid_core::lsp::after::{
    self as payments, BankTransferPayment, CreditCardPayment, CryptoPayment, PayPalPayment,
    PaymentMethod,
};
use solid_core::ocp::after::{
    self as discounts, Customer, GoldCustomer, PremiumCustomer, RegularCustomer, SilverCustomer,
};

fn payment_methods() -> Vec<Box<dyn PaymentMethod>> {
    vec![
        Box::new(CreditCardPayment),
        Box::new(PayPalPayment),
        Box::new(BankTransferPayment),
        Box::new(CryptoPayment),
    ]
}

/// Going through the shared call site must look exactly like a direct call.
#[test]
fn dispatch_matches_direct_invocation() {
    for method in payment_methods() {
        let direct: MemorySink = MemorySink::new();
        method.process_payment(100.0, &direct);

        let dispatched: MemorySink = MemorySink::new();
        payments::pay(method.as_ref(), 100.0, &dispatched);

        assert_eq!(
            direct.messages(),
            dispatched.messages(),
            "{} diverged through the call site",
            method.label()
        );
    }
}

#[test]
fn payment_messages_carry_label_and_amount() {
    for method in payment_methods() {
        let sink: MemorySink = MemorySink::new();
        payments::pay(method.as_ref(), 100.0, &sink);

        let first: String = sink.messages().first().cloned().unwrap_or_default();
        assert!(first.contains(method.label()), "missing label in {first:?}");
        assert!(first.contains("100"), "missing amount in {first:?}");
    }
}

#[test]
fn labels_are_distinct() {
    let mut labels: Vec<&str> = payment_methods().iter().map(|m| m.label()).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), 4);
}

#[test]
fn tiers_discount_one_thousand_by_rate() {
    let customers: Vec<Box<dyn Customer>> = vec![
        Box::new(RegularCustomer::new(1000.0)),
        Box::new(SilverCustomer::new(1000.0)),
        Box::new(GoldCustomer::new(1000.0)),
        Box::new(PremiumCustomer::new(1000.0)),
    ];

    let sink: MemorySink = MemorySink::new();
    let granted: Vec<f64> = customers
        .iter()
        .map(|customer| discounts::apply_discount(customer.as_ref(), &sink))
        .collect();

    assert_eq!(granted, vec![50.0, 100.0, 150.0, 200.0]);
    assert_eq!(sink.len(), 4);
}
