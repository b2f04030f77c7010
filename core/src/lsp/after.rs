//! Contracts every variant can keep.

use solid_common::output::Sink;
use tracing::debug;

/// Anything that can take a payment.
pub trait PaymentMethod {
    /// Human-readable name used in every message.
    fn label(&self) -> &'static str;

    fn process_payment(&self, amount: f64, sink: &dyn Sink) {
        sink.emit(&format!("Processing {} payment of {amount}", self.label()));
    }
}

/// Payment methods that can also send money back.
pub trait Refundable: PaymentMethod {
    fn refund(&self, amount: f64, sink: &dyn Sink) {
        sink.emit(&format!("Refunding {amount} via {}", self.label()));
    }
}

pub struct CreditCardPayment;

impl PaymentMethod for CreditCardPayment {
    fn label(&self) -> &'static str {
        "credit card"
    }
}

impl Refundable for CreditCardPayment {}

pub struct PayPalPayment;

impl PaymentMethod for PayPalPayment {
    fn label(&self) -> &'static str {
        "PayPal"
    }
}

impl Refundable for PayPalPayment {}

pub struct BankTransferPayment;

impl PaymentMethod for BankTransferPayment {
    fn label(&self) -> &'static str {
        "bank transfer"
    }

    fn process_payment(&self, amount: f64, sink: &dyn Sink) {
        sink.emit(&format!("Processing bank transfer payment of {amount}"));
        sink.emit("Bank transfer will settle in 1-3 business days");
    }
}

/// Irreversible, so it never claims to be [`Refundable`].
pub struct CryptoPayment;

impl PaymentMethod for CryptoPayment {
    fn label(&self) -> &'static str {
        "crypto"
    }
}

pub fn pay(method: &dyn PaymentMethod, amount: f64, sink: &dyn Sink) {
    debug!("dispatching {} payment", method.label());
    method.process_payment(amount, sink);
}

pub fn refund(method: &dyn Refundable, amount: f64, sink: &dyn Sink) {
    debug!("dispatching {} refund", method.label());
    method.refund(amount, sink);
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use solid_common::output::MemorySink;

    #[test]
    fn pay_matches_direct_call_for_every_method() {
        let methods: [&dyn PaymentMethod; 4] = [
            &CreditCardPayment,
            &PayPalPayment,
            &BankTransferPayment,
            &CryptoPayment,
        ];
        for method in methods {
            let direct: MemorySink = MemorySink::new();
            method.process_payment(100.0, &direct);

            let dispatched: MemorySink = MemorySink::new();
            pay(method, 100.0, &dispatched);

            assert_eq!(direct.messages(), dispatched.messages());
        }
    }

    #[test]
    fn bank_transfer_adds_settlement_notice() {
        let sink: MemorySink = MemorySink::new();
        pay(&BankTransferPayment, 250.0, &sink);
        assert_eq!(
            sink.messages(),
            vec![
                "Processing bank transfer payment of 250",
                "Bank transfer will settle in 1-3 business days",
            ]
        );
    }

    #[test]
    fn refund_names_the_method() {
        let sink: MemorySink = MemorySink::new();
        refund(&PayPalPayment, 40.5, &sink);
        assert_eq!(sink.last().as_deref(), Some("Refunding 40.5 via PayPal"));
    }
}
