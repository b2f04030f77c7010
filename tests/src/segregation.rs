#![cfg(test)]
use solid_common::error::SolidError;
use solid_common::output::MemorySink;
use solid_core::isp::{after, before};
use solid_core::lsp::{after as payments, before as fat_payments};

#[test]
fn narrow_printer_contracts_never_refuse() {
    let sink: MemorySink = MemorySink::new();
    let printers: [&dyn after::Printer; 2] = [&after::BasicPrinter, &after::MultiFunctionPrinter];
    for printer in printers {
        after::print_document(printer, "memo", &sink);
    }
    after::scan_document(&after::MultiFunctionPrinter, "memo", &sink);
    after::fax_document(&after::MultiFunctionPrinter, "memo", &sink);

    assert_eq!(sink.len(), 4);
}

#[test]
fn fat_contract_forces_runtime_refusals() {
    let sink: MemorySink = MemorySink::new();
    let machine: &dyn before::Machine = &before::OldPrinter;

    assert!(machine.print("memo", &sink).is_ok());
    assert!(matches!(
        machine.scan("memo", &sink),
        Err(SolidError::UnsupportedOperation { operation: "scan", .. })
    ));
    assert!(matches!(
        machine.fax("memo", &sink),
        Err(SolidError::UnsupportedOperation { operation: "fax", .. })
    ));
}

#[test]
fn refunds_only_reach_refundable_methods() {
    let sink: MemorySink = MemorySink::new();
    let refundable: [&dyn payments::Refundable; 2] =
        [&payments::CreditCardPayment, &payments::PayPalPayment];
    for method in refundable {
        payments::refund(method, 100.0, &sink);
    }
    assert!(sink.contains("Refunding 100 via credit card"));
    assert!(sink.contains("Refunding 100 via PayPal"));

    let fat: MemorySink = MemorySink::new();
    let broken = fat_payments::checkout_then_refund(&fat_payments::CryptoPayment, 100.0, &fat);
    assert_eq!(broken, Err(SolidError::unsupported("CryptoPayment", "refund")));
}
