//! Single-operation contracts, composed where a caller needs more than one.

use solid_common::output::Sink;
use tracing::debug;

pub trait Printer {
    fn print(&self, document: &str, sink: &dyn Sink);
}

pub trait Scanner {
    fn scan(&self, document: &str, sink: &dyn Sink);
}

pub trait FaxMachine {
    fn fax(&self, document: &str, sink: &dyn Sink);
}

/// Device super trait, implemented for anything that does all three.
pub trait MultiFunctionDevice: Printer + Scanner + FaxMachine {}

impl<T: Printer + Scanner + FaxMachine> MultiFunctionDevice for T {}

/// Prints and nothing else; there is no scan method to misuse.
///
/// ```
/// use solid_common::output::MemorySink;
/// use solid_core::isp::after::{BasicPrinter, print_document};
///
/// let sink = MemorySink::new();
/// print_document(&BasicPrinter, "memo", &sink);
/// assert_eq!(sink.last().as_deref(), Some("Printing memo (basic printer)"));
/// ```
///
/// Handing it to a scanning call site is rejected at compile time:
///
/// ```compile_fail
/// use solid_common::output::MemorySink;
/// use solid_core::isp::after::{BasicPrinter, scan_document};
///
/// let sink = MemorySink::new();
/// scan_document(&BasicPrinter, "memo", &sink);
/// ```
///
/// and so is copying, which needs a scanner too:
///
/// ```compile_fail
/// use solid_common::output::MemorySink;
/// use solid_core::isp::after::{BasicPrinter, copy_document};
///
/// let sink = MemorySink::new();
/// copy_document(&BasicPrinter, "memo", &sink);
/// ```
pub struct BasicPrinter;

impl Printer for BasicPrinter {
    fn print(&self, document: &str, sink: &dyn Sink) {
        sink.emit(&format!("Printing {document} (basic printer)"));
    }
}

pub struct MultiFunctionPrinter;

impl Printer for MultiFunctionPrinter {
    fn print(&self, document: &str, sink: &dyn Sink) {
        sink.emit(&format!("Printing {document}"));
    }
}

impl Scanner for MultiFunctionPrinter {
    fn scan(&self, document: &str, sink: &dyn Sink) {
        sink.emit(&format!("Scanning {document}"));
    }
}

impl FaxMachine for MultiFunctionPrinter {
    fn fax(&self, document: &str, sink: &dyn Sink) {
        sink.emit(&format!("Faxing {document}"));
    }
}

pub fn print_document(printer: &dyn Printer, document: &str, sink: &dyn Sink) {
    printer.print(document, sink);
}

pub fn scan_document(scanner: &dyn Scanner, document: &str, sink: &dyn Sink) {
    scanner.scan(document, sink);
}

pub fn fax_document(fax: &dyn FaxMachine, document: &str, sink: &dyn Sink) {
    fax.fax(document, sink);
}

/// Copying needs a scan followed by a print, so it asks for both.
pub fn copy_document<D>(device: &D, document: &str, sink: &dyn Sink)
where
    D: Printer + Scanner + ?Sized,
{
    debug!("copying {document}");
    device.scan(document, sink);
    device.print(document, sink);
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
