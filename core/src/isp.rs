//! # Interface Segregation (printers)
//!
//! [`before::Machine`] makes every device claim printing, scanning and
//! faxing, so an old printer has to refuse two of them at runtime. [`after`]
//! splits the contract so a device only implements what it can do, and the
//! compiler rejects the calls that used to fail.

use solid_common::error::Result;
use solid_common::output::Sink;

use crate::lesson::{Lesson, Principle};

pub mod after;
pub mod before;

const DOCUMENT: &str = "quarterly-report.pdf";

pub struct InterfaceSegregation;

impl Lesson for InterfaceSegregation {
    fn principle(&self) -> Principle {
        Principle::InterfaceSegregation
    }

    fn before(&self, sink: &dyn Sink) -> Result<()> {
        let machines: [Box<dyn before::Machine>; 2] = [
            Box::new(before::MultiFunctionPrinter),
            Box::new(before::OldPrinter),
        ];
        for machine in &machines {
            machine.print(DOCUMENT, sink)?;
            machine.scan(DOCUMENT, sink)?;
            machine.fax(DOCUMENT, sink)?;
        }
        Ok(())
    }

    fn after(&self, sink: &dyn Sink) -> Result<()> {
        let office: after::MultiFunctionPrinter = after::MultiFunctionPrinter;
        let basic: after::BasicPrinter = after::BasicPrinter;

        after::print_document(&basic, DOCUMENT, sink);
        after::print_document(&office, DOCUMENT, sink);
        after::scan_document(&office, DOCUMENT, sink);
        after::fax_document(&office, DOCUMENT, sink);
        after::copy_document(&office, DOCUMENT, sink);
        Ok(())
    }
}
