use solid_common::error::{Result, SolidError};
use solid_common::output::Sink;

/// One fat contract for every office device.
pub trait Machine {
    fn print(&self, document: &str, sink: &dyn Sink) -> Result<()>;

    fn scan(&self, document: &str, sink: &dyn Sink) -> Result<()>;

    fn fax(&self, document: &str, sink: &dyn Sink) -> Result<()>;
}

pub struct MultiFunctionPrinter;

impl Machine for MultiFunctionPrinter {
    fn print(&self, document: &str, sink: &dyn Sink) -> Result<()> {
        sink.emit(&format!("Printing {document}"));
        Ok(())
    }

    fn scan(&self, document: &str, sink: &dyn Sink) -> Result<()> {
        sink.emit(&format!("Scanning {document}"));
        Ok(())
    }

    fn fax(&self, document: &str, sink: &dyn Sink) -> Result<()> {
        sink.emit(&format!("Faxing {document}"));
        Ok(())
    }
}

/// Can only print, yet must still answer for scan and fax.
pub struct OldPrinter;

impl Machine for OldPrinter {
    fn print(&self, document: &str, sink: &dyn Sink) -> Result<()> {
        sink.emit(&format!("Printing {document} (old printer)"));
        Ok(())
    }

    fn scan(&self, _document: &str, _sink: &dyn Sink) -> Result<()> {
        Err(SolidError::unsupported("OldPrinter", "scan"))
    }

    fn fax(&self, _document: &str, _sink: &dyn Sink) -> Result<()> {
        Err(SolidError::unsupported("OldPrinter", "fax"))
    }
}
