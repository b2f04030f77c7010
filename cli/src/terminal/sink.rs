use solid_common::output::Sink;

use crate::terminal::print;

/// Routes lesson output to the terminal as status lines.
pub struct TerminalSink;

impl Sink for TerminalSink {
    fn emit(&self, message: &str) {
        print::print_status(message);
    }
}
