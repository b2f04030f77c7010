//! # Output Port
//!
//! Every illustration reports what it did by emitting a formatted line into a
//! [`Sink`]. The sink is handed in by the caller, so a terminal adapter and a
//! capturing test double are interchangeable.

use std::cell::RefCell;

use tracing::trace;

/// Accepts one formatted message at a time.
pub trait Sink {
    fn emit(&self, message: &str);
}

impl<S: Sink + ?Sized> Sink for &S {
    fn emit(&self, message: &str) {
        (**self).emit(message);
    }
}

/// Records every message in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: RefCell<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.messages.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }

    /// True when any recorded message contains `fragment`.
    pub fn contains(&self, fragment: &str) -> bool {
        self.messages.borrow().iter().any(|msg| msg.contains(fragment))
    }
}

impl Sink for MemorySink {
    fn emit(&self, message: &str) {
        trace!(target: "solid::memory", "captured: {message}");
        self.messages.borrow_mut().push(message.to_string());
    }
}
