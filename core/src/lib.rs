//! # SOLID Walkthrough Core
//!
//! Each principle lives in its own module and is told twice:
//!
//! * **`before`**: the violating version. It works until it doesn't, and the
//!   way it fails is the point of the lesson.
//! * **`after`**: the compliant version. Call sites depend on a narrow trait,
//!   never on a concrete variant.
//!
//! | module  | principle             | domain          |
//! |---------|-----------------------|-----------------|
//! | [`srp`] | Single Responsibility | users & logging |
//! | [`ocp`] | Open/Closed           | discounts       |
//! | [`lsp`] | Liskov Substitution   | payments        |
//! | [`isp`] | Interface Segregation | printers        |
//! | [`dip`] | Dependency Inversion  | databases       |
//!
//! All output goes through an injected [`solid_common::output::Sink`].
//! [`lesson::catalog`] ties the modules together for the CLI.

pub mod dip;
pub mod isp;
pub mod lesson;
pub mod lsp;
pub mod ocp;
pub mod srp;

/// `percent` percent of `amount`, multiplied before dividing so whole
/// percentages of whole amounts stay exact.
pub fn percent_of(amount: f64, percent: u32) -> f64 {
    amount * f64::from(percent) / 100.0
}
