//! # Open/Closed (discounts)
//!
//! The tag-matching [`before::DiscountCalculator`] has to be edited for every
//! new customer tier and fails on any tier it was never taught. In [`after`]
//! each tier is a [`after::Customer`] variant and
//! [`after::apply_discount`] never changes.

use solid_common::error::Result;
use solid_common::output::Sink;

use crate::lesson::{Lesson, Principle};

pub mod after;
pub mod before;

/// Purchase amount every tier is quoted against.
pub const PURCHASE_AMOUNT: f64 = 1000.0;

pub struct OpenClosed;

impl Lesson for OpenClosed {
    fn principle(&self) -> Principle {
        Principle::OpenClosed
    }

    fn before(&self, sink: &dyn Sink) -> Result<()> {
        let calculator: before::DiscountCalculator = before::DiscountCalculator;
        for tier in ["regular", "silver", "gold", "premium"] {
            let discount: f64 = calculator.calculate_discount(tier, PURCHASE_AMOUNT)?;
            sink.emit(&format!("{tier} customer discount: {discount}"));
        }
        Ok(())
    }

    fn after(&self, sink: &dyn Sink) -> Result<()> {
        let customers: [Box<dyn after::Customer>; 4] = [
            Box::new(after::RegularCustomer::new(PURCHASE_AMOUNT)),
            Box::new(after::SilverCustomer::new(PURCHASE_AMOUNT)),
            Box::new(after::GoldCustomer::new(PURCHASE_AMOUNT)),
            Box::new(after::PremiumCustomer::new(PURCHASE_AMOUNT)),
        ];
        for customer in &customers {
            after::apply_discount(customer.as_ref(), sink);
        }
        Ok(())
    }
}
