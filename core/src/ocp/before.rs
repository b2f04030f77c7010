use solid_common::error::{Result, SolidError};

use crate::percent_of;

/// Every new tier means another arm here.
pub struct DiscountCalculator;

impl DiscountCalculator {
    pub fn calculate_discount(&self, customer_type: &str, amount: f64) -> Result<f64> {
        match customer_type {
            "regular" => Ok(percent_of(amount, 5)),
            "silver" => Ok(percent_of(amount, 10)),
            "gold" => Ok(percent_of(amount, 15)),
            other => Err(SolidError::unrecognized(other)),
        }
    }
}
