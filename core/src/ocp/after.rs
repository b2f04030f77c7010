//! Tiers are variants; the pricing call site is closed for modification.

use solid_common::output::Sink;
use tracing::debug;

use crate::percent_of;

/// A customer's purchase and the discount their tier earns on it.
pub trait Customer {
    fn tier(&self) -> &'static str;

    fn amount(&self) -> f64;

    fn calculate_discount(&self) -> f64;

    fn final_price(&self) -> f64 {
        self.amount() - self.calculate_discount()
    }
}

macro_rules! tiered_customer {
    ($name:ident, $tier:literal, $percent:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            amount: f64,
        }

        impl $name {
            pub fn new(amount: f64) -> Self {
                Self { amount }
            }
        }

        impl Customer for $name {
            fn tier(&self) -> &'static str {
                $tier
            }

            fn amount(&self) -> f64 {
                self.amount
            }

            fn calculate_discount(&self) -> f64 {
                percent_of(self.amount, $percent)
            }
        }
    };
}

tiered_customer!(RegularCustomer, "Regular", 5);
tiered_customer!(SilverCustomer, "Silver", 10);
tiered_customer!(GoldCustomer, "Gold", 15);
tiered_customer!(PremiumCustomer, "Premium", 20);

/// Quotes any customer and returns the discount granted.
pub fn apply_discount(customer: &dyn Customer, sink: &dyn Sink) -> f64 {
    let discount: f64 = customer.calculate_discount();
    debug!("pricing {} customer", customer.tier());

    sink.emit(&format!(
        "{} customer discount: {} (pays {} of {})",
        customer.tier(),
        discount,
        customer.final_price(),
        customer.amount()
    ));
    discount
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
