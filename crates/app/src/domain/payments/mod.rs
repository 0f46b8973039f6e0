//! Payments
//!
//! Everything between a priced order and a paid one: converting a price to
//! processor minor units, issuing a payment session (customer, ephemeral key,
//! payment intent) through a [`PaymentProcessor`], and confirming the payment
//! through a [`PaymentSheet`] before the order is marked paid.

mod amount;
mod confirmation;
mod errors;
mod headless;
pub mod models;
mod processor;
mod sessions;
mod sheet;
mod stripe;

pub use amount::*;
pub use confirmation::*;
pub use errors::*;
pub use headless::*;
pub use processor::*;
pub use sessions::*;
pub use sheet::*;
pub use stripe::*;
