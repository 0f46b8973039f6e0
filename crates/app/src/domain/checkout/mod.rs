//! Checkout
//!
//! Turns the cart into a pending order and obtains a payment session for it.
//! The order is written before the payment session is requested, so a failed
//! session leaves a pending order the user can pay later from the orders list.

mod client;
mod errors;
pub mod models;
mod service;

pub use client::*;
pub use errors::*;
pub use service::*;
