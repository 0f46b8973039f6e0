//! Checkout errors.

use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::{orders::OrdersError, orders::models::OrderId, profiles::ProfilesError};

/// Errors raised while requesting a payment session from the checkout
/// endpoint.
#[derive(Debug, Error)]
pub enum PaymentSessionError {
    #[error("checkout endpoint unreachable")]
    Http(#[from] reqwest::Error),

    #[error("checkout endpoint responded with {status}: {message}")]
    Rejected { status: StatusCode, message: String },

    #[error("payment session is missing {0}")]
    MissingField(&'static str),
}

/// Checkout failures. The `Display` text is shown to the user.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("your cart is empty")]
    EmptyCart,

    #[error("could not load your profile")]
    Profile(#[source] ProfilesError),

    #[error("could not create your order")]
    OrderCreation(#[source] OrdersError),

    #[error("could not start the payment")]
    PaymentSession(#[source] PaymentSessionError),

    #[error("order {0} not found")]
    OrderNotFound(OrderId),

    #[error("order {0} is already paid")]
    AlreadyPaid(OrderId),

    #[error("could not load your order")]
    Orders(#[source] OrdersError),
}
