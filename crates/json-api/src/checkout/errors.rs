//! Checkout Errors

use salvo::http::{ParseError, StatusCode};
use tracing::{error, warn};

use storefront_app::domain::payments::{PaymentProcessorError, PriceError};

use crate::checkout::models::CheckoutResponse;

#[derive(Debug)]
pub(crate) enum CheckoutFailure {
    InvalidRequest(ParseError),
    InvalidPrice(PriceError),
    Processor(PaymentProcessorError),
}

/// Map a failure to its status and `{success: false, message}` body.
///
/// Processor details are logged, never returned.
pub(crate) fn into_failure_response(failure: CheckoutFailure) -> (StatusCode, CheckoutResponse) {
    match failure {
        CheckoutFailure::InvalidRequest(source) => {
            warn!("rejected checkout request body: {source}");

            (
                StatusCode::BAD_REQUEST,
                CheckoutResponse::failure("Invalid request body"),
            )
        }
        CheckoutFailure::InvalidPrice(source) => {
            warn!("rejected checkout request: {source}");

            (
                StatusCode::BAD_REQUEST,
                CheckoutResponse::failure("Invalid price value"),
            )
        }
        CheckoutFailure::Processor(source) => {
            error!("failed to create payment session: {source}");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                CheckoutResponse::failure("Payment failed"),
            )
        }
    }
}
