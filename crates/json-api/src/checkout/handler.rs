//! Create Payment Session Handler

use std::sync::Arc;

use salvo::prelude::*;

use storefront_app::domain::payments::PaymentAmount;

use crate::{
    checkout::{
        errors::{CheckoutFailure, into_failure_response},
        models::{CheckoutRequest, CheckoutResponse},
    },
    extensions::*,
    state::State,
};

/// Create Payment Session Handler
///
/// Creates a customer, an ephemeral key and a payment intent for the given
/// price. Nothing is created when the price is invalid.
#[endpoint(
    tags("checkout"),
    summary = "Create Payment Session",
    request_body = CheckoutRequest,
    responses(
        (status_code = StatusCode::OK, description = "Payment session created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid request body or price"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Payment processor failure"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CheckoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let result = match req.parse_json::<CheckoutRequest>().await {
        Ok(request) => match PaymentAmount::from_json(&request.price) {
            Ok(amount) => state
                .payments
                .issue(amount, request.email.as_deref().unwrap_or_default())
                .await
                .map_err(CheckoutFailure::Processor),
            Err(error) => Err(CheckoutFailure::InvalidPrice(error)),
        },
        Err(error) => Err(CheckoutFailure::InvalidRequest(error)),
    };

    match result {
        Ok(session) => Ok(Json(session.into())),
        Err(failure) => {
            let (status, body) = into_failure_response(failure);

            res.status_code(status);

            Ok(Json(body))
        }
    }
}
