//! Checkout Request & Response

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use storefront_app::domain::payments::models::PaymentSession;

/// Payment session request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutRequest {
    /// Email the receipt is sent to
    #[serde(default)]
    pub email: Option<String>,

    /// Order total in major currency units, e.g. `49.99`
    #[serde(default)]
    #[salvo(schema(value_type = f64))]
    pub price: Value,
}

/// Payment session response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckoutResponse {
    pub success: bool,

    pub message: String,

    /// Payment intent client secret
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_intent: Option<String>,

    /// Ephemeral key secret scoped to `customer`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ephemeral_key: Option<String>,

    /// Processor customer id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
}

impl CheckoutResponse {
    pub(crate) fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            payment_intent: None,
            ephemeral_key: None,
            customer: None,
        }
    }
}

impl From<PaymentSession> for CheckoutResponse {
    fn from(session: PaymentSession) -> Self {
        Self {
            success: true,
            message: "Payment session created".to_string(),
            payment_intent: Some(session.payment_intent),
            ephemeral_key: Some(session.ephemeral_key),
            customer: Some(session.customer),
        }
    }
}
