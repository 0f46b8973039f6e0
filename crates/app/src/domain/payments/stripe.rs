//! Stripe client.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;
use zeroize::Zeroizing;

use crate::domain::payments::{
    errors::PaymentProcessorError,
    models::{Customer, EphemeralKey, NewPaymentIntent, PaymentIntent},
    processor::PaymentProcessor,
};

/// Default Stripe API endpoint.
pub const DEFAULT_STRIPE_API_BASE: &str = "https://api.stripe.com";

/// API version ephemeral keys are issued for. The mobile SDK requires the
/// key's version to be pinned explicitly.
pub const STRIPE_API_VERSION: &str = "2025-09-30.clover";

/// [`PaymentProcessor`] backed by the Stripe REST API.
#[derive(Clone)]
pub struct StripeClient {
    secret_key: Zeroizing<String>,
    api_base: String,
    http: Client,
}

impl StripeClient {
    #[must_use]
    pub fn new(secret_key: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            secret_key: Zeroizing::new(secret_key.into()),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.http
            .post(format!("{}/v1/{path}", self.api_base))
            .bearer_auth(self.secret_key.as_str())
    }
}

impl Debug for StripeClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("StripeClient")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl PaymentProcessor for StripeClient {
    async fn create_customer(&self) -> Result<Customer, PaymentProcessorError> {
        let customer: Customer = read_stripe_json(self.post("customers").send().await?).await?;

        debug!(customer = %customer.id, "stripe customer created");

        Ok(customer)
    }

    async fn create_ephemeral_key(
        &self,
        customer: &str,
    ) -> Result<EphemeralKey, PaymentProcessorError> {
        let response = self
            .post("ephemeral_keys")
            .header("Stripe-Version", STRIPE_API_VERSION)
            .form(&[("customer", customer)])
            .send()
            .await?;

        read_stripe_json(response).await
    }

    async fn create_payment_intent(
        &self,
        intent: &NewPaymentIntent,
    ) -> Result<PaymentIntent, PaymentProcessorError> {
        let response = self
            .post("payment_intents")
            .form(&payment_intent_form(intent))
            .send()
            .await?;

        let created: PaymentIntent = read_stripe_json(response).await?;

        debug!(
            payment_intent = %created.id,
            amount = intent.amount.minor_units(),
            "stripe payment intent created"
        );

        Ok(created)
    }
}

/// Form fields for `POST /v1/payment_intents`.
pub(crate) fn payment_intent_form(intent: &NewPaymentIntent) -> Vec<(&'static str, String)> {
    let mut form = vec![
        ("amount", intent.amount.minor_units().to_string()),
        ("currency", intent.currency.to_string()),
        ("customer", intent.customer.clone()),
        ("automatic_payment_methods[enabled]", "true".to_string()),
        ("description", intent.description.clone()),
        ("metadata[email]", intent.metadata_email.clone()),
    ];

    if let Some(email) = &intent.receipt_email {
        form.push(("receipt_email", email.clone()));
    }

    form
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    message: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// Read a successful Stripe response, or turn an error body into
/// [`PaymentProcessorError::Rejected`].
pub(crate) async fn read_stripe_json<T: DeserializeOwned>(
    response: Response,
) -> Result<T, PaymentProcessorError> {
    let status = response.status();

    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();

        let message = serde_json::from_str::<StripeErrorBody>(&text)
            .ok()
            .and_then(|body| body.error.message.or(body.error.kind))
            .unwrap_or(text);

        return Err(PaymentProcessorError::Rejected { status, message });
    }

    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use super::*;
    use crate::domain::payments::amount::PaymentAmount;

    #[test]
    fn payment_intent_form_carries_amount_and_email() -> TestResult {
        let intent = NewPaymentIntent::for_order(
            PaymentAmount::from_major(dec!(49.99))?,
            "cus_123".to_string(),
            "ada@example.com",
        );

        let form = payment_intent_form(&intent);

        let field = |name: &str| {
            form.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.as_str())
        };

        assert_eq!(field("amount"), Some("4999"));
        assert_eq!(field("currency"), Some("eur"));
        assert_eq!(field("customer"), Some("cus_123"));
        assert_eq!(field("automatic_payment_methods[enabled]"), Some("true"));
        assert_eq!(field("receipt_email"), Some("ada@example.com"));
        assert_eq!(field("metadata[email]"), Some("ada@example.com"));
        assert_eq!(field("description"), Some("Order from ada@example.com"));

        Ok(())
    }

    #[test]
    fn payment_intent_form_omits_blank_receipt_email() -> TestResult {
        let intent = NewPaymentIntent::for_order(
            PaymentAmount::from_major(dec!(5))?,
            "cus_123".to_string(),
            "",
        );

        assert!(
            payment_intent_form(&intent)
                .iter()
                .all(|(key, _)| *key != "receipt_email"),
            "receipt_email should be omitted"
        );

        Ok(())
    }

    #[test]
    fn debug_output_hides_secret_key() {
        let client = StripeClient::new("sk_test_secret", DEFAULT_STRIPE_API_BASE);

        let debug = format!("{client:?}");

        assert!(!debug.contains("sk_test_secret"), "secret leaked: {debug}");
    }
}
