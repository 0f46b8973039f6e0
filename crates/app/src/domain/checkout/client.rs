//! Payment session client.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    checkout::{errors::PaymentSessionError, models::PaymentSessionRequest},
    payments::models::PaymentSession,
};

/// Requests payment sessions from the checkout endpoint.
#[derive(Debug, Clone)]
pub struct HttpPaymentSessionClient {
    url: String,
    http: Client,
}

impl HttpPaymentSessionClient {
    /// `url` is the full checkout endpoint, e.g. `"http://localhost:8000/checkout"`.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http: Client::new(),
        }
    }
}

#[async_trait]
impl PaymentSessionClient for HttpPaymentSessionClient {
    async fn request_session(
        &self,
        request: &PaymentSessionRequest,
    ) -> Result<PaymentSession, PaymentSessionError> {
        let response = self.http.post(&self.url).json(request).send().await?;

        let status = response.status();
        let text = response.text().await?;

        let envelope: SessionEnvelope = serde_json::from_str(&text).unwrap_or_default();

        if !status.is_success() {
            return Err(PaymentSessionError::Rejected {
                status,
                message: envelope.message.unwrap_or(text),
            });
        }

        envelope.into_session()
    }
}

/// Requests payment sessions from the checkout endpoint.
#[automock]
#[async_trait]
pub trait PaymentSessionClient: Send + Sync {
    async fn request_session(
        &self,
        request: &PaymentSessionRequest,
    ) -> Result<PaymentSession, PaymentSessionError>;
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionEnvelope {
    message: Option<String>,
    #[serde(alias = "payementIntent")]
    payment_intent: Option<String>,
    ephemeral_key: Option<String>,
    customer: Option<String>,
}

impl SessionEnvelope {
    fn into_session(self) -> Result<PaymentSession, PaymentSessionError> {
        Ok(PaymentSession {
            payment_intent: required(self.payment_intent, "paymentIntent")?,
            ephemeral_key: required(self.ephemeral_key, "ephemeralKey")?,
            customer: required(self.customer, "customer")?,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, PaymentSessionError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(PaymentSessionError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn complete_envelope_becomes_session() -> TestResult {
        let envelope: SessionEnvelope = serde_json::from_value(json!({
            "success": true,
            "message": "payment session created",
            "paymentIntent": "pi_1_secret_2",
            "ephemeralKey": "ek_test_3",
            "customer": "cus_4"
        }))?;

        assert_eq!(
            envelope.into_session()?,
            PaymentSession {
                payment_intent: "pi_1_secret_2".to_string(),
                ephemeral_key: "ek_test_3".to_string(),
                customer: "cus_4".to_string(),
            }
        );

        Ok(())
    }

    #[test]
    fn misspelled_intent_key_is_accepted() -> TestResult {
        let envelope: SessionEnvelope = serde_json::from_value(json!({
            "payementIntent": "pi_1_secret_2",
            "ephemeralKey": "ek_test_3",
            "customer": "cus_4"
        }))?;

        assert_eq!(envelope.into_session()?.payment_intent, "pi_1_secret_2");

        Ok(())
    }

    #[test]
    fn missing_or_blank_field_is_an_error() -> TestResult {
        let missing: SessionEnvelope = serde_json::from_value(json!({
            "paymentIntent": "pi_1_secret_2",
            "customer": "cus_4"
        }))?;

        let blank: SessionEnvelope = serde_json::from_value(json!({
            "paymentIntent": "pi_1_secret_2",
            "ephemeralKey": "ek_test_3",
            "customer": ""
        }))?;

        assert!(
            matches!(
                missing.into_session(),
                Err(PaymentSessionError::MissingField("ephemeralKey"))
            ),
            "missing ephemeral key should fail"
        );
        assert!(
            matches!(
                blank.into_session(),
                Err(PaymentSessionError::MissingField("customer"))
            ),
            "blank customer should fail"
        );

        Ok(())
    }
}
