//! Headless Stripe payment sheet.
//!
//! Stands in for the mobile payment UI when driving checkout from a terminal
//! against a Stripe test account. Instead of collecting card details it
//! confirms the payment intent directly with the publishable key, the intent's
//! client secret and a fixed test payment method.

use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use crate::domain::payments::{
    errors::PaymentSheetError,
    models::PaymentIntent,
    sheet::{PaymentSheet, PaymentSheetOutcome, SheetConfig},
    stripe::{DEFAULT_STRIPE_API_BASE, read_stripe_json},
};

/// Test card that always succeeds without authentication.
pub const DEFAULT_TEST_PAYMENT_METHOD: &str = "pm_card_visa";

#[derive(Debug, Clone)]
struct PendingIntent {
    id: String,
    client_secret: String,
    return_url: String,
}

/// [`PaymentSheet`] confirming the intent over the Stripe API.
#[derive(Debug, Clone)]
pub struct StripeHeadlessSheet {
    publishable_key: String,
    payment_method: String,
    api_base: String,
    http: Client,
    pending: Option<PendingIntent>,
}

impl StripeHeadlessSheet {
    #[must_use]
    pub fn new(publishable_key: impl Into<String>, payment_method: impl Into<String>) -> Self {
        Self {
            publishable_key: publishable_key.into(),
            payment_method: payment_method.into(),
            api_base: DEFAULT_STRIPE_API_BASE.to_string(),
            http: Client::new(),
            pending: None,
        }
    }

    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }
}

/// Payment intent id embedded in a client secret (`pi_…_secret_…`).
fn intent_id(client_secret: &str) -> Option<&str> {
    client_secret
        .split_once("_secret_")
        .map(|(id, _)| id)
        .filter(|id| id.starts_with("pi_"))
}

#[async_trait]
impl PaymentSheet for StripeHeadlessSheet {
    async fn init(&mut self, config: &SheetConfig) -> Result<(), PaymentSheetError> {
        let id = intent_id(&config.payment_intent_client_secret)
            .ok_or(PaymentSheetError::InvalidClientSecret)?;

        self.pending = Some(PendingIntent {
            id: id.to_string(),
            client_secret: config.payment_intent_client_secret.clone(),
            return_url: config.return_url.clone(),
        });

        Ok(())
    }

    async fn present(&mut self) -> Result<PaymentSheetOutcome, PaymentSheetError> {
        let pending = self
            .pending
            .take()
            .ok_or(PaymentSheetError::NotInitialized)?;

        let response = self
            .http
            .post(format!(
                "{}/v1/payment_intents/{}/confirm",
                self.api_base, pending.id
            ))
            .bearer_auth(&self.publishable_key)
            .form(&[
                ("client_secret", pending.client_secret.as_str()),
                ("payment_method", self.payment_method.as_str()),
                ("return_url", pending.return_url.as_str()),
            ])
            .send()
            .await
            .map_err(|error| PaymentSheetError::Processor(error.into()))?;

        let intent: PaymentIntent = read_stripe_json(response).await?;

        info!(payment_intent = %intent.id, status = %intent.status, "payment intent confirmed");

        match intent.status.as_str() {
            "succeeded" => Ok(PaymentSheetOutcome::Completed),
            "canceled" => Ok(PaymentSheetOutcome::Canceled),
            _ => Err(PaymentSheetError::Failed(intent.status)),
        }
    }
}
