//! Payment sheet.

use async_trait::async_trait;
use mockall::automock;

use crate::domain::payments::{
    errors::PaymentSheetError,
    models::{MERCHANT_DISPLAY_NAME, PaymentSession},
};

/// Everything a sheet needs to collect a payment for one intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetConfig {
    pub merchant_display_name: String,
    pub payment_intent_client_secret: String,
    pub customer_id: String,
    pub customer_ephemeral_key_secret: String,
    pub return_url: String,
}

impl SheetConfig {
    #[must_use]
    pub fn new(session: &PaymentSession, return_url: impl Into<String>) -> Self {
        Self {
            merchant_display_name: MERCHANT_DISPLAY_NAME.to_string(),
            payment_intent_client_secret: session.payment_intent.clone(),
            customer_id: session.customer.clone(),
            customer_ephemeral_key_secret: session.ephemeral_key.clone(),
            return_url: return_url.into(),
        }
    }
}

/// How the user left the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentSheetOutcome {
    Completed,
    Canceled,
}

/// The payment UI: configured once, then presented to the user.
#[automock]
#[async_trait]
pub trait PaymentSheet: Send {
    async fn init(&mut self, config: &SheetConfig) -> Result<(), PaymentSheetError>;

    async fn present(&mut self) -> Result<PaymentSheetOutcome, PaymentSheetError>;
}
