//! Payment processor.

use async_trait::async_trait;
use mockall::automock;

use crate::domain::payments::{
    errors::PaymentProcessorError,
    models::{Customer, EphemeralKey, NewPaymentIntent, PaymentIntent},
};

/// Payment processor operations behind a payment session.
#[automock]
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Create a customer with no additional data.
    async fn create_customer(&self) -> Result<Customer, PaymentProcessorError>;

    /// Create an ephemeral key scoped to `customer`.
    async fn create_ephemeral_key(&self, customer: &str)
    -> Result<EphemeralKey, PaymentProcessorError>;

    async fn create_payment_intent(
        &self,
        intent: &NewPaymentIntent,
    ) -> Result<PaymentIntent, PaymentProcessorError>;
}
