//! Payment session issuing.

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::payments::{
    amount::PaymentAmount,
    errors::PaymentProcessorError,
    models::{NewPaymentIntent, PaymentSession},
    processor::PaymentProcessor,
};

/// Creates a customer, an ephemeral key and a payment intent for one payment.
#[derive(Clone)]
pub struct PaymentSessionIssuer {
    processor: Arc<dyn PaymentProcessor>,
}

impl PaymentSessionIssuer {
    #[must_use]
    pub fn new(processor: Arc<dyn PaymentProcessor>) -> Self {
        Self { processor }
    }

    /// Issue a payment session for `amount`, receipted to `email`.
    ///
    /// Nothing is returned unless every processor call succeeds.
    ///
    /// # Errors
    ///
    /// Returns the first processor error.
    pub async fn issue(
        &self,
        amount: PaymentAmount,
        email: &str,
    ) -> Result<PaymentSession, PaymentProcessorError> {
        let result = async {
            let customer = self.processor.create_customer().await?;

            let ephemeral_key = self.processor.create_ephemeral_key(&customer.id).await?;

            let intent = self
                .processor
                .create_payment_intent(&NewPaymentIntent::for_order(
                    amount,
                    customer.id.clone(),
                    email,
                ))
                .await?;

            let client_secret = intent
                .client_secret
                .ok_or(PaymentProcessorError::Incomplete("client_secret"))?;

            Ok::<_, PaymentProcessorError>(PaymentSession {
                payment_intent: client_secret,
                ephemeral_key: ephemeral_key.secret,
                customer: customer.id,
            })
        }
        .await;

        match &result {
            Ok(session) => info!(customer = %session.customer, %amount, "payment session issued"),
            Err(error) => error!(%error, %amount, "payment session failed"),
        }

        result
    }
}
