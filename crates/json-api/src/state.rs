//! State

use std::sync::Arc;

use storefront_app::domain::payments::{PaymentProcessor, PaymentSessionIssuer};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) payments: PaymentSessionIssuer,
}

impl State {
    #[must_use]
    pub(crate) fn new(processor: Arc<dyn PaymentProcessor>) -> Self {
        Self {
            payments: PaymentSessionIssuer::new(processor),
        }
    }

    #[must_use]
    pub(crate) fn shared(processor: Arc<dyn PaymentProcessor>) -> Arc<Self> {
        Arc::new(Self::new(processor))
    }
}
