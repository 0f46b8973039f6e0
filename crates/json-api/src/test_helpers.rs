//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use storefront_app::domain::payments::MockPaymentProcessor;

use crate::{checkout, state::State};

/// A processor that fails the test if any call reaches it.
pub(crate) fn strict_processor() -> MockPaymentProcessor {
    let mut processor = MockPaymentProcessor::new();

    processor.expect_create_customer().never();
    processor.expect_create_ephemeral_key().never();
    processor.expect_create_payment_intent().never();

    processor
}

pub(crate) fn checkout_service(processor: MockPaymentProcessor) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::shared(Arc::new(processor))))
            .push(Router::with_path("checkout").post(checkout::handler::handler)),
    )
}
