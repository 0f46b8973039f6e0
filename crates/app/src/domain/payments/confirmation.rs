//! Payment confirmation.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::{
    auth::Session,
    domain::{
        orders::{
            OrderRepository,
            models::{Order, OrderId, PaymentStatus},
        },
        payments::{
            errors::ConfirmationError,
            models::PaymentSession,
            sheet::{PaymentSheet, PaymentSheetOutcome, SheetConfig},
        },
    },
};

/// Where the payment UI sends the user back to after an external redirect.
pub const DEFAULT_RETURN_URL: &str = "storefront://orders";

/// Presents the payment sheet for an order and marks the order paid once the
/// user completes it.
#[derive(Clone)]
pub struct PaymentConfirmation {
    orders: Arc<dyn OrderRepository>,
    return_url: String,
}

impl PaymentConfirmation {
    #[must_use]
    pub fn new(orders: Arc<dyn OrderRepository>, return_url: impl Into<String>) -> Self {
        Self {
            orders,
            return_url: return_url.into(),
        }
    }

    /// Collect the payment for `order_id` and record it.
    ///
    /// The order is only marked `success` after the sheet reports
    /// [`PaymentSheetOutcome::Completed`]; on any error it stays pending.
    ///
    /// # Errors
    ///
    /// Returns an error when the sheet fails, the user cancels, or the status
    /// update fails.
    pub async fn confirm<P: PaymentSheet + ?Sized>(
        &self,
        sheet: &mut P,
        session: &Session,
        order_id: OrderId,
        payment: &PaymentSession,
    ) -> Result<Order, ConfirmationError> {
        sheet
            .init(&SheetConfig::new(payment, self.return_url.clone()))
            .await
            .map_err(ConfirmationError::Initialization)
            .inspect_err(|error| error!(%order_id, %error, "payment sheet init failed"))?;

        let outcome = sheet
            .present()
            .await
            .map_err(ConfirmationError::Presentation)
            .inspect_err(|error| error!(%order_id, %error, "payment failed"))?;

        if outcome == PaymentSheetOutcome::Canceled {
            warn!(%order_id, "payment canceled, order left pending");

            return Err(ConfirmationError::Canceled);
        }

        let order = self
            .orders
            .update_payment_status(&session.access_token, order_id, PaymentStatus::Success)
            .await
            .map_err(ConfirmationError::StatusUpdate)
            .inspect_err(|error| error!(%order_id, %error, "failed to mark order paid"))?;

        info!(%order_id, "order paid");

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;
    use testresult::TestResult;

    use super::*;
    use crate::{
        domain::{
            orders::{MockOrderRepository, OrdersError},
            payments::{errors::PaymentSheetError, sheet::MockPaymentSheet},
        },
        test::{order, payment_session, session},
    };

    fn confirmation(orders: MockOrderRepository) -> PaymentConfirmation {
        PaymentConfirmation::new(Arc::new(orders), DEFAULT_RETURN_URL)
    }

    #[tokio::test]
    async fn marks_order_paid_after_completed_sheet() -> TestResult {
        let mut sequence = Sequence::new();
        let mut sheet = MockPaymentSheet::new();
        let mut orders = MockOrderRepository::new();

        sheet
            .expect_init()
            .withf(|config| {
                config.merchant_display_name == "ShopNGo"
                    && config.payment_intent_client_secret == "pi_1_secret_abc"
                    && config.return_url == DEFAULT_RETURN_URL
            })
            .once()
            .in_sequence(&mut sequence)
            .returning(|_| Ok(()));

        sheet
            .expect_present()
            .once()
            .in_sequence(&mut sequence)
            .returning(|| Ok(PaymentSheetOutcome::Completed));

        orders
            .expect_update_payment_status()
            .withf(|_, id, status| *id == OrderId(4) && *status == PaymentStatus::Success)
            .once()
            .in_sequence(&mut sequence)
            .returning(|_, id, status| {
                let mut paid = order(id.0, "ada@example.com");
                paid.payment_status = status;
                Ok(paid)
            });

        let paid = confirmation(orders)
            .confirm(
                &mut sheet,
                &session("ada@example.com"),
                OrderId(4),
                &payment_session(),
            )
            .await?;

        assert!(paid.is_paid(), "order should be paid");

        Ok(())
    }

    #[tokio::test]
    async fn canceled_sheet_leaves_order_pending() {
        let mut sheet = MockPaymentSheet::new();
        let mut orders = MockOrderRepository::new();

        sheet.expect_init().once().returning(|_| Ok(()));
        sheet
            .expect_present()
            .once()
            .returning(|| Ok(PaymentSheetOutcome::Canceled));
        orders.expect_update_payment_status().never();

        let result = confirmation(orders)
            .confirm(
                &mut sheet,
                &session("ada@example.com"),
                OrderId(4),
                &payment_session(),
            )
            .await;

        assert!(
            matches!(result, Err(ConfirmationError::Canceled)),
            "expected canceled, got {result:?}"
        );
    }

    #[tokio::test]
    async fn init_failure_skips_presentation_and_update() {
        let mut sheet = MockPaymentSheet::new();
        let mut orders = MockOrderRepository::new();

        sheet
            .expect_init()
            .once()
            .returning(|_| Err(PaymentSheetError::InvalidClientSecret));
        sheet.expect_present().never();
        orders.expect_update_payment_status().never();

        let result = confirmation(orders)
            .confirm(
                &mut sheet,
                &session("ada@example.com"),
                OrderId(4),
                &payment_session(),
            )
            .await;

        assert!(
            matches!(result, Err(ConfirmationError::Initialization(_))),
            "expected init failure, got {result:?}"
        );
    }

    #[tokio::test]
    async fn failed_payment_leaves_order_pending() {
        let mut sheet = MockPaymentSheet::new();
        let mut orders = MockOrderRepository::new();

        sheet.expect_init().once().returning(|_| Ok(()));
        sheet
            .expect_present()
            .once()
            .returning(|| Err(PaymentSheetError::Failed("requires_payment_method".to_string())));
        orders.expect_update_payment_status().never();

        let result = confirmation(orders)
            .confirm(
                &mut sheet,
                &session("ada@example.com"),
                OrderId(4),
                &payment_session(),
            )
            .await;

        assert!(
            matches!(result, Err(ConfirmationError::Presentation(_))),
            "expected presentation failure, got {result:?}"
        );
    }

    #[tokio::test]
    async fn status_update_failure_is_reported() {
        let mut sheet = MockPaymentSheet::new();
        let mut orders = MockOrderRepository::new();

        sheet.expect_init().once().returning(|_| Ok(()));
        sheet
            .expect_present()
            .once()
            .returning(|| Ok(PaymentSheetOutcome::Completed));
        orders
            .expect_update_payment_status()
            .once()
            .returning(|_, id, _| Err(OrdersError::NotFound(id)));

        let result = confirmation(orders)
            .confirm(
                &mut sheet,
                &session("ada@example.com"),
                OrderId(4),
                &payment_session(),
            )
            .await;

        assert!(
            matches!(result, Err(ConfirmationError::StatusUpdate(_))),
            "expected status update failure, got {result:?}"
        );
    }
}
