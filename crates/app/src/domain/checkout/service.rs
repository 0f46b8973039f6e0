//! Checkout service.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{error, info, warn};

use crate::{
    auth::Session,
    domain::{
        cart::CartStore,
        checkout::{
            client::PaymentSessionClient,
            errors::CheckoutError,
            models::{PaymentSessionRequest, PlacedOrder, ShippingPolicy},
        },
        orders::{
            OrderRepository,
            models::{NewOrder, OrderId, PaymentStatus},
        },
        payments::models::PaymentSession,
        profiles::ProfileRepository,
    },
    storage::LocalStorage,
};

/// Turns a cart into a pending order with a payment session.
#[derive(Clone)]
pub struct CheckoutService {
    profiles: Arc<dyn ProfileRepository>,
    orders: Arc<dyn OrderRepository>,
    payments: Arc<dyn PaymentSessionClient>,
    shipping: ShippingPolicy,
}

impl CheckoutService {
    #[must_use]
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        orders: Arc<dyn OrderRepository>,
        payments: Arc<dyn PaymentSessionClient>,
        shipping: ShippingPolicy,
    ) -> Self {
        Self {
            profiles,
            orders,
            payments,
            shipping,
        }
    }

    #[must_use]
    pub fn shipping(&self) -> ShippingPolicy {
        self.shipping
    }

    /// Place an order for the cart contents and request its payment session.
    ///
    /// The cart is cleared only once the payment session is in hand. When the
    /// session request fails the order stays pending and the cart is kept.
    ///
    /// # Errors
    ///
    /// Returns an error when the cart is empty or any remote step fails.
    pub async fn place_order<S: LocalStorage>(
        &self,
        session: &Session,
        cart: &mut CartStore<S>,
    ) -> Result<PlacedOrder, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let profile = self
            .profiles
            .find_profile(&session.access_token, session.user.id)
            .await
            .map_err(CheckoutError::Profile)
            .inspect_err(|error| error!(%error, "failed to load profile for checkout"))?;

        let delivery_address = profile
            .as_ref()
            .map(|profile| profile.delivery_address_or_default().to_string())
            .unwrap_or_default();

        let totals = self.shipping.totals(cart.total_price());

        let order = self
            .orders
            .insert_order(
                &session.access_token,
                NewOrder {
                    user_email: session.email().to_string(),
                    total_price: totals.total,
                    items: cart.snapshot(),
                    payment_status: PaymentStatus::Pending,
                    delivery_address,
                },
            )
            .await
            .map_err(CheckoutError::OrderCreation)
            .inspect_err(|error| error!(%error, "failed to create order"))?;

        let payment = self
            .request_session(session, order.id, totals.total)
            .await?;

        if let Err(error) = cart.clear() {
            warn!(order_id = %order.id, %error, "order placed but cart could not be cleared");
        }

        info!(
            order_id = %order.id,
            total = %totals.total,
            shipping = %totals.shipping,
            "order placed"
        );

        Ok(PlacedOrder {
            order_id: order.id,
            total: totals.total,
            payment,
        })
    }

    /// Request a fresh payment session for a pending order.
    ///
    /// # Errors
    ///
    /// Returns an error when the order is not the user's, is already paid, or
    /// the session request fails.
    pub async fn retry_payment(
        &self,
        session: &Session,
        order_id: OrderId,
    ) -> Result<PlacedOrder, CheckoutError> {
        let order = self
            .orders
            .find_order(&session.access_token, order_id)
            .await
            .map_err(CheckoutError::Orders)
            .inspect_err(|error| error!(%order_id, %error, "failed to load order"))?
            .filter(|order| order.user_email == session.email())
            .ok_or(CheckoutError::OrderNotFound(order_id))?;

        if order.is_paid() {
            return Err(CheckoutError::AlreadyPaid(order_id));
        }

        let payment = self
            .request_session(session, order.id, order.total_price)
            .await?;

        info!(%order_id, "payment session renewed");

        Ok(PlacedOrder {
            order_id: order.id,
            total: order.total_price,
            payment,
        })
    }

    async fn request_session(
        &self,
        session: &Session,
        order_id: OrderId,
        price: Decimal,
    ) -> Result<PaymentSession, CheckoutError> {
        self.payments
            .request_session(&PaymentSessionRequest {
                price,
                email: session.email().to_string(),
            })
            .await
            .map_err(CheckoutError::PaymentSession)
            .inspect_err(|error| {
                error!(%order_id, %error, "payment session request failed, order left pending");
            })
    }
}
