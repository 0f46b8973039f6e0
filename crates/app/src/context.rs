//! App Context

use std::sync::Arc;

use crate::{
    auth::{AuthService, GoTrueAuthService},
    domain::{
        checkout::{
            CheckoutService, HttpPaymentSessionClient, PaymentSessionClient,
            models::ShippingPolicy,
        },
        orders::{OrderRepository, OrdersService, RestOrderRepository},
        payments::PaymentConfirmation,
        profiles::{ProfileRepository, ProfilesService, RestProfileRepository},
    },
    records::{RecordStoreClient, RecordStoreConfig},
};

/// Remote endpoints the signed-in storefront talks to.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    pub record_store: RecordStoreConfig,
    /// Full URL of the payment session endpoint.
    pub checkout_url: String,
    /// Where the payment UI returns to after an external redirect.
    pub return_url: String,
    pub shipping: ShippingPolicy,
}

/// Services behind the signed-in storefront.
#[derive(Clone)]
pub struct Storefront {
    pub auth: Arc<dyn AuthService>,
    pub orders: Arc<dyn OrderRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub payments: Arc<dyn PaymentSessionClient>,
    pub shipping: ShippingPolicy,
    pub return_url: String,
}

impl Storefront {
    /// Build HTTP-backed services from `config`.
    #[must_use]
    pub fn from_config(config: StorefrontConfig) -> Self {
        let records = RecordStoreClient::new(config.record_store.clone());

        Self {
            auth: Arc::new(GoTrueAuthService::new(config.record_store)),
            orders: Arc::new(RestOrderRepository::new(records.clone())),
            profiles: Arc::new(RestProfileRepository::new(records)),
            payments: Arc::new(HttpPaymentSessionClient::new(config.checkout_url)),
            shipping: config.shipping,
            return_url: config.return_url,
        }
    }

    /// Checkout over the remote profiles, orders and payment endpoint.
    #[must_use]
    pub fn checkout(&self) -> CheckoutService {
        CheckoutService::new(
            Arc::clone(&self.profiles),
            Arc::clone(&self.orders),
            Arc::clone(&self.payments),
            self.shipping,
        )
    }

    #[must_use]
    pub fn orders_service(&self) -> OrdersService {
        OrdersService::new(Arc::clone(&self.orders))
    }

    #[must_use]
    pub fn profiles_service(&self) -> ProfilesService {
        ProfilesService::new(Arc::clone(&self.profiles))
    }

    /// Payment confirmation that marks orders paid.
    #[must_use]
    pub fn confirmation(&self) -> PaymentConfirmation {
        PaymentConfirmation::new(Arc::clone(&self.orders), self.return_url.clone())
    }
}
