//! Orders service.

use std::sync::Arc;

use tracing::{error, info};

use crate::{
    auth::Session,
    domain::orders::{
        errors::OrdersError,
        models::{Order, OrderId},
        repository::OrderRepository,
    },
};

/// Order history of the signed-in user.
#[derive(Clone)]
pub struct OrdersService {
    repository: Arc<dyn OrderRepository>,
}

impl OrdersService {
    #[must_use]
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    /// The user's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error when the record store cannot be queried.
    pub async fn list_orders(&self, session: &Session) -> Result<Vec<Order>, OrdersError> {
        self.repository
            .list_orders(&session.access_token, session.email())
            .await
            .inspect_err(|error| error!(%error, "failed to list orders"))
    }

    /// Find an order owned by the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`OrdersError::NotFound`] when the order does not exist or
    /// belongs to someone else.
    pub async fn owned_order(&self, session: &Session, id: OrderId) -> Result<Order, OrdersError> {
        self.repository
            .find_order(&session.access_token, id)
            .await?
            .filter(|order| order.user_email == session.email())
            .ok_or(OrdersError::NotFound(id))
    }

    /// Delete an order owned by the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`OrdersError::NotFound`] when the order does not exist or
    /// belongs to someone else.
    pub async fn delete_order(&self, session: &Session, id: OrderId) -> Result<(), OrdersError> {
        let result = async {
            let order = self.owned_order(session, id).await?;

            self.repository
                .delete_order(&session.access_token, order.id)
                .await
        }
        .await;

        match &result {
            Ok(()) => info!(order_id = %id, "order deleted"),
            Err(error) => error!(order_id = %id, %error, "failed to delete order"),
        }

        result
    }

    /// Change the delivery address of an order owned by the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`OrdersError::Validation`] for a blank address and
    /// [`OrdersError::NotFound`] when the order is not the user's.
    pub async fn update_delivery_address(
        &self,
        session: &Session,
        id: OrderId,
        address: &str,
    ) -> Result<Order, OrdersError> {
        let address = address.trim();

        if address.is_empty() {
            return Err(OrdersError::Validation(
                "delivery address cannot be empty".to_string(),
            ));
        }

        let order = self.owned_order(session, id).await?;

        let updated = self
            .repository
            .update_delivery_address(&session.access_token, order.id, address)
            .await
            .inspect_err(|error| error!(order_id = %id, %error, "failed to update address"))?;

        info!(order_id = %id, "delivery address updated");

        Ok(updated)
    }
}
