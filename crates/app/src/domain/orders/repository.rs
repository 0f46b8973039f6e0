//! Orders repository.

use async_trait::async_trait;
use mockall::automock;
use serde::Serialize;

use crate::{
    auth::AccessToken,
    domain::orders::{
        errors::OrdersError,
        models::{NewOrder, Order, OrderId, PaymentStatus},
    },
    records::{Filter, Ordering, RecordStoreClient},
};

const ORDERS_TABLE: &str = "orders";

const ORDER_COLUMNS: &str =
    "id,user_email,total_price,items,payment_status,delivery_address,created_at";

/// Typed access to the `orders` table.
#[derive(Debug, Clone)]
pub struct RestOrderRepository {
    client: RecordStoreClient,
}

impl RestOrderRepository {
    #[must_use]
    pub fn new(client: RecordStoreClient) -> Self {
        Self { client }
    }

    async fn update_one<B: Serialize + Sync>(
        &self,
        token: &AccessToken,
        id: OrderId,
        changes: &B,
    ) -> Result<Order, OrdersError> {
        let rows: Vec<Order> = self
            .client
            .update(token, ORDERS_TABLE, &[Filter::eq("id", id)], changes)
            .await?;

        rows.into_iter().next().ok_or(OrdersError::NotFound(id))
    }
}

#[derive(Serialize)]
struct PaymentStatusChange {
    payment_status: PaymentStatus,
}

#[derive(Serialize)]
struct DeliveryAddressChange<'a> {
    delivery_address: &'a str,
}

#[async_trait]
impl OrderRepository for RestOrderRepository {
    async fn insert_order(&self, token: &AccessToken, order: NewOrder) -> Result<Order, OrdersError> {
        let rows: Vec<Order> = self.client.insert(token, ORDERS_TABLE, &order).await?;

        rows.into_iter()
            .next()
            .ok_or(OrdersError::MissingRepresentation)
    }

    async fn list_orders(
        &self,
        token: &AccessToken,
        user_email: &str,
    ) -> Result<Vec<Order>, OrdersError> {
        Ok(self
            .client
            .select(
                token,
                ORDERS_TABLE,
                ORDER_COLUMNS,
                &[Filter::eq("user_email", user_email)],
                Some(Ordering::Descending("created_at")),
            )
            .await?)
    }

    async fn find_order(
        &self,
        token: &AccessToken,
        id: OrderId,
    ) -> Result<Option<Order>, OrdersError> {
        let rows: Vec<Order> = self
            .client
            .select(
                token,
                ORDERS_TABLE,
                ORDER_COLUMNS,
                &[Filter::eq("id", id)],
                None,
            )
            .await?;

        Ok(rows.into_iter().next())
    }

    async fn update_payment_status(
        &self,
        token: &AccessToken,
        id: OrderId,
        payment_status: PaymentStatus,
    ) -> Result<Order, OrdersError> {
        self.update_one(token, id, &PaymentStatusChange { payment_status })
            .await
    }

    async fn update_delivery_address(
        &self,
        token: &AccessToken,
        id: OrderId,
        delivery_address: &str,
    ) -> Result<Order, OrdersError> {
        self.update_one(token, id, &DeliveryAddressChange { delivery_address })
            .await
    }

    async fn delete_order(&self, token: &AccessToken, id: OrderId) -> Result<(), OrdersError> {
        let deleted = self
            .client
            .delete(token, ORDERS_TABLE, &[Filter::eq("id", id)])
            .await?;

        if deleted == 0 {
            return Err(OrdersError::NotFound(id));
        }

        Ok(())
    }
}

/// Persistence for orders.
#[automock]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn insert_order(&self, token: &AccessToken, order: NewOrder) -> Result<Order, OrdersError>;

    /// Orders placed by `user_email`, newest first.
    async fn list_orders(
        &self,
        token: &AccessToken,
        user_email: &str,
    ) -> Result<Vec<Order>, OrdersError>;

    async fn find_order(&self, token: &AccessToken, id: OrderId)
    -> Result<Option<Order>, OrdersError>;

    async fn update_payment_status(
        &self,
        token: &AccessToken,
        id: OrderId,
        payment_status: PaymentStatus,
    ) -> Result<Order, OrdersError>;

    async fn update_delivery_address(
        &self,
        token: &AccessToken,
        id: OrderId,
        delivery_address: &str,
    ) -> Result<Order, OrdersError>;

    async fn delete_order(&self, token: &AccessToken, id: OrderId) -> Result<(), OrdersError>;
}
