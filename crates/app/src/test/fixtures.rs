//! Test Fixtures

use jiff::Timestamp;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    auth::{AccessToken, AuthUser, RefreshToken, Session, UserUuid},
    domain::{
        catalog::models::{Product, ProductId, Rating},
        orders::models::{Order, OrderId, PaymentStatus},
        payments::models::PaymentSession,
    },
};

pub(crate) fn product(id: u64, title: &str, price: Decimal) -> Product {
    Product {
        id: ProductId(id),
        title: title.to_string(),
        price,
        category: "men's clothing".to_string(),
        image: format!("https://fakestoreapi.com/img/{id}.jpg"),
        description: String::new(),
        rating: Rating::default(),
    }
}

pub(crate) fn session(email: &str) -> Session {
    Session {
        access_token: AccessToken::new(format!("token-for-{email}")),
        refresh_token: RefreshToken::new("refresh"),
        expires_at: None,
        user: AuthUser {
            id: UserUuid::from_uuid(Uuid::now_v7()),
            email: email.to_string(),
        },
    }
}

/// A pending order with no lines.
pub(crate) fn order(id: i64, email: &str) -> Order {
    Order {
        id: OrderId(id),
        user_email: email.to_string(),
        total_price: Decimal::new(4999, 2),
        items: Vec::new(),
        payment_status: PaymentStatus::Pending,
        delivery_address: None,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn payment_session() -> PaymentSession {
    PaymentSession {
        payment_intent: "pi_1_secret_abc".to_string(),
        ephemeral_key: "ek_test_1".to_string(),
        customer: "cus_1".to_string(),
    }
}
