//! Payment Models

use serde::{Deserialize, Serialize};

use crate::domain::payments::amount::PaymentAmount;

/// Currency every payment intent is created in.
pub const PAYMENT_CURRENCY: &str = "eur";

/// Merchant name shown on the payment sheet.
pub const MERCHANT_DISPLAY_NAME: &str = "ShopNGo";

/// What the client needs to present a payment sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSession {
    /// Client secret of the payment intent.
    pub payment_intent: String,

    /// Ephemeral key secret scoped to `customer`.
    pub ephemeral_key: String,

    /// Processor customer id.
    pub customer: String,
}

/// A processor customer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Customer {
    pub id: String,
}

/// A short-lived key letting the client act for one customer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EphemeralKey {
    pub secret: String,
}

/// A created or confirmed payment intent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    #[serde(default)]
    pub client_secret: Option<String>,
    pub status: String,
}

/// Parameters of a new payment intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPaymentIntent {
    pub amount: PaymentAmount,
    pub currency: &'static str,
    pub customer: String,
    pub description: String,
    pub receipt_email: Option<String>,
    pub metadata_email: String,
}

impl NewPaymentIntent {
    /// Intent for an order placed by `email`, paid by `customer`.
    #[must_use]
    pub fn for_order(amount: PaymentAmount, customer: String, email: &str) -> Self {
        Self {
            amount,
            currency: PAYMENT_CURRENCY,
            customer,
            description: format!("Order from {email}"),
            receipt_email: (!email.is_empty()).then(|| email.to_string()),
            metadata_email: email.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn order_intent_tags_email() -> TestResult {
        let intent = NewPaymentIntent::for_order(
            PaymentAmount::from_major(dec!(49.99))?,
            "cus_123".to_string(),
            "ada@example.com",
        );

        assert_eq!(intent.amount.minor_units(), 4999);
        assert_eq!(intent.currency, "eur");
        assert_eq!(intent.description, "Order from ada@example.com");
        assert_eq!(intent.receipt_email.as_deref(), Some("ada@example.com"));
        assert_eq!(intent.metadata_email, "ada@example.com");

        Ok(())
    }

    #[test]
    fn missing_email_skips_receipt() -> TestResult {
        let intent = NewPaymentIntent::for_order(
            PaymentAmount::from_major(dec!(10))?,
            "cus_123".to_string(),
            "",
        );

        assert_eq!(intent.receipt_email, None);
        assert_eq!(intent.metadata_email, "");

        Ok(())
    }
}
