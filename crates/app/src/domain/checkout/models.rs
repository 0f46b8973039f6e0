//! Checkout Models

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{orders::models::OrderId, payments::models::PaymentSession};

/// Flat-rate shipping, waived above a subtotal threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingPolicy {
    /// Subtotals strictly above this ship for free.
    pub free_threshold: Decimal,
    pub flat_rate: Decimal,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            free_threshold: Decimal::ONE_HUNDRED,
            flat_rate: Decimal::new(599, 2),
        }
    }
}

impl ShippingPolicy {
    #[must_use]
    pub fn shipping_for(&self, subtotal: Decimal) -> Decimal {
        if subtotal > self.free_threshold {
            Decimal::ZERO
        } else {
            self.flat_rate
        }
    }

    #[must_use]
    pub fn totals(&self, subtotal: Decimal) -> CheckoutTotals {
        let shipping = self.shipping_for(subtotal);

        CheckoutTotals {
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }
}

/// Subtotal, shipping and the total charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutTotals {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
}

/// Body of a payment session request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentSessionRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub email: String,
}

/// A pending order with a payment session ready to be confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedOrder {
    pub order_id: OrderId,
    pub total: Decimal,
    pub payment: PaymentSession,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn flat_rate_applies_up_to_threshold() {
        let policy = ShippingPolicy::default();

        assert_eq!(policy.shipping_for(dec!(42.50)), dec!(5.99));
        assert_eq!(policy.shipping_for(dec!(100)), dec!(5.99));
    }

    #[test]
    fn shipping_is_free_above_threshold() {
        let policy = ShippingPolicy::default();

        assert_eq!(policy.shipping_for(dec!(100.01)), Decimal::ZERO);
        assert_eq!(
            policy.totals(dec!(109.95)),
            CheckoutTotals {
                subtotal: dec!(109.95),
                shipping: Decimal::ZERO,
                total: dec!(109.95),
            }
        );
    }

    #[test]
    fn total_includes_shipping() {
        assert_eq!(ShippingPolicy::default().totals(dec!(44)).total, dec!(49.99));
    }
}
