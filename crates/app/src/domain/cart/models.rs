//! Cart Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{catalog::models::Product, orders::models::OrderLine};

/// One product line in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Price of the line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

impl From<&CartItem> for OrderLine {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product.id,
            title: item.product.title.clone(),
            price: item.product.price,
            quantity: item.quantity,
            image: item.product.image.clone(),
        }
    }
}

/// Persisted cart state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct CartState {
    pub(crate) items: Vec<CartItem>,
}

/// Envelope written to storage, versioned so the layout can evolve.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct PersistedCart {
    pub(crate) state: CartState,
    #[serde(default)]
    pub(crate) version: u32,
}
