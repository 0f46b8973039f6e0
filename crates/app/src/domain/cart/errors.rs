//! Cart errors.

use thiserror::Error;

use crate::storage::StorageError;

/// Failures changing or persisting the cart.
#[derive(Debug, Error)]
pub enum CartError {
    #[error("quantity {0} is too large")]
    QuantityTooLarge(i64),

    #[error("failed to access cart storage")]
    Storage(#[from] StorageError),

    #[error("stored cart is corrupt")]
    Corrupt(#[source] serde_json::Error),

    #[error("failed to serialize cart")]
    Serialize(#[source] serde_json::Error),
}
