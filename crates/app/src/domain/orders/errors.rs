//! Orders errors.

use thiserror::Error;

use crate::{domain::orders::models::OrderId, records::RecordStoreError};

/// Failures reading or changing orders.
#[derive(Debug, Error)]
pub enum OrdersError {
    #[error("order {0} not found")]
    NotFound(OrderId),

    #[error("{0}")]
    Validation(String),

    #[error("record store did not return the written order")]
    MissingRepresentation,

    #[error("order storage error")]
    RecordStore(#[from] RecordStoreError),
}
