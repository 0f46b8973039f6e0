//! Catalog errors.

use thiserror::Error;

use crate::domain::catalog::models::ProductId;

/// Failures reading the product API.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product {0} not found")]
    NotFound(ProductId),

    #[error("catalog request failed")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response from catalog: {0}")]
    UnexpectedResponse(String),
}
