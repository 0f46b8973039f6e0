//! Catalog service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::catalog::{
    errors::CatalogError,
    models::{Product, ProductId},
};

/// Default public catalog API.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com";

/// HTTP client for the public product API.
#[derive(Debug, Clone)]
pub struct HttpCatalogService {
    base_url: String,
    http: Client,
}

impl HttpCatalogService {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, CatalogError> {
        let url = format!("{}{path}", self.base_url);

        debug!(%url, "fetching catalog resource");

        let response = self.http.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(CatalogError::UnexpectedResponse(format!(
                "GET {path} failed with status {status}: {text}"
            )));
        }

        // The public API answers unknown ids with `200` and an empty body.
        let body = response.bytes().await?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        serde_json::from_slice(&body)
            .map(Some)
            .map_err(|error| CatalogError::UnexpectedResponse(format!("GET {path}: {error}")))
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, CatalogError> {
        Ok(self.get_json(path).await?.unwrap_or_default())
    }
}

impl Default for HttpCatalogService {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_URL)
    }
}

#[async_trait]
impl CatalogService for HttpCatalogService {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.get_list("/products").await
    }

    async fn list_categories(&self) -> Result<Vec<String>, CatalogError> {
        self.get_list("/products/categories").await
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.get_json(&format!("/products/{id}"))
            .await?
            .ok_or(CatalogError::NotFound(id))
    }

    async fn products_in_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        let segment: String = category
            .bytes()
            .map(|byte| match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                    char::from(byte).to_string()
                }
                other => format!("%{other:02X}"),
            })
            .collect();

        self.get_list(&format!("/products/category/{segment}")).await
    }
}

/// Read-only product catalog.
#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Retrieve every product.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Retrieve the category names.
    async fn list_categories(&self) -> Result<Vec<String>, CatalogError>;

    /// Retrieve a single product.
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError>;

    /// Retrieve the products of one category.
    async fn products_in_category(&self, category: &str) -> Result<Vec<Product>, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let service = HttpCatalogService::new("https://catalog.test/");

        assert_eq!(service.base_url, "https://catalog.test");
    }
}
