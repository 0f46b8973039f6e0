//! PostgREST client.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    auth::models::AccessToken,
    records::{
        errors::RecordStoreError,
        filter::{Filter, Ordering},
    },
};

const RETURN_REPRESENTATION: &str = "return=representation";
const MERGE_DUPLICATES: &str = "resolution=merge-duplicates,return=representation";

/// Connection settings shared by the record store and its auth service.
#[derive(Debug, Clone)]
pub struct RecordStoreConfig {
    /// Project URL, e.g. `"https://abcd.supabase.co"`.
    pub url: String,

    /// Public anonymous key sent as `apikey` on every request.
    pub anon_key: String,
}

/// HTTP client for table-like record collections.
#[derive(Debug, Clone)]
pub struct RecordStoreClient {
    config: RecordStoreConfig,
    http: Client,
}

impl RecordStoreClient {
    #[must_use]
    pub fn new(config: RecordStoreConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Select `columns` from `table` where every filter matches.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn select<T: DeserializeOwned>(
        &self,
        token: &AccessToken,
        table: &str,
        columns: &str,
        filters: &[Filter],
        ordering: Option<Ordering>,
    ) -> Result<Vec<T>, RecordStoreError> {
        let mut request = self
            .request(Method::GET, token, table, filters)
            .query(&[("select", columns)]);

        if let Some(ordering) = ordering {
            request = request.query(&[("order", ordering.as_query_value())]);
        }

        read_rows(request.send().await?).await
    }

    /// Insert `row` into `table`, returning the stored rows.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn insert<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        token: &AccessToken,
        table: &str,
        row: &B,
    ) -> Result<Vec<T>, RecordStoreError> {
        let response = self
            .request(Method::POST, token, table, &[])
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&[row])
            .send()
            .await?;

        read_rows(response).await
    }

    /// Insert `row` into `table`, or merge it into the row with the same
    /// primary key, returning the stored rows.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn upsert<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        token: &AccessToken,
        table: &str,
        row: &B,
    ) -> Result<Vec<T>, RecordStoreError> {
        let response = self
            .request(Method::POST, token, table, &[])
            .header("Prefer", MERGE_DUPLICATES)
            .json(&[row])
            .send()
            .await?;

        read_rows(response).await
    }

    /// Apply `changes` to every row of `table` matching `filters`, returning the
    /// updated rows.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn update<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        token: &AccessToken,
        table: &str,
        filters: &[Filter],
        changes: &B,
    ) -> Result<Vec<T>, RecordStoreError> {
        let response = self
            .request(Method::PATCH, token, table, filters)
            .header("Prefer", RETURN_REPRESENTATION)
            .json(changes)
            .send()
            .await?;

        read_rows(response).await
    }

    /// Delete every row of `table` matching `filters`, returning how many rows
    /// were removed.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn delete(
        &self,
        token: &AccessToken,
        table: &str,
        filters: &[Filter],
    ) -> Result<usize, RecordStoreError> {
        let response = self
            .request(Method::DELETE, token, table, filters)
            .header("Prefer", RETURN_REPRESENTATION)
            .send()
            .await?;

        let rows: Vec<serde_json::Value> = read_rows(response).await?;

        Ok(rows.len())
    }

    fn request(
        &self,
        method: Method,
        token: &AccessToken,
        table: &str,
        filters: &[Filter],
    ) -> RequestBuilder {
        let url = format!(
            "{}/rest/v1/{table}",
            self.config.url.trim_end_matches('/')
        );

        let pairs: Vec<(&str, &str)> = filters.iter().map(Filter::as_query_pair).collect();

        self.http
            .request(method, url)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(token.expose())
            .query(&pairs)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    code: Option<String>,
}

async fn read_rows<T: DeserializeOwned>(response: Response) -> Result<Vec<T>, RecordStoreError> {
    let status = response.status();

    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();

        let message = match serde_json::from_str::<ErrorBody>(&text) {
            Ok(ErrorBody {
                message: Some(message),
                code,
            }) => code.map_or_else(|| message.clone(), |code| format!("{code}: {message}")),
            Ok(_) | Err(_) => text,
        };

        return Err(RecordStoreError::Rejected { status, message });
    }

    Ok(response.json().await?)
}
