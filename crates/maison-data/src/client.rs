//! HTTP client for the remote product catalog.

use std::time::Duration;

use maison_commerce::catalog::{Product, ProductId};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::FetchError;

/// Default public catalog endpoint.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the catalog collaborator's three read endpoints.
///
/// `Clone` is cheap; the underlying connection pool is shared. A clone
/// can be moved into a spawned fetch task while the original stays with
/// the session.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl CatalogClient {
    /// Create a client against the default public catalog.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client with a base URL that is prepended to all requests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_options(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a base URL and a per-request timeout.
    pub fn with_options(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            timeout,
        }
    }

    /// `GET /products`: the full catalog, in server order.
    pub async fn products(&self) -> Result<Vec<Product>, FetchError> {
        self.get_json("/products").await
    }

    /// `GET /products/categories`: the category vocabulary, in server
    /// order, passed through verbatim.
    pub async fn categories(&self) -> Result<Vec<String>, FetchError> {
        self.get_json("/products/categories").await
    }

    /// `GET /products/{id}`: a single product record, same shape as the
    /// list endpoint.
    pub async fn product(&self, id: ProductId) -> Result<Product, FetchError> {
        self.get_json(&format!("/products/{id}")).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        debug!(%url, "catalog request");

        let response = self
            .http
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| FetchError::from_transport(e, &url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_transport(e, &url))?;
        serde_json::from_slice(&bytes).map_err(|e| FetchError::Deserialization(e.to_string()))
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}
