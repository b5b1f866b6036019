//! HTTP+JSON client for the remote product collection.
//!
//! Wraps the five remote operations (list, get-by-id, create, update,
//! delete) against a single fixed collection endpoint. Every operation
//! performs exactly one network round trip: no retries, no timeout
//! overrides, no caching, no auth headers, no idempotency keys.
//!
//! # API Reference
//!
//! - `GET {base}` - full product list
//! - `GET {base}/{id}` - single product
//! - `POST {base}` - create, backend assigns the id
//! - `PUT {base}/{id}` - update an existing product
//! - `DELETE {base}/{id}` - remove a product

mod products;

use std::sync::Arc;

use thiserror::Error;
use url::Url;

use shelf_core::{ProductId, ValidationError};

use crate::config::StoreConfig;

/// Errors that can occur when interacting with the product store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("Store error: {status} - {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, or a fallback message.
        message: String,
    },

    /// Product lookup failed. All non-2xx responses on the get-by-id
    /// path collapse to this kind; 404 is not distinguished from other
    /// failures.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// Response body could not be parsed as JSON.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Input was rejected by client-side validation before any network
    /// call was made.
    #[error("Invalid product: {0}")]
    Invalid(#[from] ValidationError),
}

/// Product store API client.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct ProductStoreClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl ProductStoreClient {
    /// Create a new store client for the configured collection endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                client,
                base_url: config.base_url.clone(),
            }),
        })
    }

    /// The collection endpoint this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// URL of the collection resource.
    fn collection_url(&self) -> String {
        self.inner.base_url.as_str().trim_end_matches('/').to_string()
    }

    /// URL of a single item resource.
    fn item_url(&self, id: ProductId) -> String {
        format!("{}/{id}", self.collection_url())
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.inner.client
    }

    /// Handle a response and parse the JSON body.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        let status = response.status();

        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| StoreError::Parse(format!("Failed to parse response: {e}")));
        }

        Err(Self::status_error(response).await)
    }

    /// Turn a non-success response into a [`StoreError::Status`].
    async fn status_error(response: reqwest::Response) -> StoreError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .ok()
            .filter(|body| !body.is_empty())
            .unwrap_or_else(|| "Unknown error".to_string());

        StoreError::Status { status, message }
    }
}

impl std::fmt::Debug for ProductStoreClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductStoreClient")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ProductStoreClient {
        ProductStoreClient::new(&StoreConfig::default()).unwrap()
    }

    #[test]
    fn test_item_url_shape() {
        let client = client();
        assert_eq!(
            client.item_url(ProductId::new(7)),
            "http://localhost:8080/products/7"
        );
    }

    #[test]
    fn test_trailing_slash_normalized() {
        let config = StoreConfig::new(Url::parse("http://localhost:8080/products/").unwrap());
        let client = ProductStoreClient::new(&config).unwrap();
        assert_eq!(
            client.item_url(ProductId::new(1)),
            "http://localhost:8080/products/1"
        );
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::NotFound(ProductId::new(999));
        assert_eq!(err.to_string(), "Product not found: 999");

        let err = StoreError::Status {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Store error: 500 - boom");
    }
}
