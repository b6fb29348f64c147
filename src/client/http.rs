//! HTTP product client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use super::{FetchError, ProductSource};
use crate::models::RemoteProduct;

/// Demo product endpoint
pub const DEFAULT_ENDPOINT: &str = "https://dummyjson.com/products/2";

/// Fetches the product with a single GET to a fixed endpoint
#[derive(Debug, Clone)]
pub struct HttpProductClient {
    client: Client,
    endpoint: String,
}

impl HttpProductClient {
    /// Build a client for `endpoint` with a per-request timeout
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!("product-offer/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ProductSource for HttpProductClient {
    async fn fetch_product(&self) -> Result<RemoteProduct, FetchError> {
        info!("Fetching product from {}", self.endpoint);

        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        debug!("Product response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let product: RemoteProduct = response.json().await?;
        debug!("Product response body: {:?}", product);

        Ok(product)
    }
}
