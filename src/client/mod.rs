//! Remote product fetch module
//!
//! This module contains the product source abstraction and its HTTP implementation.

pub mod error;
pub mod http;

use async_trait::async_trait;

use crate::models::RemoteProduct;

// Re-export main types
pub use error::FetchError;
pub use http::{HttpProductClient, DEFAULT_ENDPOINT};

/// Anything that can produce the product shown on screen
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_product(&self) -> Result<RemoteProduct, FetchError>;
}
