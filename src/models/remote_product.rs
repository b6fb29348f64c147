//! Product record as returned by the remote API

use serde::{Deserialize, Serialize};

/// Product fields read from the API response. Other fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteProduct {
    pub title: String,
    pub price: f64,
    pub description: String,
    /// Primary image URL
    pub thumbnail: String,
    /// Gallery image URLs, in API order
    pub images: Vec<String>,
}
