//! Load state and screen navigation

use serde::{Deserialize, Serialize};

use crate::models::DisplayProduct;

/// Data-loading phase of the product screen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "detail", rename_all = "lowercase")]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(DisplayProduct),
    Failed(String),
}

impl LoadState {
    pub fn name(&self) -> &'static str {
        match self {
            LoadState::Loading => "loading",
            LoadState::Loaded(_) => "loaded",
            LoadState::Failed(_) => "failed",
        }
    }

    /// Loaded and Failed are terminal
    pub fn is_settled(&self) -> bool {
        !matches!(self, LoadState::Loading)
    }

    pub fn product(&self) -> Option<&DisplayProduct> {
        match self {
            LoadState::Loaded(product) => Some(product),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Which screen is showing. Navigation only goes from splash to product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Splash,
    Product,
}
