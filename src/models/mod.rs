//! Product data models
//!
//! This module contains the product record decoded from the remote API and the
//! view-ready projection derived from it.

pub mod remote_product;
pub mod display_product;

// Re-export main types
pub use remote_product::RemoteProduct;
pub use display_product::{DisplayProduct, ImageSource};
