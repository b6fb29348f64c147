//! Product Offer - A headless product detail service
//!
//! This library fetches a product from a demo REST API, projects it into a
//! view-ready record and drives the timed offer countdown shown next to it.

pub mod config;
pub mod client;
pub mod models;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use client::{FetchError, HttpProductClient, ProductSource};
pub use models::{DisplayProduct, ImageSource, RemoteProduct};
pub use state::{LoadState, ScreenStore};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
