//! HTTP API module
//!
//! This module exposes the product screen state as JSON.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::ScreenStore;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<ScreenStore>) -> Router {
    Router::new()
        .route("/product", get(product_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
