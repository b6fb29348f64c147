//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::error;

use crate::state::{ScreenSnapshot, ScreenStore};
use super::responses::{HealthResponse, StatusResponse};

/// Handle GET /product - Return everything needed to render the screen
pub async fn product_handler(State(state): State<Arc<ScreenStore>>) -> Result<Json<ScreenSnapshot>, StatusCode> {
    state.snapshot().map(Json).map_err(|e| {
        error!("Failed to snapshot screen state: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// Handle GET /status - Return load phase and countdown summary
pub async fn status_handler(State(state): State<Arc<ScreenStore>>) -> Result<Json<StatusResponse>, StatusCode> {
    let snapshot = match state.snapshot() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to snapshot screen state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    Ok(Json(StatusResponse {
        screen: snapshot.screen,
        phase: snapshot.state.name().to_string(),
        error: snapshot.state.error_message().map(str::to_string),
        timer_active: snapshot.timer.active,
        timer_remaining_seconds: snapshot.timer.remaining_seconds,
        timer_clock: snapshot.timer.clock(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

#[cfg(test)]
mod tests {
    use super::super::create_router;
    use crate::{
        models::{DisplayProduct, ImageSource, RemoteProduct},
        state::ScreenStore,
    };
    use axum::{body::Body, http::{Request, StatusCode}};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn get_json(state: Arc<ScreenStore>, uri: &str) -> (StatusCode, Value) {
        let response = create_router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn store() -> Arc<ScreenStore> {
        Arc::new(ScreenStore::new(20554, "127.0.0.1".to_string()))
    }

    #[tokio::test]
    async fn product_reports_loading_initially() {
        let (status, body) = get_json(store(), "/product").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["screen"], "splash");
        assert_eq!(body["state"]["phase"], "loading");
        assert_eq!(body["timer_text"], "EXPIRES IN 00:00:00");
    }

    #[tokio::test]
    async fn product_includes_loaded_display() {
        let state = store();
        let remote = RemoteProduct {
            title: "Speaker".to_string(),
            price: 45.99,
            description: "Loud".to_string(),
            thumbnail: "t.png".to_string(),
            images: vec![],
        };
        state.set_loaded(DisplayProduct::from_remote(&remote, ImageSource::Stock)).unwrap();
        state.update_timer_state(true, 9247).unwrap();

        let (_, body) = get_json(state, "/product").await;
        assert_eq!(body["state"]["phase"], "loaded");
        assert_eq!(body["state"]["detail"]["discounted_price"], 45);
        assert_eq!(body["state"]["detail"]["original_price"], 1299);
        assert_eq!(body["timer_text"], "EXPIRES IN 02:34:07");
    }

    #[tokio::test]
    async fn status_surfaces_failure_message() {
        let state = store();
        state.set_failed("Failed to load product: offline".to_string()).unwrap();

        let (status, body) = get_json(state, "/status").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["phase"], "failed");
        assert_eq!(body["error"], "Failed to load product: offline");
        assert_eq!(body["timer_active"], false);
        assert_eq!(body["port"], 20554);
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (status, body) = get_json(store(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}
