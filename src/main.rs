//! Product Offer - A headless product detail service
//!
//! This is the main entry point for the product-offer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

use product_offer::{
    config::Config,
    client::{HttpProductClient, ProductSource},
    state::ScreenStore,
    api::create_router,
    tasks::{product_loader_task, splash_task, LoaderOptions},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("product_offer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting product-offer server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, endpoint={}, images={:?}",
          config.host, config.port, config.endpoint, config.images);

    let state = Arc::new(ScreenStore::new(config.port, config.host.clone()));
    let source: Arc<dyn ProductSource> =
        Arc::new(HttpProductClient::new(config.endpoint.clone(), config.request_timeout())?);
    let options = LoaderOptions {
        images: config.images,
        offer_duration_seconds: config.offer_seconds,
    };

    // Splash first, then the product screen activates and fetches
    let screen_state = Arc::clone(&state);
    let splash_duration = config.splash_duration();
    let screen_task = tokio::spawn(async move {
        splash_task(Arc::clone(&screen_state), splash_duration).await;
        product_loader_task(screen_state, source, options).await
    });

    let app = create_router(state);

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /product - Screen snapshot with product and countdown");
    info!("  GET  /status  - Load phase and timer summary");
    info!("  GET  /health  - Health check");

    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    // Tear down the screen: drop a pending fetch, stop a running countdown
    screen_task.abort();
    match screen_task.await {
        Ok(Some(mut countdown)) => countdown.cancel(),
        Ok(None) => {}
        Err(e) if e.is_cancelled() => info!("Pending product fetch discarded"),
        Err(e) => error!("Screen task failed: {}", e),
    }

    info!("Server shutdown complete");
    Ok(())
}
