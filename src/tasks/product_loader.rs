//! Product loading task

use std::sync::Arc;
use tracing::{debug, error, info};

use super::{CountdownHandle, CountdownTimer};
use crate::{
    client::ProductSource,
    models::{DisplayProduct, ImageSource},
    state::ScreenStore,
};

/// Presentation choices applied to the fetched product
#[derive(Debug, Clone, Copy)]
pub struct LoaderOptions {
    pub images: ImageSource,
    pub offer_duration_seconds: u64,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            images: ImageSource::Stock,
            offer_duration_seconds: crate::models::display_product::OFFER_DURATION_SECONDS,
        }
    }
}

/// Fetch the product once and settle the load state.
///
/// On success the offer countdown is started and its handle returned. A failed
/// fetch is terminal: the state becomes `Failed` and no countdown runs.
pub async fn product_loader_task(
    state: Arc<ScreenStore>,
    source: Arc<dyn ProductSource>,
    options: LoaderOptions,
) -> Option<CountdownHandle> {
    info!("Starting product fetch");

    let product = match source.fetch_product().await {
        Ok(product) => product,
        Err(e) => {
            if let Err(e) = state.set_failed(format!("Failed to load product: {}", e)) {
                error!("Failed to record load failure: {}", e);
            }
            return None;
        }
    };

    debug!("Raw images: {:?}, thumbnail: {}", product.images, product.thumbnail);

    let display_product = DisplayProduct::from_remote(&product, options.images)
        .with_offer_duration(options.offer_duration_seconds);
    debug!("Additional images: {:?}", display_product.additional_images);

    let seed = display_product.offer_duration_seconds;
    if let Err(e) = state.set_loaded(display_product) {
        error!("Failed to record loaded product: {}", e);
        return None;
    }

    Some(CountdownTimer::start(state, seed))
}
