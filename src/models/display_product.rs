//! View-ready product projection and presentation constants

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::RemoteProduct;

/// List price shown struck through next to the API price
pub const ORIGINAL_PRICE: i64 = 1299;
/// Offer countdown seed in seconds (2h 34m 7s)
pub const OFFER_DURATION_SECONDS: u64 = 9247;
pub const RUNTIME: &str = "14 Hrs Runtime";
pub const TOTAL_PLAYBACK_TIME: &str = "100 Hours";
pub const FEATURES: [&str; 2] = ["Surround Sound", "USB Cable"];
pub const HIGHLIGHTS: [&str; 4] = [
    "Genuine Products",
    "Limited Time Deals",
    "Free Shipping",
    "Secure Payments",
];
pub const ACTIONS: [&str; 2] = ["ADD TO CART", "BUY NOW"];
pub const CURRENCY_SYMBOL: &str = "₹";

/// Maximum number of gallery images shown below the description
pub const MAX_ADDITIONAL_IMAGES: usize = 3;

pub const STOCK_IMAGES: [&str; 3] = [
    "https://images.pexels.com/photos/205923/pexels-photo-205923.jpeg?auto=compress&cs=tinysrgb&w=600",
    "https://images.pexels.com/photos/1327689/pexels-photo-1327689.jpeg?auto=compress&cs=tinysrgb&w=600",
    "https://images.pexels.com/photos/2639947/pexels-photo-2639947.jpeg?auto=compress&cs=tinysrgb&w=600",
];

/// Where the additional gallery images come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    /// Fixed stock photos
    #[default]
    Stock,
    /// Product images from the API, minus the thumbnail
    Api,
}

impl ImageSource {
    /// Pick the additional images for a fetched product
    pub fn select(&self, product: &RemoteProduct) -> Vec<String> {
        match self {
            ImageSource::Stock => STOCK_IMAGES.iter().map(|url| url.to_string()).collect(),
            ImageSource::Api => filter_additional_images(&product.images, &product.thumbnail),
        }
    }
}

/// Strip the query string and any trailing slashes from an image URL
pub fn normalize_image_url(url: &str) -> &str {
    let without_query = url.split('?').next().unwrap_or(url);
    without_query.trim_end_matches('/')
}

/// Drop images that point at the thumbnail and keep at most three
pub fn filter_additional_images(images: &[String], thumbnail: &str) -> Vec<String> {
    let thumbnail = normalize_image_url(thumbnail);
    images
        .iter()
        .filter(|url| normalize_image_url(url) != thumbnail)
        .take(MAX_ADDITIONAL_IMAGES)
        .cloned()
        .collect()
}

/// Product data ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayProduct {
    pub name: String,
    pub original_price: i64,
    pub discounted_price: i64,
    pub runtime: String,
    pub features: Vec<String>,
    pub total_playback_time: String,
    pub description: String,
    pub image_url: String,
    pub additional_images: Vec<String>,
    pub offer_duration_seconds: u64,
    pub highlights: Vec<String>,
    pub actions: Vec<String>,
}

impl DisplayProduct {
    /// Project a fetched product onto the presentation constants
    pub fn from_remote(product: &RemoteProduct, images: ImageSource) -> Self {
        Self {
            name: product.title.clone(),
            original_price: ORIGINAL_PRICE,
            discounted_price: product.price.trunc() as i64,
            runtime: RUNTIME.to_string(),
            features: FEATURES.iter().map(|f| f.to_string()).collect(),
            total_playback_time: TOTAL_PLAYBACK_TIME.to_string(),
            description: product.description.clone(),
            image_url: product.thumbnail.clone(),
            additional_images: images.select(product),
            offer_duration_seconds: OFFER_DURATION_SECONDS,
            highlights: HIGHLIGHTS.iter().map(|h| h.to_string()).collect(),
            actions: ACTIONS.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Override the countdown seed
    pub fn with_offer_duration(mut self, seconds: u64) -> Self {
        self.offer_duration_seconds = seconds;
        self
    }

    pub fn original_price_label(&self) -> String {
        format!("{}{}", CURRENCY_SYMBOL, self.original_price)
    }

    pub fn discounted_price_label(&self) -> String {
        format!("{}{}", CURRENCY_SYMBOL, self.discounted_price)
    }
}
