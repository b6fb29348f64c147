//! Configuration and CLI argument handling

use std::time::Duration;
use clap::Parser;

use crate::{client::DEFAULT_ENDPOINT, models::ImageSource};

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "product-offer")]
#[command(about = "A headless product detail service with a timed offer countdown")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Product endpoint to fetch
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Source of the additional gallery images
    #[arg(long, value_enum, default_value_t = ImageSource::Stock)]
    pub images: ImageSource,

    /// Offer countdown seed in seconds
    #[arg(long, default_value = "9247")]
    pub offer_seconds: u64,

    /// Splash duration in milliseconds (0 skips it)
    #[arg(long, default_value = "2000")]
    pub splash_ms: u64,

    /// Product request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn splash_duration(&self) -> Duration {
        Duration::from_millis(self.splash_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_setup() {
        let config = Config::try_parse_from(["product-offer"]).unwrap();
        assert_eq!(config.endpoint, "https://dummyjson.com/products/2");
        assert_eq!(config.images, ImageSource::Stock);
        assert_eq!(config.offer_seconds, 9247);
        assert_eq!(config.splash_duration(), Duration::from_millis(2000));
        assert_eq!(config.address(), "127.0.0.1:20554");
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn parses_overrides() {
        let config = Config::try_parse_from([
            "product-offer", "--images", "api", "--offer-seconds", "60", "--splash-ms", "0", "-v",
        ])
        .unwrap();
        assert_eq!(config.images, ImageSource::Api);
        assert_eq!(config.offer_seconds, 60);
        assert!(config.splash_duration().is_zero());
        assert_eq!(config.log_level(), "debug");
    }
}
