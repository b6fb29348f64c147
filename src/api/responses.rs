//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::Screen;

/// Compact status of the screen and the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub screen: Screen,
    pub phase: String,
    pub error: Option<String>,
    pub timer_active: bool,
    pub timer_remaining_seconds: u64,
    pub timer_clock: String,
    pub uptime: String,
    pub port: u16,
    pub host: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
