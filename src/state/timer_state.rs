//! Offer countdown state and formatting

use serde::{Deserialize, Serialize};

/// Render seconds as zero-padded `HH:MM:SS`
pub fn format_hms(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Timer state for tracking the offer countdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub active: bool,
    pub remaining_seconds: u64,
}

impl TimerState {
    /// Create a new inactive timer state
    pub fn new() -> Self {
        Self {
            active: false,
            remaining_seconds: 0,
        }
    }

    /// Create an active timer state with remaining seconds
    pub fn active(remaining_seconds: u64) -> Self {
        Self {
            active: true,
            remaining_seconds,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Remaining time as `HH:MM:SS`
    pub fn clock(&self) -> String {
        format_hms(self.remaining_seconds)
    }

    /// Banner text shown under the product image
    pub fn banner(&self) -> String {
        format!("EXPIRES IN {}", self.clock())
    }
}
