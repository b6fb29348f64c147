//! State management module
//!
//! This module contains the product screen state and its change notification logic.

pub mod load_state;
pub mod screen_store;
pub mod timer_state;

// Re-export main types
pub use load_state::{LoadState, Screen};
pub use screen_store::{ScreenSnapshot, ScreenStore};
pub use timer_state::{format_hms, TimerState};
