//! Background tasks module
//!
//! This module contains the tasks that drive the product screen: the splash
//! delay, the one-shot product fetch and the offer countdown.

pub mod countdown_timer;
pub mod product_loader;
pub mod splash;

// Re-export main types and functions
pub use countdown_timer::{CountdownHandle, CountdownTimer};
pub use product_loader::{product_loader_task, LoaderOptions};
pub use splash::splash_task;
