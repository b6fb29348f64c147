//! Product screen state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, watch};
use tracing::{info, warn};

use super::{LoadState, Screen, TimerState};
use crate::models::DisplayProduct;

/// Everything a front end needs to draw the screen at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenSnapshot {
    pub screen: Screen,
    pub state: LoadState,
    pub timer: TimerState,
    pub timer_text: String,
}

/// Shared state of the product screen plus change notification channels
#[derive(Debug)]
pub struct ScreenStore {
    /// Data-loading phase
    pub load_state: Arc<Mutex<LoadState>>,
    /// Offer countdown
    pub timer_state: Arc<Mutex<TimerState>>,
    pub screen: Arc<Mutex<Screen>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Channel for load state transitions
    pub state_change_tx: broadcast::Sender<LoadState>,
    /// Channel for timer updates
    pub timer_update_tx: watch::Sender<TimerState>,
    /// Keep the receiver alive to prevent channel closure
    pub _timer_update_rx: watch::Receiver<TimerState>,
}

impl ScreenStore {
    /// Create a store showing the splash with the product still loading
    pub fn new(port: u16, host: String) -> Self {
        let (state_change_tx, _) = broadcast::channel(16);
        let (timer_update_tx, timer_update_rx) = watch::channel(TimerState::new());

        Self {
            load_state: Arc::new(Mutex::new(LoadState::Loading)),
            timer_state: Arc::new(Mutex::new(TimerState::new())),
            screen: Arc::new(Mutex::new(Screen::Splash)),
            start_time: Instant::now(),
            port,
            host,
            state_change_tx,
            timer_update_tx,
            _timer_update_rx: timer_update_rx,
        }
    }

    /// Leave `Loading` for a terminal state and notify subscribers
    fn settle(&self, next: LoadState) -> Result<LoadState, String> {
        let mut state = self.load_state.lock()
            .map_err(|e| format!("Failed to lock load state: {}", e))?;

        if state.is_settled() {
            return Err(format!(
                "Cannot move load state from {} to {}",
                state.name(),
                next.name()
            ));
        }

        *state = next.clone();
        drop(state);

        if let Err(e) = self.state_change_tx.send(next.clone()) {
            // No subscribers yet
            warn!("Failed to send load state notification: {}", e);
        }

        Ok(next)
    }

    /// Record a successfully loaded product
    pub fn set_loaded(&self, product: DisplayProduct) -> Result<LoadState, String> {
        info!("Product loaded: {}", product.name);
        self.settle(LoadState::Loaded(product))
    }

    /// Record a load failure with its user-facing message
    pub fn set_failed(&self, message: String) -> Result<LoadState, String> {
        warn!("Product load failed: {}", message);
        self.settle(LoadState::Failed(message))
    }

    /// Subscribe to load state transitions
    pub fn subscribe(&self) -> broadcast::Receiver<LoadState> {
        self.state_change_tx.subscribe()
    }

    /// Watch countdown updates
    pub fn watch_timer(&self) -> watch::Receiver<TimerState> {
        self.timer_update_tx.subscribe()
    }

    pub fn get_load_state(&self) -> Result<LoadState, String> {
        self.load_state.lock()
            .map(|state| state.clone())
            .map_err(|e| format!("Failed to lock load state: {}", e))
    }

    pub fn get_timer_state(&self) -> Result<TimerState, String> {
        self.timer_state.lock()
            .map(|state| *state)
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }

    /// Update timer state
    pub fn update_timer_state(&self, active: bool, remaining_seconds: u64) -> Result<(), String> {
        let mut timer_state = self.timer_state.lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;

        timer_state.active = active;
        timer_state.remaining_seconds = remaining_seconds;
        let new_timer_state = *timer_state;
        drop(timer_state);

        // Notify timer state watchers
        if let Err(e) = self.timer_update_tx.send(new_timer_state) {
            warn!("Failed to send timer update: {}", e);
        }

        Ok(())
    }

    pub fn get_screen(&self) -> Result<Screen, String> {
        self.screen.lock()
            .map(|screen| *screen)
            .map_err(|e| format!("Failed to lock screen: {}", e))
    }

    /// Navigate from the splash to the product screen
    pub fn show_product_screen(&self) -> Result<(), String> {
        let mut screen = self.screen.lock()
            .map_err(|e| format!("Failed to lock screen: {}", e))?;

        if *screen != Screen::Product {
            *screen = Screen::Product;
            info!("Showing product screen");
        }
        Ok(())
    }

    /// Capture the current screen, load state and countdown together
    pub fn snapshot(&self) -> Result<ScreenSnapshot, String> {
        let screen = self.get_screen()?;
        let state = self.get_load_state()?;
        let timer = self.get_timer_state()?;

        Ok(ScreenSnapshot {
            screen,
            state,
            timer,
            timer_text: timer.banner(),
        })
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
