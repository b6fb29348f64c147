//! Offer countdown background task

use std::{sync::Arc, time::Duration};
use tokio::{sync::oneshot, task::JoinHandle};
use tracing::{debug, error, info};

use crate::state::ScreenStore;

/// Handle to a running countdown. Dropping it stops the countdown.
#[derive(Debug)]
pub struct CountdownHandle {
    cancel_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl CountdownHandle {
    /// Stop the countdown, leaving the remaining seconds where they are
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            // Already finished if the receiver is gone
            let _ = tx.send(());
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the countdown to reach zero or be cancelled
    pub async fn wait(mut self) {
        let _keep_alive = self.cancel_tx.take();
        if let Err(e) = (&mut self.task).await {
            error!("Countdown task failed: {}", e);
        }
    }
}

/// Repeating one-second countdown that writes into the screen store
pub struct CountdownTimer;

impl CountdownTimer {
    /// Publish `seed` immediately, then one second less on every tick until zero
    pub fn start(state: Arc<ScreenStore>, seed: u64) -> CountdownHandle {
        let (cancel_tx, cancel_rx) = oneshot::channel();
        let task = tokio::spawn(countdown_task(state, seed, cancel_rx));

        CountdownHandle {
            cancel_tx: Some(cancel_tx),
            task,
        }
    }
}

fn publish(state: &ScreenStore, remaining: u64) {
    if let Err(e) = state.update_timer_state(remaining > 0, remaining) {
        error!("Failed to update timer state: {}", e);
    }
}

async fn countdown_task(state: Arc<ScreenStore>, seed: u64, mut cancel_rx: oneshot::Receiver<()>) {
    info!("Starting offer countdown from {} seconds", seed);

    let mut remaining = seed;
    let mut interval = tokio::time::interval(Duration::from_secs(1));
    // The first tick completes immediately
    interval.tick().await;
    publish(&state, remaining);

    while remaining > 0 {
        tokio::select! {
            _ = interval.tick() => {
                remaining -= 1;
                debug!("Timer ticking: {} seconds left", remaining);
                publish(&state, remaining);
            }

            // Explicit cancel or the handle was dropped
            _ = &mut cancel_rx => {
                info!("Offer countdown cancelled with {} seconds left", remaining);
                if let Err(e) = state.update_timer_state(false, remaining) {
                    error!("Failed to update timer state: {}", e);
                }
                return;
            }
        }
    }

    info!("Offer countdown finished");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{sleep, Instant};

    fn store() -> Arc<ScreenStore> {
        Arc::new(ScreenStore::new(0, "127.0.0.1".to_string()))
    }

    #[tokio::test(start_paused = true)]
    async fn decrements_once_per_second_then_stops() {
        let state = store();
        let mut rx = state.watch_timer();
        let start = Instant::now();
        let handle = CountdownTimer::start(Arc::clone(&state), 3);

        let mut seen = Vec::new();
        loop {
            rx.changed().await.unwrap();
            let timer = *rx.borrow();
            seen.push((timer.remaining_seconds, start.elapsed().as_secs()));
            if !timer.active {
                break;
            }
        }

        assert_eq!(seen, vec![(3, 0), (2, 1), (1, 2), (0, 3)]);
        handle.wait().await;

        sleep(Duration::from_secs(10)).await;
        let timer = state.get_timer_state().unwrap();
        assert_eq!(timer.remaining_seconds, 0);
        assert!(!timer.active);
    }

    #[tokio::test(start_paused = true)]
    async fn seed_is_shown_at_tick_zero() {
        let state = store();
        let mut rx = state.watch_timer();
        let _handle = CountdownTimer::start(Arc::clone(&state), 9247);

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().clock(), "02:34:07");

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().clock(), "02:34:06");
    }

    #[tokio::test(start_paused = true)]
    async fn zero_seed_finishes_immediately() {
        let state = store();
        let handle = CountdownTimer::start(Arc::clone(&state), 0);
        handle.wait().await;

        assert_eq!(state.get_timer_state().unwrap().remaining_seconds, 0);
        assert!(!state.get_timer_state().unwrap().active);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_freezes_remaining_time() {
        let state = store();
        let mut handle = CountdownTimer::start(Arc::clone(&state), 100);

        sleep(Duration::from_millis(2500)).await;
        handle.cancel();
        sleep(Duration::from_secs(10)).await;

        let timer = state.get_timer_state().unwrap();
        assert!(!timer.active);
        assert_eq!(timer.remaining_seconds, 98);
        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_handle_stops_countdown() {
        let state = store();
        let handle = CountdownTimer::start(Arc::clone(&state), 100);

        sleep(Duration::from_millis(1500)).await;
        drop(handle);
        sleep(Duration::from_secs(10)).await;

        let timer = state.get_timer_state().unwrap();
        assert!(!timer.active);
        assert_eq!(timer.remaining_seconds, 99);
    }
}
