//! Splash screen sequencing

use std::{sync::Arc, time::Duration};
use tokio::time::sleep;
use tracing::{error, info};

use crate::state::ScreenStore;

/// Total time the splash stays up
pub const SPLASH_DURATION: Duration = Duration::from_millis(2000);
/// Trailing part of the splash spent fading out
pub const SPLASH_FADE_OUT: Duration = Duration::from_millis(1000);

/// Hold the splash for `duration`, then navigate to the product screen
pub async fn splash_task(state: Arc<ScreenStore>, duration: Duration) {
    if !duration.is_zero() {
        let fade = SPLASH_FADE_OUT.min(duration);
        info!("Showing splash for {:?}", duration);

        sleep(duration - fade).await;
        info!("Splash fading out");
        sleep(fade).await;
    }

    if let Err(e) = state.show_product_screen() {
        error!("Failed to leave splash screen: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Screen;
    use tokio::time::Instant;

    fn store() -> Arc<ScreenStore> {
        Arc::new(ScreenStore::new(0, "127.0.0.1".to_string()))
    }

    #[tokio::test(start_paused = true)]
    async fn navigates_after_full_duration() {
        let state = store();
        let start = Instant::now();
        let task = tokio::spawn(splash_task(Arc::clone(&state), SPLASH_DURATION));

        sleep(Duration::from_millis(1999)).await;
        assert_eq!(state.get_screen().unwrap(), Screen::Splash);

        task.await.unwrap();
        assert_eq!(start.elapsed(), SPLASH_DURATION);
        assert_eq!(state.get_screen().unwrap(), Screen::Product);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_duration_skips_splash() {
        let state = store();
        splash_task(Arc::clone(&state), Duration::ZERO).await;
        assert_eq!(state.get_screen().unwrap(), Screen::Product);
    }

    #[tokio::test(start_paused = true)]
    async fn short_splash_fades_for_whole_duration() {
        let state = store();
        let start = Instant::now();
        splash_task(Arc::clone(&state), Duration::from_millis(300)).await;
        assert_eq!(start.elapsed(), Duration::from_millis(300));
        assert_eq!(state.get_screen().unwrap(), Screen::Product);
    }
}
