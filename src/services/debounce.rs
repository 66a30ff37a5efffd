use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Quiet window applied to input-change events before a search goes out.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Coalesces rapid input-change events into one action. Each trigger cancels
/// the pending action and restarts the quiet-window timer, so within a burst
/// only the last event runs, once input has been quiet for the full window.
///
/// Owns at most one pending task handle; intended to be held exclusively by
/// the input-handling component. In-flight actions started by an earlier
/// window are not coordinated against later ones.
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedules `action` to run after the quiet window, replacing any
    /// previously scheduled action that has not fired yet.
    pub fn trigger<F>(&mut self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            action.await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tokio::time::{advance, Instant};

    #[tokio::test(start_paused = true)]
    async fn fires_once_after_quiet_window() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::default();

        let count = Arc::clone(&fired);
        debouncer.trigger(async move {
            count.fetch_add(1, Ordering::SeqCst);
        });
        tokio::task::yield_now().await;

        advance(Duration::from_millis(500)).await;
        tokio::task::yield_now().await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn coalesces_rapid_events_into_one_action() {
        let fired: Arc<Mutex<Vec<Instant>>> = Arc::new(Mutex::new(Vec::new()));
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        // Events at t=0, t=100ms, t=200ms.
        for _ in 0..3 {
            let fired = Arc::clone(&fired);
            debouncer.trigger(async move {
                fired.lock().unwrap().push(Instant::now());
            });
            tokio::task::yield_now().await;
            advance(Duration::from_millis(100)).await;
        }

        // t=650ms: the last window (200+500) has not elapsed yet.
        advance(Duration::from_millis(350)).await;
        tokio::task::yield_now().await;
        assert!(fired.lock().unwrap().is_empty());

        // t=700ms: exactly one action fires.
        advance(Duration::from_millis(50)).await;
        tokio::task::yield_now().await;

        let fired = fired.lock().unwrap();
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].duration_since(start), Duration::from_millis(700));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_discards_pending_action() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        let count = Arc::clone(&fired);
        debouncer.trigger(async move {
            count.fetch_add(1, Ordering::SeqCst);
        });

        advance(Duration::from_millis(100)).await;
        debouncer.cancel();

        advance(Duration::from_secs(1)).await;
        tokio::task::yield_now().await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_pending_action() {
        let fired = Arc::new(AtomicUsize::new(0));

        {
            let mut debouncer = Debouncer::new(Duration::from_millis(500));
            let count = Arc::clone(&fired);
            debouncer.trigger(async move {
                count.fetch_add(1, Ordering::SeqCst);
            });
        }

        advance(Duration::from_secs(1)).await;
        tokio::task::yield_now().await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
