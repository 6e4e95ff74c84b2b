//! Progress ticker
//!
//! A background tokio task that emits a tick on a fixed interval. It does no
//! work of its own: the owner of the [`TickerGuard`] receives ticks and polls
//! the widget on its own task. Dropping the guard aborts the task, so a
//! ticker never outlives the session that started it.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};
use tokio::time::MissedTickBehavior;
use tracing::trace;

/// Shortest interval accepted by [`ProgressTicker`]
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Factory for progress tickers with a fixed interval
#[derive(Debug, Clone, Copy)]
pub struct ProgressTicker {
    interval: Duration,
}

impl ProgressTicker {
    /// Create a factory; intervals below [`MIN_INTERVAL`] are raised to it
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
        }
    }

    /// Tick interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Spawn the ticking task on the current tokio runtime
    ///
    /// The first tick arrives one full interval after spawning.
    pub fn start(&self) -> TickerGuard {
        let (tx, rx) = mpsc::channel(1);
        let period = self.interval;

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // first tick completes immediately
            interval.tick().await;

            let mut seq: u64 = 0;
            loop {
                interval.tick().await;
                seq += 1;
                if tx.send(seq).await.is_err() {
                    break;
                }
            }
        });

        trace!(?period, "Progress ticker started");
        TickerGuard { handle, ticks: rx }
    }
}

impl Default for ProgressTicker {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

/// Running ticker; aborts its task on drop
#[derive(Debug)]
pub struct TickerGuard {
    handle: JoinHandle<()>,
    ticks: mpsc::Receiver<u64>,
}

impl TickerGuard {
    /// Wait for the next tick and return its sequence number
    ///
    /// Returns `None` once the task has stopped.
    pub async fn tick(&mut self) -> Option<u64> {
        self.ticks.recv().await
    }

    /// Handle for observing or cancelling the task from elsewhere
    pub fn abort_handle(&self) -> AbortHandle {
        self.handle.abort_handle()
    }
}

impl Drop for TickerGuard {
    fn drop(&mut self) {
        self.handle.abort();
        trace!("Progress ticker stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ticks_arrive_in_order() {
        let ticker = ProgressTicker::new(Duration::from_secs(1));
        let mut guard = ticker.start();

        assert_eq!(guard.tick().await, Some(1));
        assert_eq!(guard.tick().await, Some(2));
        assert_eq!(guard.tick().await, Some(3));
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_waits_one_interval() {
        let ticker = ProgressTicker::new(Duration::from_millis(500));
        let mut guard = ticker.start();
        let started = tokio::time::Instant::now();

        guard.tick().await;
        assert_eq!(started.elapsed(), Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_guard_aborts_task() {
        let guard = ProgressTicker::default().start();
        let handle = guard.abort_handle();
        assert!(!handle.is_finished());

        drop(guard);
        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(handle.is_finished());
    }

    #[test]
    fn zero_interval_is_raised() {
        let ticker = ProgressTicker::new(Duration::ZERO);
        assert_eq!(ticker.interval(), MIN_INTERVAL);
    }
}
