//! Cancellable-timer debounce primitive.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Delivers a value on a channel once input has been idle for `delay`.
///
/// Every call aborts the pending timer, so at most one timer is outstanding.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    tx: mpsc::UnboundedSender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    #[must_use]
    pub const fn new(delay: Duration, tx: mpsc::UnboundedSender<T>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    /// Schedules `value`, replacing whatever was pending.
    ///
    /// Must be called from within a tokio runtime.
    pub fn call(&mut self, value: T) {
        self.cancel();
        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(value);
        }));
    }

    /// Drops the pending value, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{advance, sleep};

    const DELAY: Duration = Duration::from_millis(450);

    #[tokio::test(start_paused = true)]
    async fn test_burst_emits_only_final_value() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(DELAY, tx);

        for text in ["r", "re", "rex"] {
            debouncer.call(text.to_string());
            advance(Duration::from_millis(100)).await;
        }

        sleep(DELAY * 2).await;

        assert_eq!(rx.recv().await.as_deref(), Some("rex"));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_emitted_before_idle_window() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(DELAY, tx);

        debouncer.call(1_u32);
        sleep(Duration::from_millis(200)).await;

        assert!(rx.try_recv().is_err());
        assert!(debouncer.is_pending());

        sleep(Duration::from_millis(300)).await;
        assert_eq!(rx.try_recv().ok(), Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_idle_periods_emit_separately() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(DELAY, tx);

        debouncer.call("a");
        sleep(DELAY * 2).await;
        debouncer.call("b");
        sleep(DELAY * 2).await;

        assert_eq!(rx.try_recv().ok(), Some("a"));
        assert_eq!(rx.try_recv().ok(), Some("b"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_value() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(DELAY, tx);

        debouncer.call("gone");
        debouncer.cancel();
        sleep(DELAY * 2).await;

        assert!(rx.try_recv().is_err());
        assert!(!debouncer.is_pending());
    }
}
