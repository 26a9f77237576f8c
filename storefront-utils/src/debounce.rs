//! "Last event wins within a window" rate limiting for query input.
//!
//! [`Debounce`] is the policy on its own, driven by explicit timestamps.
//! [`spawn_debouncer`] runs it on tokio timers between two channels.

use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tracing::debug;

/// Default quiet period before a query is applied.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

const FORWARD_CAPACITY: usize = 16;

/// Holds at most one pending value and the time it was offered.
#[derive(Debug)]
pub struct Debounce<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debounce<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Offer a new value, superseding any pending one.
    ///
    /// Returns the superseded value, if there was one.
    pub fn offer(&mut self, value: T, at: Instant) -> Option<T> {
        self.pending.replace((value, at)).map(|(previous, _)| previous)
    }

    /// When the pending value becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at + self.window)
    }

    /// Take the pending value once its quiet period has elapsed.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        match self.deadline() {
            Some(deadline) if now >= deadline => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// Take the pending value regardless of timing.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }
}

/// Forward values from `input` once they have been quiet for `window`.
///
/// Each value received restarts the window and replaces the pending one.
/// When `input` closes, a pending value is forwarded immediately and the
/// returned receiver closes after it.
pub fn spawn_debouncer<T>(window: Duration, mut input: mpsc::Receiver<T>) -> mpsc::Receiver<T>
where
    T: Send + 'static,
{
    let (output, forwarded) = mpsc::channel(FORWARD_CAPACITY);

    tokio::spawn(async move {
        let mut policy = Debounce::new(window);

        loop {
            let deadline = policy.deadline();
            let wake_at = deadline.map_or_else(tokio::time::Instant::now, tokio::time::Instant::from_std);

            tokio::select! {
                received = input.recv() => match received {
                    Some(value) => {
                        let now = tokio::time::Instant::now().into_std();
                        if policy.offer(value, now).is_some() {
                            debug!("debounced input superseded");
                        }
                    }
                    None => {
                        if let Some(value) = policy.flush() {
                            let _ = output.send(value).await;
                        }
                        break;
                    }
                },
                () = tokio::time::sleep_until(wake_at), if deadline.is_some() => {
                    let now = tokio::time::Instant::now().into_std();
                    if let Some(value) = policy.take_due(now)
                        && output.send(value).await.is_err()
                    {
                        break;
                    }
                }
            }
        }
    });

    forwarded
}
