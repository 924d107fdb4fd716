//! Timer-based input coalescing.
//!
//! Collapses a burst of input events into the most recent one: a value is
//! released only once a fixed quiescence window passes with nothing newer
//! arriving. Used for filter fields that fire on every keystroke.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

/// Default quiescence window for filter inputs.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Coalesces a stream of input events into settled values.
///
/// Intended for interactive front-ends that forward keystrokes as they
/// arrive; the one-shot CLI takes its filter as a finished argument and
/// does not need it.
#[derive(Debug)]
pub struct Debouncer<T> {
    rx: mpsc::UnboundedReceiver<T>,
    window: Duration,
}

impl<T> Debouncer<T> {
    /// Returns a sender for raw input events and a debouncer reading from it.
    pub fn channel(window: Duration) -> (mpsc::UnboundedSender<T>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx, window })
    }

    /// Waits for the next settled value: the last value seen once the window
    /// elapses with nothing newer, or the final value when the sender closes.
    ///
    /// Returns `None` when the sender is closed and no value is pending.
    pub async fn next(&mut self) -> Option<T> {
        let mut latest = self.rx.recv().await?;
        loop {
            match timeout(self.window, self.rx.recv()).await {
                Ok(Some(newer)) => latest = newer,
                Ok(None) | Err(_) => return Some(latest),
            }
        }
    }
}
