//! Ctrl+C handling.
//!
//! Responsibilities:
//! - Provide a cloneable cancellation token that command handlers race
//!   against their remote calls.
//! - Define the `Cancelled` error that carries user cancellation through
//!   `anyhow::Result`.
//!
//! Does NOT handle:
//! - Installing the signal handler (see `main`).
//!
//! Invariants:
//! - Once cancelled, token remains cancelled forever.

use std::fmt;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::Notify;

/// Cancellation token usable across async tasks.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel token (idempotent).
    pub fn cancel(&self) {
        let was_cancelled = self.cancelled.swap(true, Ordering::SeqCst);
        if !was_cancelled {
            self.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Await cancellation.
    ///
    /// The `notified()` future is created before the flag is checked so a
    /// concurrent `cancel()` is never missed.
    pub async fn cancelled(&self) {
        let notified = self.notify.notified();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}

/// Marker error used to indicate user-driven cancellation.
#[derive(Debug, Clone, Copy)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// Returns true if this anyhow error represents a cancellation.
pub fn is_cancelled_error(err: &anyhow::Error) -> bool {
    err.is::<Cancelled>()
}

/// Print standard cancellation message to stderr.
pub fn print_cancelled_message() {
    eprintln!("^C\nOperation cancelled by user");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cancel_wakes_waiter() {
        let token = CancellationToken::new();
        let waiter = token.clone();
        let handle = tokio::spawn(async move { waiter.cancelled().await });

        token.cancel();
        handle.await.unwrap();
        assert!(token.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancelled_returns_immediately_once_cancelled() {
        let token = CancellationToken::new();
        token.cancel();
        token.cancel();
        token.cancelled().await;
    }

    #[test]
    fn test_cancelled_error_detection() {
        let err: anyhow::Error = Cancelled.into();
        assert!(is_cancelled_error(&err));
        assert!(!is_cancelled_error(&anyhow::anyhow!("other")));
    }
}
