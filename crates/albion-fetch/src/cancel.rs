//! Per-call fetch options and caller-driven cancellation.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// A cloneable cancellation signal.
///
/// Every clone observes the same state; once [`cancel`](Self::cancel) is
/// called the token stays cancelled.
#[derive(Debug, Clone)]
pub struct CancelToken {
    tx: Arc<watch::Sender<bool>>,
}

impl CancelToken {
    /// Creates a token that has not fired.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Fires the token, aborting every call that observes it.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    /// Returns true if the token has fired.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    /// Completes once the token has fired.
    pub async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        // `self` keeps the sender alive, so the channel cannot close here.
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Options applied to a single call.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Deadline for the whole call, including reading the body.
    pub timeout: Option<Duration>,
    /// External cancellation signal.
    pub cancel: Option<CancelToken>,
}

impl FetchOptions {
    /// Creates options with neither a timeout nor a cancellation token.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: None,
            cancel: None,
        }
    }

    /// Sets the call deadline.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the cancellation token.
    #[must_use]
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }
}
