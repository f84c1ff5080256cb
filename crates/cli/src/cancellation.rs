//! Ctrl+C handling for `ffs-search`.
//!
//! Responsibilities:
//! - Provide a cloneable token that the signal task trips and the search awaits.
//! - Define the `Cancelled` marker error carried through `anyhow::Result`.
//! - Race a future against the token so long page fetches stop promptly.
//!
//! Does NOT handle:
//! - Installing the signal listener (see `main`).
//!
//! Invariants:
//! - Once cancelled, a token stays cancelled.
//! - Nothing is written to the output destination after cancellation.

use std::fmt;
use std::future::Future;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::Notify;

/// Unix exit status for SIGINT (128 + 2).
pub const SIGINT_EXIT_CODE: u8 = 130;

#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trip the token. Repeated calls are no-ops.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            self.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Resolve once the token is tripped.
    ///
    /// The `notified()` future is registered before the flag is read so a
    /// cancel landing in between is not lost.
    pub async fn cancelled(&self) {
        let notified = self.notify.notified();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }

    /// Drive `fut` unless the token trips first.
    pub async fn guard<F, T, E>(&self, fut: F) -> anyhow::Result<T>
    where
        F: Future<Output = Result<T, E>>,
        E: Into<anyhow::Error>,
    {
        tokio::select! {
            res = fut => res.map_err(Into::into),
            _ = self.cancelled() => Err(Cancelled.into()),
        }
    }
}

/// Marker error for a user interrupt.
#[derive(Debug, Clone, Copy)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cancelled")
    }
}

impl std::error::Error for Cancelled {}

pub fn is_cancelled_error(err: &anyhow::Error) -> bool {
    err.is::<Cancelled>()
}

pub fn print_cancelled_message() {
    eprintln!("^C\nOperation cancelled by user");
}
