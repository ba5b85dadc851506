//! Ctrl+C cancellation for CLI commands.
//!
//! Responsibilities:
//! - Provide a cloneable token that command handlers race against their requests.
//! - Define the `Cancelled` marker error carried through `anyhow::Result`.
//! - Print the cancellation message used with exit code 130.
//!
//! Does NOT handle:
//! - Installing the signal handler (done in `main`).
//!
//! Invariants:
//! - Once cancelled, the token stays cancelled.

use std::fmt;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::Notify;

/// Cancellation token shared by the signal listener and the running command.
#[derive(Clone, Debug)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Cancel the token. Idempotent.
    pub fn cancel(&self) {
        let was_cancelled = self.cancelled.swap(true, Ordering::SeqCst);
        if !was_cancelled {
            self.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Wait until the token is cancelled.
    ///
    /// The `notified()` future is created before the flag is read so a
    /// concurrent `cancel` cannot be missed.
    pub async fn cancelled(&self) {
        let notified = self.notify.notified();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}

/// Marker error for user-initiated cancellation.
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

/// Race `future` against Ctrl+C.
///
/// Resolves to the future's output, or to [`Cancelled`] when the token fires
/// first. The future is dropped on cancellation.
pub async fn cancellable<F, T, E>(cancel: &CancellationToken, future: F) -> anyhow::Result<T>
where
    F: Future<Output = Result<T, E>>,
    E: Into<anyhow::Error>,
{
    tokio::select! {
        res = future => res.map_err(Into::into),
        _ = cancel.cancelled() => Err(Cancelled.into()),
    }
}
