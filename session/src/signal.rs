//! Login completion signal.
//!
//! A login flow writes the credential asynchronously and then navigates to a
//! protected route. The gate on that route awaits [`LoginSignal::settled`]
//! before reading the store, so it always observes the finished write.

#[cfg(test)]
#[path = "signal_test.rs"]
mod signal_test;

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::FutureExt;
use futures::channel::oneshot;
use futures::future::Shared;

type Pending = Shared<oneshot::Receiver<()>>;

/// Shared handle between login flows and route gates.
#[derive(Clone, Default)]
pub struct LoginSignal {
    pending: Arc<Mutex<Option<Pending>>>,
}

/// Marks one login as in flight. Resolves the signal on [`finish`](Self::finish)
/// or when dropped, so failed and abandoned logins release waiting gates too.
#[must_use = "dropping the guard immediately ends the in-flight login"]
pub struct LoginInFlight {
    done: Option<oneshot::Sender<()>>,
}

impl LoginSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a login. A newer login supersedes any earlier one still running.
    pub fn begin(&self) -> LoginInFlight {
        let (tx, rx) = oneshot::channel();
        *self.lock() = Some(rx.shared());
        LoginInFlight { done: Some(tx) }
    }

    /// Whether the latest login has not finished yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        let pending = self.lock().clone();
        pending.is_some_and(|pending| pending.now_or_never().is_none())
    }

    /// Wait until the latest login has finished. Ready at once when idle.
    pub async fn settled(&self) {
        let pending = self.lock().clone();
        if let Some(pending) = pending {
            if pending.await.is_err() {
                log::debug!("login ended without completing");
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Pending>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for LoginSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginSignal").field("pending", &self.is_pending()).finish()
    }
}

impl LoginInFlight {
    /// Mark the login as complete after its credential writes.
    pub fn finish(mut self) {
        if let Some(tx) = self.done.take() {
            if tx.send(()).is_err() {
                log::debug!("login finished with no gate waiting");
            }
        }
    }
}
