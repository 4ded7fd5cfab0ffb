//! Shared store access for multithreaded hosts.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::intent::{Intent, IntentError, IntentOutcome, dispatch_intent};
use crate::store::Store;

/// Longest the toast timer sleeps before re-checking the deadline.
const TIMER_POLL: Duration = Duration::from_millis(250);

/// Cloneable handle to one [`Store`]. All access goes through a single
/// mutex, so mutations and reads never interleave.
#[derive(Debug, Clone)]
pub struct StoreHandle {
    inner: Arc<Mutex<Store>>,
}

impl StoreHandle {
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Run `f` with exclusive access to the store.
    ///
    /// A panic in an earlier holder does not lock the store out; the state
    /// it left behind is used as-is.
    pub fn with<R>(&self, f: impl FnOnce(&mut Store) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn dispatch(&self, intent: Intent) -> Result<IntentOutcome, IntentError> {
        self.with(|store| dispatch_intent(store, intent))
    }

    /// Start a background thread that hides the toast when its deadline
    /// passes. The thread stops when the returned timer is dropped.
    pub fn spawn_toast_timer(&self) -> std::io::Result<ToastTimer> {
        let (stop, stopped) = mpsc::channel::<()>();
        let handle = self.clone();
        let join = thread::Builder::new()
            .name("roster-toast".to_string())
            .spawn(move || {
                loop {
                    let wait = handle
                        .with(|store| store.toast_deadline())
                        .map_or(TIMER_POLL, |deadline| {
                            deadline.saturating_duration_since(Instant::now())
                        })
                        .min(TIMER_POLL);
                    match stopped.recv_timeout(wait) {
                        Err(RecvTimeoutError::Timeout) => {
                            handle.with(|store| store.tick(Instant::now()));
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                tracing::trace!("toast timer stopped");
            })?;
        Ok(ToastTimer {
            stop: Some(stop),
            join: Some(join),
        })
    }
}

/// Running toast timer; stops and joins on drop.
#[derive(Debug)]
pub struct ToastTimer {
    stop: Option<Sender<()>>,
    join: Option<JoinHandle<()>>,
}

impl Drop for ToastTimer {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(join) = self.join.take()
            && join.join().is_err()
        {
            tracing::warn!("toast timer thread panicked");
        }
    }
}
