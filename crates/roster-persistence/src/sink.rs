//! Wiring a slot to the store.

use roster_model::AppSnapshot;
use roster_state::{SinkError, StateSink, Store};

use crate::io::{save_state, try_load_state};
use crate::slot::KeyValueSlot;

/// Saves the store's state to a slot after every change.
#[derive(Debug, Clone)]
pub struct SlotSink<S> {
    slot: S,
}

impl<S: KeyValueSlot> SlotSink<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }
}

impl<S: KeyValueSlot> StateSink for SlotSink<S> {
    fn persist(&mut self, snapshot: &AppSnapshot) -> Result<(), SinkError> {
        save_state(&mut self.slot, snapshot).map_err(|error| {
            if let Some(hint) = error.suggestion() {
                tracing::warn!(message = %error.user_message(), %hint, "save failed");
            }
            SinkError::from(error)
        })
    }
}

/// Restore the store from `slot` and keep saving to it.
pub fn open_store<S: KeyValueSlot + 'static>(slot: S) -> Store {
    open_store_or(slot, AppSnapshot::default)
}

/// Restore the store from `slot`, starting from `fresh()` when nothing
/// usable is saved, and keep saving to it.
pub fn open_store_or<S: KeyValueSlot + 'static>(
    slot: S,
    fresh: impl FnOnce() -> AppSnapshot,
) -> Store {
    let snapshot = match try_load_state(&slot) {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) => {
            tracing::debug!("no saved state, starting fresh");
            fresh()
        }
        Err(error) => {
            tracing::warn!(%error, "discarding unreadable saved state");
            fresh()
        }
    };
    Store::from_snapshot(snapshot).with_sink(SlotSink::new(slot))
}
