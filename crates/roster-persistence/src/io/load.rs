//! State loading operations.

use roster_model::{AppSnapshot, DEFAULT_PAGE_SIZE};

use crate::error::{PersistenceError, Result};
use crate::slot::KeyValueSlot;

/// Key the combined state is stored under.
pub const STATE_KEY: &str = "state";

/// Load the saved state, or the default state when there is none or it
/// cannot be read. Never fails.
pub fn load_state(slot: &impl KeyValueSlot) -> AppSnapshot {
    match try_load_state(slot) {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) => {
            tracing::debug!("no saved state, starting empty");
            AppSnapshot::default()
        }
        Err(error) => {
            tracing::warn!(%error, "discarding unreadable saved state");
            AppSnapshot::default()
        }
    }
}

/// Load the saved state, reporting why it could not be read.
pub fn try_load_state(slot: &impl KeyValueSlot) -> Result<Option<AppSnapshot>> {
    let Some(text) = slot.read(STATE_KEY)? else {
        return Ok(None);
    };
    let snapshot = parse_state(&text)?;
    tracing::info!(employees = snapshot.employees.len(), "loaded roster state");
    Ok(Some(snapshot))
}

/// Parse a state blob. Out-of-range pagination is reset.
pub fn parse_state(text: &str) -> Result<AppSnapshot> {
    let mut snapshot: AppSnapshot = serde_json::from_str(text)
        .map_err(|source| PersistenceError::Deserialization { source })?;

    let pagination = &mut snapshot.app.pagination;
    if pagination.page_size == 0 {
        tracing::warn!("saved page size was 0, using default");
        pagination.page_size = DEFAULT_PAGE_SIZE;
    }
    if pagination.current_page == 0 {
        pagination.current_page = 1;
    }
    Ok(snapshot)
}
