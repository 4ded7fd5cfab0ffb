//! State saving operations.

use roster_model::AppSnapshot;

use crate::error::{PersistenceError, Result};
use crate::io::STATE_KEY;
use crate::slot::KeyValueSlot;

/// Write `snapshot` to `slot` under [`STATE_KEY`].
pub fn save_state(slot: &mut impl KeyValueSlot, snapshot: &AppSnapshot) -> Result<()> {
    let text = serialize_state(snapshot)?;
    slot.write(STATE_KEY, &text)?;
    tracing::debug!(employees = snapshot.employees.len(), "saved roster state");
    Ok(())
}

/// The blob layout: `{ "employees": [...], "app": {...} }`.
pub fn serialize_state(snapshot: &AppSnapshot) -> Result<String> {
    serde_json::to_string_pretty(snapshot)
        .map_err(|source| PersistenceError::Serialization { source })
}
