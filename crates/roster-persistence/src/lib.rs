//! Persistent storage for the employee roster.
//!
//! The whole application state is kept as one JSON document under the key
//! `state`:
//!
//! ```text
//! {
//!   "employees": [ { "id": 1, "firstName": "Jane", ... } ],
//!   "app": { "viewMode": "table", "searchQuery": "", "sort": {...},
//!            "pagination": {...}, "toast": {...} }
//! }
//! ```
//!
//! It is written after every store change and read once at startup. Absent
//! or corrupt data loads as the default state.
//!
//! # Architecture
//!
//! - `slot.rs` - Key-value slots (file-backed with atomic writes, in-memory)
//! - `io/` - Blob serialization, save and load
//! - `sink.rs` - Store persistence sink
//! - `error.rs` - Error types with user-friendly messages

mod error;
mod io;
mod sink;
mod slot;

pub use error::{PersistenceError, Result};
pub use io::{STATE_KEY, load_state, parse_state, save_state, serialize_state, try_load_state};
pub use sink::{SlotSink, open_store, open_store_or};
pub use slot::{FileSlot, KeyValueSlot, MemorySlot};
