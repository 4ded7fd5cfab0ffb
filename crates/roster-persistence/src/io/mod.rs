//! Reading and writing the state blob.
//!
//! This module handles:
//! - Saving the combined state as one JSON document
//! - Loading it back, falling back to defaults on absent or corrupt data

mod load;
mod save;

pub use load::{STATE_KEY, load_state, parse_state, try_load_state};
pub use save::{save_state, serialize_state};
