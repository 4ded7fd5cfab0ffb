//! Application state for the employee roster.
//!
//! The architecture separates concerns into:
//!
//! - **RecordStore**: the ordered employee collection
//! - **ViewStateStore**: view mode, search, sort, pagination and the toast
//! - **Selectors**: memoized filter, sort and paginate stages over both
//! - **Store**: owns the above, persists and notifies subscribers on change
//! - **Intents**: what views ask for, mapped onto store calls
//!
//! Validation lives in `roster-validate`; the store itself never rejects a
//! write, so every create or edit goes through [`dispatch_intent`].

mod derive;
mod form;
mod handle;
mod intent;
mod records;
mod route;
mod store;
mod versioned;
mod view;

// Derivation
pub use derive::{
    ListView, Selectors, StageCounts, filter_employees, matches_query, paginate,
    sort_employees, total_pages,
};

// Forms
pub use form::{EditSession, EmployeeForm};

// Shared access
pub use handle::{StoreHandle, ToastTimer};

// Intents and navigation
pub use intent::{
    Intent, IntentError, IntentOutcome, created_message, deleted_message, dispatch_intent,
    dispatch_intent_at, updated_message,
};
pub use route::{Route, RouteError};

// Stores
pub use records::RecordStore;
pub use store::{Listener, SinkError, StateSink, Store, SubscriptionId};
pub use view::{TOAST_DURATION, ViewStateStore};

// Caching
pub use versioned::{Memo, Versioned};
