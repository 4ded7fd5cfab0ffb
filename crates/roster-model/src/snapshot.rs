//! The combined application state as it is persisted.

use serde::{Deserialize, Serialize};

use crate::employee::Employee;
use crate::view::ViewState;

/// `{ employees, app }` - everything that survives a restart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSnapshot {
    pub employees: Vec<Employee>,
    pub app: ViewState,
}
