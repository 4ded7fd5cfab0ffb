pub mod employee;
pub mod enums;
pub mod error;
pub mod ids;
pub mod snapshot;
pub mod view;

pub use employee::{Employee, EmployeeDraft, NewEmployee, SortKey};
pub use enums::{Department, Position, SortColumn, SortOrder, ViewMode};
pub use error::{ModelError, Result};
pub use ids::EmployeeId;
pub use snapshot::AppSnapshot;
pub use view::{DEFAULT_PAGE_SIZE, Pagination, SortState, Toast, ViewState};
