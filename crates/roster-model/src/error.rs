use thiserror::Error;

/// Failure to parse one of the enumerated model values from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown department: {0}")]
    InvalidDepartment(String),
    #[error("unknown position: {0}")]
    InvalidPosition(String),
    #[error("unknown view mode: {0}")]
    InvalidViewMode(String),
    #[error("unknown sort column: {0}")]
    InvalidSortColumn(String),
    #[error("unknown sort order: {0}")]
    InvalidSortOrder(String),
    #[error("invalid employee id: {0}")]
    InvalidEmployeeId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
