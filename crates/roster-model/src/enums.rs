//! Type-safe enumerations for roster records and view state.
//!
//! These enums replace the free-form strings the form and the persisted
//! blob carry. Each one round-trips through its lowercase/camelCase text
//! form via `as_str` / `FromStr`, and serde uses the same spelling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Department an employee belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    #[default]
    Analytics,
    Tech,
}

impl Department {
    pub const ALL: [Department; 2] = [Department::Analytics, Department::Tech];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Analytics => "analytics",
            Department::Tech => "tech",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = ModelError;

    /// Exact match only; the form offers these two values verbatim.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "analytics" => Ok(Department::Analytics),
            "tech" => Ok(Department::Tech),
            _ => Err(ModelError::InvalidDepartment(s.to_string())),
        }
    }
}

/// Seniority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Junior,
    Medior,
    Senior,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Junior, Position::Medior, Position::Senior];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Junior => "junior",
            Position::Medior => "medior",
            Position::Senior => "senior",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "junior" => Ok(Position::Junior),
            "medior" => Ok(Position::Medior),
            "senior" => Ok(Position::Senior),
            _ => Err(ModelError::InvalidPosition(s.to_string())),
        }
    }
}

/// How the list page lays out the current page of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Grid,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Table => "table",
            ViewMode::Grid => "grid",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(ViewMode::Table),
            "grid" => Ok(ViewMode::Grid),
            _ => Err(ModelError::InvalidViewMode(s.to_string())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(ModelError::InvalidSortOrder(s.to_string())),
        }
    }
}

/// A record column the list can be sorted by.
///
/// Serialized with the record's field name (`id`, `firstName`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    #[default]
    Id,
    FirstName,
    LastName,
    DateOfEmployment,
    DateOfBirth,
    PhoneNumber,
    EmailAddress,
    Department,
    Position,
}

impl SortColumn {
    pub const ALL: [SortColumn; 9] = [
        SortColumn::Id,
        SortColumn::FirstName,
        SortColumn::LastName,
        SortColumn::DateOfEmployment,
        SortColumn::DateOfBirth,
        SortColumn::PhoneNumber,
        SortColumn::EmailAddress,
        SortColumn::Department,
        SortColumn::Position,
    ];

    /// Field name as it appears in the persisted record.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Id => "id",
            SortColumn::FirstName => "firstName",
            SortColumn::LastName => "lastName",
            SortColumn::DateOfEmployment => "dateOfEmployment",
            SortColumn::DateOfBirth => "dateOfBirth",
            SortColumn::PhoneNumber => "phoneNumber",
            SortColumn::EmailAddress => "emailAddress",
            SortColumn::Department => "department",
            SortColumn::Position => "position",
        }
    }

    /// Column header label.
    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Id => "ID",
            SortColumn::FirstName => "First Name",
            SortColumn::LastName => "Last Name",
            SortColumn::DateOfEmployment => "Date of Employment",
            SortColumn::DateOfBirth => "Date of Birth",
            SortColumn::PhoneNumber => "Phone Number",
            SortColumn::EmailAddress => "Email Address",
            SortColumn::Department => "Department",
            SortColumn::Position => "Position",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortColumn {
    type Err = ModelError;

    /// Accepts the field name in any case, with or without separators
    /// (`firstName`, `first_name`, `first-name`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        SortColumn::ALL
            .into_iter()
            .find(|column| column.as_str().to_lowercase() == normalized)
            .ok_or_else(|| ModelError::InvalidSortColumn(s.to_string()))
    }
}
