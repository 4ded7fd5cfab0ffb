//! Employee records and form drafts.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::enums::{Department, Position, SortColumn};
use crate::ids::EmployeeId;

/// A stored employee record.
///
/// Owned by the record store; views only ever see clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    /// ISO date (`YYYY-MM-DD`) as entered.
    pub date_of_employment: String,
    /// ISO date (`YYYY-MM-DD`) as entered.
    pub date_of_birth: String,
    pub phone_number: String,
    pub email_address: String,
    pub department: Department,
    pub position: Position,
}

/// A validated employee without an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub date_of_employment: String,
    pub date_of_birth: String,
    pub phone_number: String,
    pub email_address: String,
    pub department: Department,
    pub position: Position,
}

impl NewEmployee {
    /// Attach a store-assigned identifier.
    pub fn with_id(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_employment: self.date_of_employment,
            date_of_birth: self.date_of_birth,
            phone_number: self.phone_number,
            email_address: self.email_address,
            department: self.department,
            position: self.position,
        }
    }
}

/// A comparable column value.
///
/// Numbers compare numerically, text lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey<'a> {
    Number(u64),
    Text(&'a str),
}

impl PartialOrd for SortKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            // A column never mixes kinds; order numbers first for totality.
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        }
    }
}

impl Employee {
    /// Display name used in notifications.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// All text-valued fields, in declaration order.
    ///
    /// The identifier is numeric and therefore not part of this set.
    pub fn text_fields(&self) -> [&str; 8] {
        [
            &self.first_name,
            &self.last_name,
            &self.date_of_employment,
            &self.date_of_birth,
            &self.phone_number,
            &self.email_address,
            self.department.as_str(),
            self.position.as_str(),
        ]
    }

    pub fn sort_key(&self, column: SortColumn) -> SortKey<'_> {
        match column {
            SortColumn::Id => SortKey::Number(self.id.get()),
            SortColumn::FirstName => SortKey::Text(&self.first_name),
            SortColumn::LastName => SortKey::Text(&self.last_name),
            SortColumn::DateOfEmployment => SortKey::Text(&self.date_of_employment),
            SortColumn::DateOfBirth => SortKey::Text(&self.date_of_birth),
            SortColumn::PhoneNumber => SortKey::Text(&self.phone_number),
            SortColumn::EmailAddress => SortKey::Text(&self.email_address),
            SortColumn::Department => SortKey::Text(self.department.as_str()),
            SortColumn::Position => SortKey::Text(self.position.as_str()),
        }
    }

    /// Strip the identifier.
    pub fn to_new(&self) -> NewEmployee {
        NewEmployee {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            date_of_employment: self.date_of_employment.clone(),
            date_of_birth: self.date_of_birth.clone(),
            phone_number: self.phone_number.clone(),
            email_address: self.email_address.clone(),
            department: self.department,
            position: self.position,
        }
    }
}

/// The untyped candidate a create/edit form holds while the user types.
///
/// Every field is free text so that invalid input can be represented and
/// reported. `id` is only set when editing an existing record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EmployeeId>,
    pub first_name: String,
    pub last_name: String,
    pub date_of_employment: String,
    pub date_of_birth: String,
    pub phone_number: String,
    pub email_address: String,
    pub department: String,
    pub position: String,
}

impl Default for EmployeeDraft {
    /// Blank form with the first department and position preselected.
    fn default() -> Self {
        Self {
            id: None,
            first_name: String::new(),
            last_name: String::new(),
            date_of_employment: String::new(),
            date_of_birth: String::new(),
            phone_number: String::new(),
            email_address: String::new(),
            department: Department::default().as_str().to_string(),
            position: Position::default().as_str().to_string(),
        }
    }
}

impl From<&Employee> for EmployeeDraft {
    fn from(employee: &Employee) -> Self {
        Self {
            id: Some(employee.id),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            date_of_employment: employee.date_of_employment.clone(),
            date_of_birth: employee.date_of_birth.clone(),
            phone_number: employee.phone_number.clone(),
            email_address: employee.email_address.clone(),
            department: employee.department.as_str().to_string(),
            position: employee.position.as_str().to_string(),
        }
    }
}

impl From<&NewEmployee> for EmployeeDraft {
    fn from(employee: &NewEmployee) -> Self {
        Self {
            id: None,
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            date_of_employment: employee.date_of_employment.clone(),
            date_of_birth: employee.date_of_birth.clone(),
            phone_number: employee.phone_number.clone(),
            email_address: employee.email_address.clone(),
            department: employee.department.as_str().to_string(),
            position: employee.position.as_str().to_string(),
        }
    }
}

impl EmployeeDraft {
    /// Display name used in notifications.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
