//! Validation of employee form submissions.
//!
//! A submission is checked in two passes:
//!
//! 1. **Schema**: required fields, phone/email format, department and
//!    position membership. All failures are collected.
//! 2. **Uniqueness**: phone number and email address against the stored
//!    records. Runs only when the schema pass produced no errors, so a
//!    result never mixes schema and uniqueness messages.

mod result;
mod schema;
mod uniqueness;

use std::fmt;

use roster_model::{Department, Employee, EmployeeDraft, EmployeeId, NewEmployee, Position};

pub use result::{Field, ValidationResult};
pub use schema::{
    DATE_OF_BIRTH_REQUIRED, DATE_OF_EMPLOYMENT_REQUIRED, DEPARTMENT_INVALID,
    EMAIL_ADDRESS_FORMAT, EMAIL_ADDRESS_REQUIRED, FIRST_NAME_REQUIRED, LAST_NAME_REQUIRED,
    PHONE_NUMBER_FORMAT, PHONE_NUMBER_REQUIRED, POSITION_INVALID, check_schema,
    is_valid_email_address, is_valid_phone_number,
};
pub use uniqueness::{EMAIL_ADDRESS_DUPLICATE, PHONE_NUMBER_DUPLICATE, check_uniqueness};

/// Whether the form is creating a new record or editing an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit,
}

impl FormMode {
    /// Submit button label.
    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Create",
            FormMode::Edit => "Save",
        }
    }
}

impl fmt::Display for FormMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormMode::Create => f.write_str("create"),
            FormMode::Edit => f.write_str("edit"),
        }
    }
}

/// Validate a draft against the schema and, if that passes, against the
/// existing records.
///
/// In [`FormMode::Edit`] the record whose id equals `own_id` is ignored by
/// the uniqueness pass.
pub fn validate(
    draft: &EmployeeDraft,
    mode: FormMode,
    existing: &[Employee],
    own_id: Option<EmployeeId>,
) -> ValidationResult {
    let schema = check_schema(draft);
    if !schema.is_valid() {
        tracing::debug!(%mode, errors = schema.len(), "schema validation failed");
        return schema;
    }
    let uniqueness = check_uniqueness(draft, mode, existing, own_id);
    if !uniqueness.is_valid() {
        tracing::debug!(%mode, errors = uniqueness.len(), "uniqueness validation failed");
    }
    uniqueness
}

/// Validate and convert a draft into a typed record.
pub fn validate_draft(
    draft: &EmployeeDraft,
    mode: FormMode,
    existing: &[Employee],
) -> Result<NewEmployee, ValidationResult> {
    let result = validate(draft, mode, existing, draft.id);
    if !result.is_valid() {
        return Err(result);
    }
    // Both parse because the schema pass accepted them.
    let (Ok(department), Ok(position)) = (
        draft.department.parse::<Department>(),
        draft.position.parse::<Position>(),
    ) else {
        return Err(check_schema(draft));
    };
    Ok(NewEmployee {
        first_name: draft.first_name.clone(),
        last_name: draft.last_name.clone(),
        date_of_employment: draft.date_of_employment.clone(),
        date_of_birth: draft.date_of_birth.clone(),
        phone_number: draft.phone_number.clone(),
        email_address: draft.email_address.clone(),
        department,
        position,
    })
}
