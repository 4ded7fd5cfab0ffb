//! Cross-record uniqueness checks for phone number and email address.

use roster_model::{Employee, EmployeeDraft, EmployeeId};

use crate::FormMode;
use crate::result::{Field, ValidationResult};

pub const PHONE_NUMBER_DUPLICATE: &str = "Phone number must be unique.";
pub const EMAIL_ADDRESS_DUPLICATE: &str = "Email address must be unique.";

/// Whether `existing` counts as a different record than the one being edited.
fn is_other(existing: &Employee, mode: FormMode, own_id: Option<EmployeeId>) -> bool {
    match mode {
        FormMode::Create => true,
        FormMode::Edit => Some(existing.id) != own_id,
    }
}

/// Flag the phone number and email address independently when another
/// record already uses them.
pub fn check_uniqueness(
    draft: &EmployeeDraft,
    mode: FormMode,
    existing: &[Employee],
    own_id: Option<EmployeeId>,
) -> ValidationResult {
    let mut result = ValidationResult::new();
    let others = || existing.iter().filter(|e| is_other(e, mode, own_id));

    if others().any(|e| e.phone_number == draft.phone_number) {
        result.insert(Field::PhoneNumber, PHONE_NUMBER_DUPLICATE);
    }
    if others().any(|e| e.email_address == draft.email_address) {
        result.insert(Field::EmailAddress, EMAIL_ADDRESS_DUPLICATE);
    }
    result
}
