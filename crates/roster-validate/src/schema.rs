//! Field-level schema checks.
//!
//! Every field is checked; failures are collected rather than returned on
//! the first hit. When a field fails both its format and its required
//! check, the required message wins.

use std::sync::LazyLock;

use regex::Regex;
use roster_model::{Department, EmployeeDraft, Position};

use crate::result::{Field, ValidationResult};

pub const FIRST_NAME_REQUIRED: &str = "First name is required.";
pub const LAST_NAME_REQUIRED: &str = "Last name is required.";
pub const DATE_OF_EMPLOYMENT_REQUIRED: &str = "Date of employment is required.";
pub const DATE_OF_BIRTH_REQUIRED: &str = "Date of birth is required.";
pub const PHONE_NUMBER_REQUIRED: &str = "Phone number is required.";
pub const PHONE_NUMBER_FORMAT: &str = "Phone number must be 10 digits.";
pub const EMAIL_ADDRESS_REQUIRED: &str = "Email address is required.";
pub const EMAIL_ADDRESS_FORMAT: &str = "Invalid email address.";
pub const DEPARTMENT_INVALID: &str = "Invalid department.";
pub const POSITION_INVALID: &str = "Invalid position.";

static PHONE_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("Invalid phone number regex"));

/// Local part may not end in a dot; domain labels may not start with a hyphen.
static EMAIL_ADDRESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("Invalid email address regex")
});

/// Exactly ten ASCII digits.
pub fn is_valid_phone_number(value: &str) -> bool {
    PHONE_NUMBER_REGEX.is_match(value)
}

/// `local@domain.tld` with no leading dot and no consecutive dots.
pub fn is_valid_email_address(value: &str) -> bool {
    if value.starts_with('.') || value.contains("..") {
        return false;
    }
    EMAIL_ADDRESS_REGEX.is_match(value)
}

fn require(result: &mut ValidationResult, field: Field, value: &str, message: &str) {
    if value.is_empty() {
        result.insert(field, message);
    }
}

/// Run every schema rule against the draft.
pub fn check_schema(draft: &EmployeeDraft) -> ValidationResult {
    let mut result = ValidationResult::new();

    require(&mut result, Field::FirstName, &draft.first_name, FIRST_NAME_REQUIRED);
    require(&mut result, Field::LastName, &draft.last_name, LAST_NAME_REQUIRED);
    require(
        &mut result,
        Field::DateOfEmployment,
        &draft.date_of_employment,
        DATE_OF_EMPLOYMENT_REQUIRED,
    );
    require(
        &mut result,
        Field::DateOfBirth,
        &draft.date_of_birth,
        DATE_OF_BIRTH_REQUIRED,
    );

    if draft.phone_number.is_empty() {
        result.insert(Field::PhoneNumber, PHONE_NUMBER_REQUIRED);
    } else if !is_valid_phone_number(&draft.phone_number) {
        result.insert(Field::PhoneNumber, PHONE_NUMBER_FORMAT);
    }

    if draft.email_address.is_empty() {
        result.insert(Field::EmailAddress, EMAIL_ADDRESS_REQUIRED);
    } else if !is_valid_email_address(&draft.email_address) {
        result.insert(Field::EmailAddress, EMAIL_ADDRESS_FORMAT);
    }

    if draft.department.parse::<Department>().is_err() {
        result.insert(Field::Department, DEPARTMENT_INVALID);
    }
    if draft.position.parse::<Position>().is_err() {
        result.insert(Field::Position, POSITION_INVALID);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_number_format() {
        assert!(is_valid_phone_number("1234567890"));
        assert!(!is_valid_phone_number("123456789"));
        assert!(!is_valid_phone_number("12345678901"));
        assert!(!is_valid_phone_number("12345-7890"));
        assert!(!is_valid_phone_number("١٢٣٤٥٦٧٨٩٠"));
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email_address("john.doe@example.com"));
        assert!(is_valid_email_address("a+tag@sub.example.org"));
        assert!(!is_valid_email_address("john.doe"));
        assert!(!is_valid_email_address("john@localhost"));
        assert!(!is_valid_email_address(".john@example.com"));
        assert!(!is_valid_email_address("john..doe@example.com"));
        assert!(!is_valid_email_address("john.@example.com"));
    }

    #[test]
    fn test_format_message_only_for_non_empty_values() {
        let draft = EmployeeDraft {
            phone_number: "12ab".to_string(),
            email_address: "nope".to_string(),
            ..EmployeeDraft::default()
        };
        let result = check_schema(&draft);
        assert_eq!(result.get(Field::PhoneNumber), Some(PHONE_NUMBER_FORMAT));
        assert_eq!(result.get(Field::EmailAddress), Some(EMAIL_ADDRESS_FORMAT));
    }

    #[test]
    fn test_enumerated_fields() {
        let draft = EmployeeDraft {
            department: "sales".to_string(),
            position: String::new(),
            ..EmployeeDraft::default()
        };
        let result = check_schema(&draft);
        assert_eq!(result.get(Field::Department), Some(DEPARTMENT_INVALID));
        assert_eq!(result.get(Field::Position), Some(POSITION_INVALID));
    }
}
