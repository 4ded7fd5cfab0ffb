//! Create and edit forms.

use roster_model::{EmployeeDraft, EmployeeId};
use roster_validate::{Field, FormMode, ValidationResult, validate};

use crate::intent::Intent;
use crate::store::Store;

/// Working copy of an employee being created or edited, with the errors
/// from the last submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeForm {
    mode: FormMode,
    draft: EmployeeDraft,
    errors: ValidationResult,
}

impl EmployeeForm {
    /// Blank form.
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: EmployeeDraft::default(),
            errors: ValidationResult::new(),
        }
    }

    /// Form prefilled from an existing draft carrying its id.
    pub fn edit(draft: EmployeeDraft) -> Self {
        Self {
            mode: FormMode::Edit,
            draft,
            errors: ValidationResult::new(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    pub fn submit_label(&self) -> &'static str {
        self.mode.submit_label()
    }

    pub fn field(&self, field: Field) -> &str {
        let draft = &self.draft;
        match field {
            Field::FirstName => &draft.first_name,
            Field::LastName => &draft.last_name,
            Field::DateOfEmployment => &draft.date_of_employment,
            Field::DateOfBirth => &draft.date_of_birth,
            Field::PhoneNumber => &draft.phone_number,
            Field::EmailAddress => &draft.email_address,
            Field::Department => &draft.department,
            Field::Position => &draft.position,
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let draft = &mut self.draft;
        match field {
            Field::FirstName => draft.first_name = value,
            Field::LastName => draft.last_name = value,
            Field::DateOfEmployment => draft.date_of_employment = value,
            Field::DateOfBirth => draft.date_of_birth = value,
            Field::PhoneNumber => draft.phone_number = value,
            Field::EmailAddress => draft.email_address = value,
            Field::Department => draft.department = value,
            Field::Position => draft.position = value,
        }
    }

    /// Validate against `store`. On success returns the submit intent, on
    /// failure keeps the errors on the form and returns `None`.
    pub fn submit(&mut self, store: &Store) -> Option<Intent> {
        self.errors = validate(&self.draft, self.mode, store.list_records(), self.draft.id);
        if !self.errors.is_valid() {
            return None;
        }
        Some(Intent::FormSubmit {
            mode: self.mode,
            draft: self.draft.clone(),
        })
    }
}

/// The edit page for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    id: EmployeeId,
    form: EmployeeForm,
}

impl EditSession {
    /// Load the working record for `id`. `None` when no such record exists.
    pub fn open(store: &Store, id: EmployeeId) -> Option<Self> {
        let Some(employee) = store.get_record(id) else {
            tracing::warn!(%id, "edit requested for missing employee");
            return None;
        };
        Some(Self {
            id,
            form: EmployeeForm::edit(EmployeeDraft::from(employee)),
        })
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EmployeeForm {
        &mut self.form
    }

    /// The record as currently edited.
    pub fn working_record(&self) -> &EmployeeDraft {
        self.form.draft()
    }
}
