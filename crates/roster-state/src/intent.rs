//! User intents and how they map onto the store.

use std::time::Instant;

use roster_model::{Employee, EmployeeDraft, EmployeeId, SortColumn, ViewMode};
use roster_validate::{FormMode, ValidationResult, validate_draft};
use thiserror::Error;

use crate::route::Route;
use crate::store::Store;

/// Something a view asks the store to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Column header clicked.
    Sort(SortColumn),
    /// Remove a record once the user confirmed it.
    Delete(EmployeeId),
    /// Open the edit page for a record.
    Edit(EmployeeId),
    PageChange(usize),
    PageSizeChange(usize),
    Search(String),
    ViewModeChange(ViewMode),
    FormSubmit {
        mode: FormMode,
        draft: EmployeeDraft,
    },
}

/// What happened after an intent was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentOutcome {
    /// The store changed; stay on the current page.
    Updated,
    /// Move to another page.
    Navigate(Route),
    /// The form submission failed validation; nothing was written.
    Rejected(ValidationResult),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntentError {
    #[error("no employee with id {0}")]
    MissingRecord(EmployeeId),
    #[error("edit submission carries no employee id")]
    MissingIdentifier,
}

pub fn created_message(draft: &EmployeeDraft) -> String {
    format!("Employee {} created!", draft.full_name())
}

pub fn updated_message(draft: &EmployeeDraft) -> String {
    format!("Employee {} updated!", draft.full_name())
}

pub fn deleted_message(employee: &Employee) -> String {
    format!("Employee {} deleted successfully!", employee.full_name())
}

/// Apply `intent` to `store`.
pub fn dispatch_intent(store: &mut Store, intent: Intent) -> Result<IntentOutcome, IntentError> {
    dispatch_intent_at(store, intent, Instant::now())
}

/// Apply `intent`, timing any toast it shows from `now`.
pub fn dispatch_intent_at(
    store: &mut Store,
    intent: Intent,
    now: Instant,
) -> Result<IntentOutcome, IntentError> {
    match intent {
        Intent::Sort(column) => store.set_sort_column(column),
        Intent::Delete(id) => {
            // Deleting an absent id stays silent.
            if let Some(employee) = store.get_record(id).cloned() {
                store.delete_record(id);
                store.show_toast_at(deleted_message(&employee), now);
            }
        }
        Intent::Edit(id) => return Ok(IntentOutcome::Navigate(Route::Edit(id))),
        Intent::PageChange(page) => store.set_page(page),
        Intent::PageSizeChange(page_size) => {
            store.set_page_size(page_size);
        }
        Intent::Search(query) => store.set_search_query(query),
        Intent::ViewModeChange(mode) => store.set_view_mode(mode),
        Intent::FormSubmit { mode, draft } => return submit(store, mode, &draft, now),
    }
    Ok(IntentOutcome::Updated)
}

fn submit(
    store: &mut Store,
    mode: FormMode,
    draft: &EmployeeDraft,
    now: Instant,
) -> Result<IntentOutcome, IntentError> {
    let target = match mode {
        FormMode::Create => None,
        FormMode::Edit => {
            let id = draft.id.ok_or(IntentError::MissingIdentifier)?;
            if store.get_record(id).is_none() {
                tracing::warn!(%id, "edit submitted for missing employee");
                return Err(IntentError::MissingRecord(id));
            }
            Some(id)
        }
    };

    let candidate = match validate_draft(draft, mode, store.list_records()) {
        Ok(candidate) => candidate,
        Err(errors) => {
            tracing::info!(%mode, errors = errors.len(), "form submission rejected");
            return Ok(IntentOutcome::Rejected(errors));
        }
    };

    match target {
        None => {
            store.add_record(candidate);
            store.show_toast_at(created_message(draft), now);
        }
        Some(id) => {
            if !store.update_record(candidate.with_id(id)) {
                return Err(IntentError::MissingRecord(id));
            }
            store.show_toast_at(updated_message(draft), now);
        }
    }
    Ok(IntentOutcome::Navigate(Route::List))
}
