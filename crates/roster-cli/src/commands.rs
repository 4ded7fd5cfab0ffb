//! Command execution against a store.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use roster_model::{AppSnapshot, ViewState};
use roster_persistence::{KeyValueSlot, open_store_or};
use roster_state::{
    EditSession, EmployeeForm, Intent, IntentOutcome, Route, Store, dispatch_intent,
};
use roster_validate::ValidationResult;

use crate::cli::{Command, EmployeeArgs};
use crate::logging::redact_value;
use crate::render::{render_employee, render_form, render_list, render_toast};
use crate::settings::Settings;

/// How a command ended, short of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The form was not saved.
    Rejected(ValidationResult),
}

/// Restore the store from `slot` and keep saving to it.
///
/// With no saved state yet, the configured page size applies. Unreadable
/// state is reported and treated the same way.
pub fn open_roster<S: KeyValueSlot + 'static>(slot: S, settings: &Settings) -> Store {
    open_store_or(slot, || AppSnapshot {
        employees: Vec::new(),
        app: settings
            .display
            .page_size
            .map(ViewState::with_page_size)
            .unwrap_or_default(),
    })
}

/// Question asked before a record is deleted.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this employee?";

/// Run `command`, writing what the user sees to `out`.
///
/// Confirmations are read from `input`.
pub fn execute(
    store: &mut Store,
    command: &Command,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Outcome> {
    match command {
        Command::List => print_list(store, out)?,
        Command::Show { id } => {
            let Some(employee) = store.get_record(*id) else {
                bail!("no employee with id {id}");
            };
            write!(out, "{}", render_employee(employee))?;
        }
        Command::Create(fields) => return create(store, fields, out),
        Command::Edit { id, fields } => {
            let Some(session) = EditSession::open(store, *id) else {
                bail!("no employee with id {id}");
            };
            return edit(store, session, fields, out);
        }
        Command::Delete { id, yes } => {
            if store.get_record(*id).is_none() {
                writeln!(out, "No employee with id {id}.")?;
            } else if !*yes && !confirm(DELETE_PROMPT, input, out)? {
                writeln!(out, "Delete cancelled.")?;
                return Ok(Outcome::Done);
            }
            apply(store, Intent::Delete(*id))?;
            print_list(store, out)?;
        }
        Command::Search { query } => {
            debug!(query = %redact_value(query), "searching");
            apply(store, Intent::Search(query.clone()))?;
            print_list(store, out)?;
        }
        Command::Sort { column } => {
            apply(store, Intent::Sort(*column))?;
            print_list(store, out)?;
        }
        Command::Page { page } => {
            apply(store, Intent::PageChange(*page))?;
            print_list(store, out)?;
        }
        Command::PageSize { size } => {
            if *size == 0 {
                bail!("page size must be at least 1");
            }
            apply(store, Intent::PageSizeChange(*size))?;
            print_list(store, out)?;
        }
        Command::View { mode } => {
            apply(store, Intent::ViewModeChange((*mode).into()))?;
            print_list(store, out)?;
        }
        Command::Open { path, fields } => return open(store, path, fields, out),
    }
    Ok(Outcome::Done)
}

fn open(store: &mut Store, path: &str, fields: &EmployeeArgs, out: &mut impl Write) -> Result<Outcome> {
    let route: Route = path.parse().with_context(|| format!("open {path}"))?;
    debug!(%route, "opening page");
    match route {
        Route::List => print_list(store, out)?,
        Route::Create if fields.is_empty() => {
            write!(out, "{}", render_form("New employee", &EmployeeForm::create()))?;
        }
        Route::Create => return create(store, fields, out),
        Route::Edit(id) => {
            let Some(session) = EditSession::open(store, id) else {
                writeln!(out, "No employee with id {id}.")?;
                return Ok(Outcome::Done);
            };
            if fields.is_empty() {
                let title = format!("Edit employee {id}");
                write!(out, "{}", render_form(&title, session.form()))?;
            } else {
                return edit(store, session, fields, out);
            }
        }
    }
    Ok(Outcome::Done)
}

fn create(store: &mut Store, fields: &EmployeeArgs, out: &mut impl Write) -> Result<Outcome> {
    let mut form = EmployeeForm::create();
    for (field, value) in fields.values() {
        form.set_field(field, value);
    }
    debug!(name = %redact_value(&form.draft().full_name()), "submitting create form");
    submit(store, &mut form, out)
}

fn edit(
    store: &mut Store,
    mut session: EditSession,
    fields: &EmployeeArgs,
    out: &mut impl Write,
) -> Result<Outcome> {
    for (field, value) in fields.values() {
        session.form_mut().set_field(field, value);
    }
    debug!(id = %session.id(), "submitting edit form");
    submit(store, session.form_mut(), out)
}

fn submit(store: &mut Store, form: &mut EmployeeForm, out: &mut impl Write) -> Result<Outcome> {
    let Some(intent) = form.submit(store) else {
        return Ok(Outcome::Rejected(form.errors().clone()));
    };
    match dispatch_intent(store, intent)? {
        IntentOutcome::Rejected(errors) => Ok(Outcome::Rejected(errors)),
        IntentOutcome::Navigate(route) => {
            info!(mode = %form.mode(), %route, "form saved");
            let toast = store.view_state().toast.clone();
            writeln!(out, "{}", render_toast(&toast))?;
            Ok(Outcome::Done)
        }
        IntentOutcome::Updated => Ok(Outcome::Done),
    }
}

/// Ask a yes/no question; anything but `y` or `yes` declines.
fn confirm(question: &str, input: &mut impl BufRead, out: &mut impl Write) -> Result<bool> {
    write!(out, "{question} [y/N] ")?;
    out.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer).context("read confirmation")?;
    writeln!(out)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(matches!(answer.as_str(), "y" | "yes"))
}

fn apply(store: &mut Store, intent: Intent) -> Result<()> {
    dispatch_intent(store, intent)?;
    Ok(())
}

fn print_list(store: &mut Store, out: &mut impl Write) -> Result<()> {
    let view = store.list_view();
    let state = store.view_state();
    write!(out, "{}", render_list(&view, state.sort, &state.toast))?;
    Ok(())
}
