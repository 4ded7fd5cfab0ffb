//! End-to-end flows through intents, the store and its subscribers.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use roster_model::{Employee, EmployeeDraft, EmployeeId, SortColumn, ViewMode};
use roster_state::{
    EditSession, EmployeeForm, Intent, IntentOutcome, ListView, Route, Store, TOAST_DURATION,
    dispatch_intent, dispatch_intent_at,
};
use roster_validate::{Field, FormMode};

fn draft(first: &str, last: &str, phone: &str, email: &str) -> EmployeeDraft {
    EmployeeDraft {
        first_name: first.to_string(),
        last_name: last.to_string(),
        date_of_employment: "2022-01-15".to_string(),
        date_of_birth: "1990-06-12".to_string(),
        phone_number: phone.to_string(),
        email_address: email.to_string(),
        department: "tech".to_string(),
        position: "senior".to_string(),
        ..EmployeeDraft::default()
    }
}

fn create(store: &mut Store, draft: EmployeeDraft) -> IntentOutcome {
    dispatch_intent(
        store,
        Intent::FormSubmit {
            mode: FormMode::Create,
            draft,
        },
    )
    .expect("create")
}

#[test]
fn create_employee_shows_toast_then_hides_it() {
    let mut store = Store::new();
    let shown = Instant::now();

    let outcome = dispatch_intent_at(
        &mut store,
        Intent::FormSubmit {
            mode: FormMode::Create,
            draft: draft("Jane", "Doe", "1234567890", "jane.doe@example.com"),
        },
        shown,
    )
    .expect("create");

    assert_eq!(outcome, IntentOutcome::Navigate(Route::List));
    assert_eq!(store.list_records().len(), 1);
    assert_eq!(store.list_records()[0].id, EmployeeId::new(1));
    assert!(store.view_state().toast.is_visible);
    assert_eq!(store.view_state().toast.message, "Employee Jane Doe created!");

    assert!(!store.tick(shown + TOAST_DURATION - Duration::from_millis(1)));
    assert!(store.view_state().toast.is_visible);
    assert!(store.tick(shown + TOAST_DURATION));
    assert!(!store.view_state().toast.is_visible);
}

#[test]
fn editing_missing_employee_yields_no_working_record() {
    let store = Store::new();
    assert!(EditSession::open(&store, EmployeeId::new(1)).is_none());
}

#[test]
fn duplicate_create_reports_both_fields() {
    let mut store = Store::new();
    create(
        &mut store,
        draft("John", "Doe", "1234567890", "john.doe@example.com"),
    );

    let outcome = create(
        &mut store,
        draft("Jim", "Beam", "1234567890", "john.doe@example.com"),
    );
    let IntentOutcome::Rejected(errors) = outcome else {
        panic!("expected rejection, got {outcome:?}");
    };
    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors.get(Field::PhoneNumber),
        Some("Phone number must be unique.")
    );
    assert_eq!(
        errors.get(Field::EmailAddress),
        Some("Email address must be unique.")
    );
    assert_eq!(store.list_records().len(), 1);
}

#[test]
fn list_view_follows_search_sort_and_paging() {
    let mut store = Store::new();
    for (index, (first, last)) in [
        ("Ann", "Young"),
        ("Bob", "Xu"),
        ("Cid", "Walker"),
        ("Dee", "Vance"),
        ("Eve", "Underwood"),
    ]
    .iter()
    .enumerate()
    {
        create(
            &mut store,
            draft(
                first,
                last,
                &format!("{:010}", index + 1),
                &format!("{}@example.com", first.to_lowercase()),
            ),
        );
    }

    dispatch_intent(&mut store, Intent::PageSizeChange(2)).expect("page size");
    dispatch_intent(&mut store, Intent::Sort(SortColumn::LastName)).expect("sort");
    dispatch_intent(&mut store, Intent::PageChange(3)).expect("page");

    let view = store.list_view();
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.current_page, 3);
    let names: Vec<&str> = view.employees.iter().map(|e| e.last_name.as_str()).collect();
    assert_eq!(names, vec!["Young"]);

    dispatch_intent(&mut store, Intent::Search("walk".to_string())).expect("search");
    let view = store.list_view();
    assert_eq!(view.current_page, 1);
    assert_eq!(view.match_count, 1);
    assert_eq!(view.employees[0].first_name, "Cid");
}

#[test]
fn subscribers_see_every_change_until_they_leave() {
    let mut store = Store::new();
    let seen: Arc<Mutex<Vec<ViewMode>>> = Arc::default();
    let log = Arc::clone(&seen);
    let id = store.subscribe(move |view: &ListView| {
        log.lock().expect("log").push(view.view_mode);
    });

    dispatch_intent(&mut store, Intent::ViewModeChange(ViewMode::Grid)).expect("grid");
    dispatch_intent(&mut store, Intent::ViewModeChange(ViewMode::Table)).expect("table");
    assert!(store.unsubscribe(id));
    dispatch_intent(&mut store, Intent::ViewModeChange(ViewMode::Grid)).expect("grid");

    assert_eq!(
        *seen.lock().expect("log"),
        vec![ViewMode::Grid, ViewMode::Table]
    );
}

#[test]
fn form_edit_round_trip() {
    let mut store = Store::new();
    create(
        &mut store,
        draft("John", "Doe", "1234567890", "john.doe@example.com"),
    );
    store.settle();

    let mut session = EditSession::open(&store, EmployeeId::new(1)).expect("session");
    session.form_mut().set_field(Field::EmailAddress, "not-an-email");
    assert!(session.form_mut().submit(&store).is_none());
    assert_eq!(
        session.form().errors().get(Field::EmailAddress),
        Some("Invalid email address.")
    );

    session
        .form_mut()
        .set_field(Field::EmailAddress, "johnny@example.com");
    let intent = session.form_mut().submit(&store).expect("valid");
    let outcome = dispatch_intent(&mut store, intent).expect("edit");

    assert_eq!(outcome, IntentOutcome::Navigate(Route::List));
    let stored = store.get_record(EmployeeId::new(1)).expect("stored");
    assert_eq!(stored.email_address, "johnny@example.com");
    assert_eq!(store.view_state().toast.message, "Employee John Doe updated!");
}

#[test]
fn blank_create_form_reports_six_required_fields() {
    let store = Store::new();
    let mut form = EmployeeForm::create();
    assert!(form.submit(&store).is_none());
    assert_eq!(form.errors().len(), 6);
}

#[test]
fn snapshot_restores_identical_state() {
    let mut store = Store::new();
    create(
        &mut store,
        draft("Jane", "Doe", "1234567890", "jane.doe@example.com"),
    );
    dispatch_intent(&mut store, Intent::ViewModeChange(ViewMode::Grid)).expect("grid");
    dispatch_intent(&mut store, Intent::Search("doe".to_string())).expect("search");

    let saved = store.snapshot();
    let json = serde_json::to_string(&saved).expect("serialize");
    let restored = Store::from_snapshot(serde_json::from_str(&json).expect("deserialize"));

    assert_eq!(restored.list_records(), store.list_records());
    assert_eq!(restored.view_state(), store.view_state());
}

#[test]
fn page_far_past_the_end_shows_nothing() {
    let mut store = Store::new();
    create(
        &mut store,
        draft("Jane", "Doe", "1234567890", "jane.doe@example.com"),
    );

    dispatch_intent(&mut store, Intent::PageChange(usize::MAX)).expect("page change");

    let view = store.list_view();
    assert!(view.employees.is_empty());
    assert_eq!(view.current_page, usize::MAX);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.match_count, 1);
}

#[test]
fn create_after_restoring_largest_id() {
    let restored = draft("John", "Doe", "2222222222", "john.doe@example.com");
    let mut snapshot = roster_model::AppSnapshot::default();
    snapshot.employees.push(Employee {
        id: EmployeeId::new(u64::MAX),
        first_name: restored.first_name,
        last_name: restored.last_name,
        date_of_employment: restored.date_of_employment,
        date_of_birth: restored.date_of_birth,
        phone_number: restored.phone_number,
        email_address: restored.email_address,
        department: roster_model::Department::Tech,
        position: roster_model::Position::Senior,
    });
    let mut store = Store::from_snapshot(snapshot);

    create(
        &mut store,
        draft("Jane", "Doe", "1234567890", "jane.doe@example.com"),
    );

    let ids: Vec<_> = store.list_records().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![EmployeeId::new(u64::MAX), EmployeeId::new(1)]);
}
