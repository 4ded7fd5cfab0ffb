//! Save/restore through real slots.

use roster_model::{
    AppSnapshot, Department, EmployeeDraft, EmployeeId, NewEmployee, Position, SortColumn,
    ViewMode,
};
use roster_persistence::{
    FileSlot, KeyValueSlot, MemorySlot, STATE_KEY, load_state, open_store, save_state,
    try_load_state,
};
use roster_state::{Intent, Store, dispatch_intent};
use roster_validate::FormMode;
use tempfile::tempdir;

fn jane() -> NewEmployee {
    NewEmployee {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        date_of_employment: "2022-01-15".to_string(),
        date_of_birth: "1990-06-12".to_string(),
        phone_number: "1234567890".to_string(),
        email_address: "jane.doe@example.com".to_string(),
        department: Department::Tech,
        position: Position::Senior,
    }
}

#[test]
fn blob_layout() {
    let snapshot = AppSnapshot {
        employees: vec![jane().with_id(EmployeeId::new(1))],
        ..AppSnapshot::default()
    };
    insta::assert_json_snapshot!(snapshot, @r#"
    {
      "employees": [
        {
          "id": 1,
          "firstName": "Jane",
          "lastName": "Doe",
          "dateOfEmployment": "2022-01-15",
          "dateOfBirth": "1990-06-12",
          "phoneNumber": "1234567890",
          "emailAddress": "jane.doe@example.com",
          "department": "tech",
          "position": "senior"
        }
      ],
      "app": {
        "viewMode": "table",
        "searchQuery": "",
        "sort": {
          "column": "id",
          "order": "asc"
        },
        "pagination": {
          "currentPage": 1,
          "pageSize": 10
        },
        "toast": {
          "message": "",
          "isVisible": false
        }
      }
    }
    "#);
}

#[test]
fn file_slot_round_trip_restores_identical_state() {
    let dir = tempdir().unwrap();

    let mut store = open_store(FileSlot::new(dir.path()));
    store.add_record(jane());
    store.set_sort_column(SortColumn::LastName);
    store.set_sort_column(SortColumn::LastName);
    store.set_view_mode(ViewMode::Grid);
    store.set_page_size(25);
    let expected = store.snapshot();
    drop(store);

    let restored = open_store(FileSlot::new(dir.path()));
    assert_eq!(restored.snapshot(), expected);
    assert_eq!(restored.list_records().len(), 1);
}

#[test]
fn corrupt_file_falls_back_to_default() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("state.json"), "not json at all").unwrap();

    let slot = FileSlot::new(dir.path());
    assert!(try_load_state(&slot).is_err());
    assert_eq!(load_state(&slot), AppSnapshot::default());

    let store = open_store(slot);
    assert!(store.list_records().is_empty());
}

#[test]
fn create_through_intent_is_saved() {
    let slot = MemorySlot::new();
    let mut store = open_store(slot.clone());
    let draft = EmployeeDraft::from(&jane());

    dispatch_intent(
        &mut store,
        Intent::FormSubmit {
            mode: FormMode::Create,
            draft,
        },
    )
    .unwrap();

    let saved = load_state(&slot);
    assert_eq!(saved.employees.len(), 1);
    assert!(saved.app.toast.is_visible);
    assert_eq!(saved.app.toast.message, "Employee Jane Doe created!");
}

#[test]
fn restored_visible_toast_still_expires() {
    let mut slot = MemorySlot::new();
    let mut snapshot = AppSnapshot::default();
    snapshot.app.toast.message = "Employee Jane Doe created!".to_string();
    snapshot.app.toast.is_visible = true;
    save_state(&mut slot, &snapshot).unwrap();

    let mut store = open_store(slot.clone());
    assert!(store.toast_deadline().is_some());
    assert!(store.settle());
    assert!(!load_state(&slot).app.toast.is_visible);
}

#[test]
fn unwritable_directory_keeps_memory_state() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "a file, not a directory").unwrap();

    let mut store = Store::new().with_sink(roster_persistence::SlotSink::new(FileSlot::new(
        blocker.join("data"),
    )));
    store.add_record(jane());
    assert_eq!(store.list_records().len(), 1);

    let slot = FileSlot::new(blocker.join("data"));
    assert!(slot.read(STATE_KEY).is_err() || slot.read(STATE_KEY).unwrap().is_none());
}
