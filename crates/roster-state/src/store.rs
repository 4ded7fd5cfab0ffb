//! The application store.
//!
//! [`Store`] owns the record collection, the view state and the derivation
//! memos. Every mutating call is followed by a commit: the combined state is
//! handed to the persistence sink (if any) and every subscriber receives the
//! freshly derived [`ListView`].

use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

use roster_model::{
    AppSnapshot, Employee, EmployeeId, NewEmployee, SortColumn, ViewMode, ViewState,
};

use crate::derive::{ListView, Selectors, StageCounts};
use crate::records::RecordStore;
use crate::view::ViewStateStore;

/// Error type a sink may return. Sinks live in other crates.
pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// Receives the combined state after every change.
pub trait StateSink: Send {
    fn persist(&mut self, snapshot: &AppSnapshot) -> Result<(), SinkError>;
}

/// Called with the derived list view after every change.
pub type Listener = Box<dyn FnMut(&ListView) + Send>;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub struct Store {
    records: RecordStore,
    view: ViewStateStore,
    selectors: Selectors,
    listeners: BTreeMap<SubscriptionId, Listener>,
    next_subscription: u64,
    sink: Option<Box<dyn StateSink>>,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("records", &self.records)
            .field("view", &self.view)
            .field("listeners", &self.listeners.len())
            .field("has_sink", &self.sink.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Empty store with default view state.
    pub fn new() -> Self {
        Self::from_parts(RecordStore::new(), ViewStateStore::default())
    }

    /// Restore from persisted state. A toast that was visible when the state
    /// was saved gets a fresh hide deadline.
    pub fn from_snapshot(snapshot: AppSnapshot) -> Self {
        Self::from_snapshot_at(snapshot, Instant::now())
    }

    pub fn from_snapshot_at(snapshot: AppSnapshot, now: Instant) -> Self {
        let AppSnapshot { employees, app } = snapshot;
        tracing::debug!(records = employees.len(), "restoring store");
        let mut store = Self::from_parts(
            RecordStore::from_records(employees),
            ViewStateStore::new(app),
        );
        store.view.reschedule_restored_toast(now);
        store
    }

    fn from_parts(records: RecordStore, view: ViewStateStore) -> Self {
        Self {
            records,
            view,
            selectors: Selectors::new(),
            listeners: BTreeMap::new(),
            next_subscription: 0,
            sink: None,
        }
    }

    /// Persist through `sink` after every change.
    pub fn with_sink(mut self, sink: impl StateSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        let now = Instant::now();
        self.view = self.view.with_toast_duration(duration);
        self.view.reschedule_restored_toast(now);
        self
    }

    // =========================================================================
    // Records
    // =========================================================================

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    /// All records in insertion order.
    pub fn list_records(&self) -> &[Employee] {
        self.records.list()
    }

    pub fn get_record(&self, id: EmployeeId) -> Option<&Employee> {
        self.records.get(id)
    }

    /// Add a record under a fresh identifier. Performs no validation.
    pub fn add_record(&mut self, candidate: NewEmployee) -> Employee {
        let employee = self.records.add(candidate);
        tracing::info!(id = %employee.id, "employee added");
        self.commit();
        employee
    }

    /// Replace the record sharing `employee.id`; `false` when it is absent.
    pub fn update_record(&mut self, employee: Employee) -> bool {
        let id = employee.id;
        let updated = self.records.update(employee);
        if updated {
            tracing::info!(%id, "employee updated");
        } else {
            tracing::warn!(%id, "update ignored, no such employee");
        }
        self.commit();
        updated
    }

    /// Remove the record with `id`; `false` when it was already absent.
    pub fn delete_record(&mut self, id: EmployeeId) -> bool {
        let removed = self.records.delete(id);
        if removed {
            tracing::info!(%id, "employee deleted");
        } else {
            tracing::warn!(%id, "delete ignored, no such employee");
        }
        self.commit();
        removed
    }

    pub fn replace_records(&mut self, records: Vec<Employee>) {
        tracing::info!(records = records.len(), "replacing all employees");
        self.records.replace_all(records);
        self.commit();
    }

    // =========================================================================
    // View state
    // =========================================================================

    pub fn view_state(&self) -> &ViewState {
        self.view.state()
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        tracing::debug!(%mode, "view mode changed");
        self.view.set_view_mode(mode);
        self.commit();
    }

    pub fn set_sort_column(&mut self, column: SortColumn) {
        self.view.set_sort_column(column);
        let sort = self.view.state().sort;
        tracing::debug!(column = %sort.column, order = %sort.order, "sort changed");
        self.commit();
    }

    /// Also returns to the first page.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.view.set_search_query(query);
        tracing::debug!(
            query_len = self.view.state().search_query.len(),
            "search query changed"
        );
        self.commit();
    }

    pub fn set_page(&mut self, page: usize) {
        self.view.set_page(page);
        tracing::debug!(page = self.view.state().pagination.current_page, "page changed");
        self.commit();
    }

    /// A zero page size is ignored and reported as `false`.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if !self.view.set_page_size(page_size) {
            tracing::warn!(page_size, "page size must be positive, ignoring");
            return false;
        }
        tracing::debug!(page_size, "page size changed");
        self.commit();
        true
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.show_toast_at(message, Instant::now());
    }

    /// Show `message`, hiding it one toast duration after `now`.
    pub fn show_toast_at(&mut self, message: impl Into<String>, now: Instant) {
        self.view.show_toast_at(message, now);
        tracing::debug!(duration = ?self.view.toast_duration(), "toast shown");
        self.commit();
    }

    pub fn hide_toast(&mut self) {
        self.view.hide_toast();
        self.commit();
    }

    pub fn toast_deadline(&self) -> Option<Instant> {
        self.view.toast_deadline()
    }

    /// Hide the toast if its deadline has passed at `now`.
    pub fn tick(&mut self, now: Instant) -> bool {
        let fired = self.view.tick(now);
        if fired {
            tracing::debug!("toast expired");
            self.commit();
        }
        fired
    }

    /// Fire a pending toast deadline immediately.
    pub fn settle(&mut self) -> bool {
        let fired = self.view.settle();
        if fired {
            self.commit();
        }
        fired
    }

    // =========================================================================
    // Derived data
    // =========================================================================

    pub fn list_view(&mut self) -> ListView {
        self.selectors.list_view(&self.records, self.view.state())
    }

    /// Records on the current page, after search and sort.
    pub fn page_records(&mut self) -> &[Employee] {
        self.selectors.page(&self.records, self.view.state())
    }

    pub fn total_pages(&mut self) -> usize {
        self.selectors.total_pages(&self.records, self.view.state())
    }

    pub fn stage_counts(&self) -> StageCounts {
        self.selectors.stage_counts()
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Register `listener`; it runs after every change until unsubscribed.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&ListView) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.insert(id, Box::new(listener));
        tracing::trace!(subscription = %id, "subscribed");
        id
    }

    /// Returns `false` if `id` was not (or no longer) subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let removed = self.listeners.remove(&id).is_some();
        if !removed {
            tracing::warn!(subscription = %id, "unsubscribe of unknown subscription");
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    pub fn snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            employees: self.records.list().to_vec(),
            app: self.view.state().clone(),
        }
    }

    fn commit(&mut self) {
        self.persist();
        self.notify();
    }

    fn persist(&mut self) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        let snapshot = AppSnapshot {
            employees: self.records.list().to_vec(),
            app: self.view.state().clone(),
        };
        if let Err(error) = sink.persist(&snapshot) {
            tracing::error!(%error, "failed to persist state, keeping in-memory state");
        }
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let list = self.selectors.list_view(&self.records, self.view.state());
        for listener in self.listeners.values_mut() {
            listener(&list);
        }
    }
}
