//! View-state store - list page UI state and the toast timer.

use std::time::{Duration, Instant};

use roster_model::{SortColumn, ViewMode, ViewState};

/// How long a toast stays visible after being shown.
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

/// UI state plus the pending toast deadline.
///
/// Only one hide is ever pending: showing a toast while another is visible
/// replaces the message and pushes the deadline out to a full duration
/// from the new show.
#[derive(Debug, Clone)]
pub struct ViewStateStore {
    state: ViewState,
    toast_duration: Duration,
    toast_deadline: Option<Instant>,
}

impl Default for ViewStateStore {
    fn default() -> Self {
        Self::new(ViewState::default())
    }
}

impl ViewStateStore {
    pub fn new(state: ViewState) -> Self {
        Self {
            state,
            toast_duration: TOAST_DURATION,
            toast_deadline: None,
        }
    }

    /// Override the toast lifetime.
    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn toast_duration(&self) -> Duration {
        self.toast_duration
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.state.view_mode = mode;
    }

    /// Sort by `column`; a repeat of the active column flips the direction,
    /// a new column starts ascending.
    pub fn set_sort_column(&mut self, column: SortColumn) {
        let sort = &mut self.state.sort;
        if sort.column == column {
            sort.order = sort.order.toggled();
        } else {
            sort.column = column;
            sort.order = Default::default();
        }
    }

    /// Replace the search text and return to the first page.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.state.search_query = query.into();
        self.state.pagination.current_page = 1;
    }

    /// Pages are 1-based; 0 is treated as 1.
    pub fn set_page(&mut self, page: usize) {
        self.state.pagination.current_page = page.max(1);
    }

    /// Returns `false` (and changes nothing) for a zero page size.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if page_size == 0 {
            return false;
        }
        self.state.pagination.page_size = page_size;
        true
    }

    /// Show `message` and schedule its hide relative to `now`.
    pub fn show_toast_at(&mut self, message: impl Into<String>, now: Instant) {
        self.state.toast.message = message.into();
        self.state.toast.is_visible = true;
        self.toast_deadline = Some(now + self.toast_duration);
    }

    /// Hide the toast and cancel any pending deadline.
    pub fn hide_toast(&mut self) {
        self.state.toast.is_visible = false;
        self.toast_deadline = None;
    }

    pub fn toast_deadline(&self) -> Option<Instant> {
        self.toast_deadline
    }

    /// Fire the toast deadline if it has passed. Returns whether anything
    /// changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.toast_deadline {
            Some(deadline) if deadline <= now => {
                self.hide_toast();
                true
            }
            _ => false,
        }
    }

    /// Fire the pending deadline immediately, if any.
    pub fn settle(&mut self) -> bool {
        if self.toast_deadline.is_some() {
            self.hide_toast();
            true
        } else {
            false
        }
    }

    /// Give a restored visible toast a fresh deadline.
    pub(crate) fn reschedule_restored_toast(&mut self, now: Instant) {
        if self.state.toast.is_visible {
            self.toast_deadline = Some(now + self.toast_duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::SortOrder;

    #[test]
    fn test_sort_toggles_on_same_column() {
        let mut store = ViewStateStore::default();
        store.set_sort_column(SortColumn::Id);
        assert_eq!(store.state().sort.order, SortOrder::Desc);
        store.set_sort_column(SortColumn::Id);
        assert_eq!(store.state().sort.order, SortOrder::Asc);
    }

    #[test]
    fn test_sort_new_column_resets_to_ascending() {
        let mut store = ViewStateStore::default();
        store.set_sort_column(SortColumn::Id);
        store.set_sort_column(SortColumn::LastName);
        assert_eq!(store.state().sort.column, SortColumn::LastName);
        assert_eq!(store.state().sort.order, SortOrder::Asc);
    }

    #[test]
    fn test_search_resets_page() {
        let mut store = ViewStateStore::default();
        store.set_page(7);
        store.set_search_query("doe");
        assert_eq!(store.state().pagination.current_page, 1);
        assert_eq!(store.state().search_query, "doe");
    }

    #[test]
    fn test_page_size_zero_rejected() {
        let mut store = ViewStateStore::default();
        assert!(!store.set_page_size(0));
        assert_eq!(store.state().pagination.page_size, 10);
        assert!(store.set_page_size(25));
        assert_eq!(store.state().pagination.page_size, 25);
    }

    #[test]
    fn test_toast_hides_after_duration() {
        let mut store = ViewStateStore::default();
        let shown = Instant::now();
        store.show_toast_at("Saved", shown);
        assert!(store.state().toast.is_visible);

        assert!(!store.tick(shown + Duration::from_millis(2999)));
        assert!(store.state().toast.is_visible);

        assert!(store.tick(shown + TOAST_DURATION));
        assert!(!store.state().toast.is_visible);
        assert_eq!(store.state().toast.message, "Saved");
    }

    #[test]
    fn test_second_show_reschedules_hide() {
        let mut store = ViewStateStore::default();
        let first = Instant::now();
        store.show_toast_at("First", first);
        let second = first + Duration::from_millis(2000);
        store.show_toast_at("Second", second);

        // The first show's deadline no longer hides the second toast.
        assert!(!store.tick(first + TOAST_DURATION));
        assert!(store.state().toast.is_visible);
        assert_eq!(store.state().toast.message, "Second");

        assert!(store.tick(second + TOAST_DURATION));
        assert!(!store.state().toast.is_visible);
    }

    #[test]
    fn test_hide_cancels_deadline() {
        let mut store = ViewStateStore::default();
        store.show_toast_at("Bye", Instant::now());
        store.hide_toast();
        assert_eq!(store.toast_deadline(), None);
        assert!(!store.settle());
    }
}
