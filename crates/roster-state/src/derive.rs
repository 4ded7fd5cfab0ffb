//! Derivation pipeline - filter, sort, paginate.
//!
//! The free functions are the pure stages. [`Selectors`] chains them with a
//! memo per stage: each stage is keyed on the version of the stage before it
//! plus its own inputs, so a page change re-slices without re-filtering and
//! a sort change re-sorts without re-filtering.
//!
//! The order is fixed. Pagination only makes sense on the filtered, sorted
//! set, and the page count depends on the filtered cardinality.

use roster_model::{Employee, Pagination, SortOrder, SortState, ViewMode, ViewState};
use serde::Serialize;

use crate::records::RecordStore;
use crate::versioned::{Memo, Versioned};

/// Keep records where any text field contains `query`, ignoring case.
///
/// An empty query keeps everything.
pub fn filter_employees(employees: &[Employee], query: &str) -> Vec<Employee> {
    let needle = query.to_lowercase();
    employees
        .iter()
        .filter(|employee| matches_query(employee, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be lowercased.
pub fn matches_query(employee: &Employee, needle: &str) -> bool {
    needle.is_empty()
        || employee
            .text_fields()
            .iter()
            .any(|value| value.to_lowercase().contains(needle))
}

/// Stable sort by the configured column and direction.
pub fn sort_employees(employees: &[Employee], sort: SortState) -> Vec<Employee> {
    let mut sorted = employees.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = a.sort_key(sort.column).cmp(&b.sort_key(sort.column));
        match sort.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    sorted
}

/// Records on the current page. Empty when the page lies past the end.
pub fn paginate(employees: &[Employee], pagination: Pagination) -> Vec<Employee> {
    let (start, end) = pagination.bounds();
    let start = start.min(employees.len());
    let end = end.min(employees.len());
    employees[start..end].to_vec()
}

/// `ceil(count / page_size)`, never less than 1.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// What the list page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView {
    pub employees: Vec<Employee>,
    pub total_pages: usize,
    pub current_page: usize,
    pub view_mode: ViewMode,
    /// Records matching the search, across all pages.
    pub match_count: usize,
}

/// Memoized pipeline over a record store and view state.
#[derive(Debug, Default)]
pub struct Selectors {
    filtered: Memo<(u64, String), Vec<Employee>>,
    sorted: Memo<(u64, SortState), Vec<Employee>>,
    page: Memo<(u64, Pagination), Vec<Employee>>,
    total_pages: Memo<(u64, usize), usize>,
}

/// Per-stage recompute counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageCounts {
    pub filter: u64,
    pub sort: u64,
    pub page: u64,
    pub total_pages: u64,
}

impl Selectors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filtered(&mut self, records: &RecordStore, view: &ViewState) -> &[Employee] {
        &filter_stage(&mut self.filtered, records, view).data
    }

    pub fn sorted(&mut self, records: &RecordStore, view: &ViewState) -> &[Employee] {
        &sort_stage(&mut self.filtered, &mut self.sorted, records, view).data
    }

    pub fn page(&mut self, records: &RecordStore, view: &ViewState) -> &[Employee] {
        let sorted = sort_stage(&mut self.filtered, &mut self.sorted, records, view);
        let pagination = view.pagination;
        &self
            .page
            .get_or_compute((sorted.version, pagination), || {
                paginate(&sorted.data, pagination)
            })
            .data
    }

    pub fn total_pages(&mut self, records: &RecordStore, view: &ViewState) -> usize {
        let sorted = sort_stage(&mut self.filtered, &mut self.sorted, records, view);
        let page_size = view.pagination.page_size;
        self.total_pages
            .get_or_compute((sorted.version, page_size), || {
                total_pages(sorted.data.len(), page_size)
            })
            .data
    }

    /// Everything the list page needs in one read.
    pub fn list_view(&mut self, records: &RecordStore, view: &ViewState) -> ListView {
        let employees = self.page(records, view).to_vec();
        let match_count = self.sorted(records, view).len();
        ListView {
            employees,
            total_pages: self.total_pages(records, view),
            current_page: view.pagination.current_page,
            view_mode: view.view_mode,
            match_count,
        }
    }

    pub fn stage_counts(&self) -> StageCounts {
        StageCounts {
            filter: self.filtered.recomputes(),
            sort: self.sorted.recomputes(),
            page: self.page.recomputes(),
            total_pages: self.total_pages.recomputes(),
        }
    }

    /// Drop every cached stage.
    pub fn invalidate(&mut self) {
        self.filtered.invalidate();
        self.sorted.invalidate();
        self.page.invalidate();
        self.total_pages.invalidate();
    }
}

fn filter_stage<'a>(
    filtered: &'a mut Memo<(u64, String), Vec<Employee>>,
    records: &RecordStore,
    view: &ViewState,
) -> &'a Versioned<Vec<Employee>> {
    let key = (records.version(), view.search_query.clone());
    filtered.get_or_compute(key, || {
        tracing::trace!(query = %view.search_query, "filter stage recomputed");
        filter_employees(records.list(), &view.search_query)
    })
}

fn sort_stage<'a>(
    filtered: &mut Memo<(u64, String), Vec<Employee>>,
    sorted: &'a mut Memo<(u64, SortState), Vec<Employee>>,
    records: &RecordStore,
    view: &ViewState,
) -> &'a Versioned<Vec<Employee>> {
    let filtered = filter_stage(filtered, records, view);
    let sort = view.sort;
    sorted.get_or_compute((filtered.version, sort), || {
        tracing::trace!(column = %sort.column, order = %sort.order, "sort stage recomputed");
        sort_employees(&filtered.data, sort)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::{Department, EmployeeId, NewEmployee, Position, SortColumn};

    fn employee(id: u64, first: &str, last: &str) -> Employee {
        NewEmployee {
            first_name: first.to_string(),
            last_name: last.to_string(),
            date_of_employment: "2022-01-15".to_string(),
            date_of_birth: "1990-06-12".to_string(),
            phone_number: format!("{id:010}"),
            email_address: format!("{}@example.com", first.to_lowercase()),
            department: Department::Analytics,
            position: Position::Junior,
        }
        .with_id(EmployeeId::new(id))
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let employees = vec![employee(1, "Jane", "Doe"), employee(2, "Bob", "Smith")];
        let found = filter_employees(&employees, "DOE");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].first_name, "Jane");
    }

    #[test]
    fn test_filter_matches_enum_text() {
        let mut tech = employee(1, "Jane", "Doe");
        tech.department = Department::Tech;
        let employees = vec![tech, employee(2, "Bob", "Smith")];
        assert_eq!(filter_employees(&employees, "tec").len(), 1);
    }

    #[test]
    fn test_filter_empty_query_keeps_all() {
        let employees = vec![employee(1, "Jane", "Doe"), employee(2, "Bob", "Smith")];
        assert_eq!(filter_employees(&employees, "").len(), 2);
    }

    #[test]
    fn test_sort_descending_keeps_ties_in_order() {
        let employees = vec![
            employee(1, "Ann", "Same"),
            employee(2, "Bea", "Same"),
            employee(3, "Cid", "Alpha"),
        ];
        let sorted = sort_employees(
            &employees,
            SortState {
                column: SortColumn::LastName,
                order: SortOrder::Desc,
            },
        );
        let ids: Vec<u64> = sorted.iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_paginate_past_end_is_empty() {
        let employees = vec![employee(1, "Jane", "Doe")];
        let page = paginate(
            &employees,
            Pagination {
                current_page: 3,
                page_size: 10,
            },
        );
        assert!(page.is_empty());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 5), 5);
    }

    #[test]
    fn test_page_change_does_not_refilter() {
        let mut records = RecordStore::new();
        for (i, name) in ["Ann", "Bea", "Cid", "Dan"].iter().enumerate() {
            records.add(employee(i as u64 + 1, name, "Doe").to_new());
        }
        let mut view = ViewState::with_page_size(2);
        let mut selectors = Selectors::new();

        assert_eq!(selectors.page(&records, &view).len(), 2);
        view.pagination.current_page = 2;
        assert_eq!(selectors.page(&records, &view)[0].first_name, "Cid");

        let counts = selectors.stage_counts();
        assert_eq!(counts.filter, 1);
        assert_eq!(counts.sort, 1);
        assert_eq!(counts.page, 2);
    }

    #[test]
    fn test_record_change_recomputes_all_stages() {
        let mut records = RecordStore::new();
        records.add(employee(1, "Ann", "Doe").to_new());
        let view = ViewState::default();
        let mut selectors = Selectors::new();

        selectors.list_view(&records, &view);
        records.add(employee(2, "Bea", "Doe").to_new());
        let list = selectors.list_view(&records, &view);

        assert_eq!(list.employees.len(), 2);
        let counts = selectors.stage_counts();
        assert_eq!(counts.filter, 2);
        assert_eq!(counts.sort, 2);
        assert_eq!(counts.page, 2);
        assert_eq!(counts.total_pages, 2);
    }
}
