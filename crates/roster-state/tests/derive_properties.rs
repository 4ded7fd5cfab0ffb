//! Property tests for the filter, sort and paginate stages.

use proptest::prelude::*;
use roster_model::{
    Department, Employee, EmployeeId, NewEmployee, Pagination, Position, SortColumn, SortOrder,
    SortState,
};
use roster_state::{
    ViewStateStore, filter_employees, matches_query, paginate, sort_employees, total_pages,
};

fn arb_department() -> impl Strategy<Value = Department> {
    prop_oneof![Just(Department::Analytics), Just(Department::Tech)]
}

fn arb_position() -> impl Strategy<Value = Position> {
    prop_oneof![
        Just(Position::Junior),
        Just(Position::Medior),
        Just(Position::Senior)
    ]
}

fn arb_column() -> impl Strategy<Value = SortColumn> {
    prop::sample::select(SortColumn::ALL.to_vec())
}

/// Small alphabet so that queries and sort keys collide often.
fn arb_employees() -> impl Strategy<Value = Vec<Employee>> {
    prop::collection::vec(
        (
            "[a-cA-C]{0,4}",
            "[a-cA-C]{0,4}",
            "[0-9]{10}",
            arb_department(),
            arb_position(),
        ),
        0..30,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, (first, last, phone, department, position))| {
                NewEmployee {
                    email_address: format!("{}{index}@example.com", first.to_lowercase()),
                    first_name: first,
                    last_name: last,
                    date_of_employment: "2022-01-15".to_string(),
                    date_of_birth: "1990-06-12".to_string(),
                    phone_number: phone,
                    department,
                    position,
                }
                .with_id(EmployeeId::new(index as u64 + 1))
            })
            .collect()
    })
}

proptest! {
    /// Every kept record matches and every record is kept at most once.
    #[test]
    fn prop_filter_is_matching_subset(employees in arb_employees(), query in "[a-cA-C]{0,2}") {
        let filtered = filter_employees(&employees, &query);
        let needle = query.to_lowercase();
        prop_assert!(filtered.len() <= employees.len());
        for employee in &filtered {
            prop_assert!(employees.contains(employee));
            prop_assert!(employee
                .text_fields()
                .iter()
                .any(|value| value.to_lowercase().contains(&needle)));
        }
        let expected = employees.iter().filter(|e| matches_query(e, &needle)).count();
        prop_assert_eq!(filtered.len(), expected);
    }

    /// Sorting keeps the size, orders by key and leaves equal keys in input order.
    #[test]
    fn prop_sort_is_stable_permutation(employees in arb_employees(), column in arb_column(), desc in any::<bool>()) {
        let order = if desc { SortOrder::Desc } else { SortOrder::Asc };
        let sorted = sort_employees(&employees, SortState { column, order });
        prop_assert_eq!(sorted.len(), employees.len());

        let position = |employee: &Employee| employees.iter().position(|e| e.id == employee.id);
        for pair in sorted.windows(2) {
            let (a, b) = (pair[0].sort_key(column), pair[1].sort_key(column));
            match order {
                SortOrder::Asc => prop_assert!(a <= b),
                SortOrder::Desc => prop_assert!(a >= b),
            }
            if a == b {
                prop_assert!(position(&pair[0]) < position(&pair[1]));
            }
        }
    }

    /// Selecting the same column twice more restores the first ordering.
    #[test]
    fn prop_double_sort_toggles_back(employees in arb_employees(), column in arb_column()) {
        let mut view = ViewStateStore::default();
        view.set_sort_column(column);
        let first = view.state().sort;
        view.set_sort_column(column);
        let flipped = view.state().sort;
        view.set_sort_column(column);
        let restored = view.state().sort;

        prop_assert_ne!(first.order, flipped.order);
        prop_assert_eq!(restored, first);

        let ascending = sort_employees(&employees, first);
        let flipped_rows = sort_employees(&employees, flipped);
        let mut reversed_keys: Vec<_> = ascending.iter().map(|e| e.sort_key(column)).collect();
        reversed_keys.reverse();
        let flipped_keys: Vec<_> = flipped_rows.iter().map(|e| e.sort_key(column)).collect();
        prop_assert_eq!(flipped_keys, reversed_keys);
        prop_assert_eq!(sort_employees(&employees, restored), ascending);
    }

    #[test]
    fn prop_total_pages_formula(count in 0usize..10_000, page_size in 1usize..500) {
        let pages = total_pages(count, page_size);
        prop_assert_eq!(pages, count.div_ceil(page_size).max(1));
        prop_assert!(pages >= 1);
    }

    /// Pages partition the sorted set.
    #[test]
    fn prop_pages_cover_everything_once(employees in arb_employees(), page_size in 1usize..8) {
        let pages = total_pages(employees.len(), page_size);
        let mut joined = Vec::new();
        for current_page in 1..=pages {
            joined.extend(paginate(&employees, Pagination { current_page, page_size }));
        }
        prop_assert_eq!(joined, employees.clone());
        let past_end = paginate(&employees, Pagination { current_page: pages + 1, page_size });
        prop_assert!(past_end.is_empty());
    }

    #[test]
    fn prop_search_resets_page(page in 1usize..1000, query in ".{0,8}") {
        let mut view = ViewStateStore::default();
        view.set_page(page);
        view.set_search_query(query);
        prop_assert_eq!(view.state().pagination.current_page, 1);
    }
}
