//! Record store - the ordered employee collection.

use roster_model::{Employee, EmployeeId, NewEmployee};

/// Insertion-ordered employee records with a change counter.
///
/// The store assigns identifiers but performs no uniqueness checks on
/// phone number or email address; callers validate before adding.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Employee>,
    /// Incremented on every change to `records`.
    version: u64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Employee>) -> Self {
        Self {
            records,
            version: 0,
        }
    }

    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[Employee] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.records.iter().find(|e| e.id == id)
    }

    /// Identifier the next added record will receive.
    ///
    /// One past the largest id in use. When that would overflow, the lowest
    /// unused id is handed out instead.
    pub fn next_id(&self) -> EmployeeId {
        let Some(max) = self.records.iter().map(|e| e.id).max() else {
            return EmployeeId::new(1);
        };
        max.next().unwrap_or_else(|| {
            let id = self.lowest_unused_id();
            tracing::warn!(%id, "largest employee id in use, reusing a free id");
            id
        })
    }

    fn lowest_unused_id(&self) -> EmployeeId {
        let mut used: Vec<u64> = self
            .records
            .iter()
            .map(|e| e.id.get())
            .filter(|id| *id > 0)
            .collect();
        used.sort_unstable();
        used.dedup();
        let free = used
            .iter()
            .zip(1u64..)
            .find(|(id, expected)| **id != *expected)
            .map_or(used.len() as u64 + 1, |(_, expected)| expected);
        EmployeeId::new(free)
    }

    /// Append a record under a fresh identifier and return the stored copy.
    pub fn add(&mut self, candidate: NewEmployee) -> Employee {
        let employee = candidate.with_id(self.next_id());
        self.records.push(employee.clone());
        self.version += 1;
        employee
    }

    /// Replace the record sharing `employee.id`.
    ///
    /// Returns `false` and leaves the collection untouched when no such
    /// record exists.
    pub fn update(&mut self, employee: Employee) -> bool {
        match self.records.iter_mut().find(|e| e.id == employee.id) {
            Some(slot) => {
                *slot = employee;
                self.version += 1;
                true
            }
            None => false,
        }
    }

    /// Remove the record with `id`; `false` if it was absent.
    pub fn delete(&mut self, id: EmployeeId) -> bool {
        let before = self.records.len();
        self.records.retain(|e| e.id != id);
        let removed = self.records.len() != before;
        if removed {
            self.version += 1;
        }
        removed
    }

    /// Swap in a whole new collection.
    pub fn replace_all(&mut self, records: Vec<Employee>) {
        self.records = records;
        self.version += 1;
    }
}
