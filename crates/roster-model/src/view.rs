//! View state - UI-only state for the list page.
//!
//! Kept separate from the employee records so that navigation, search and
//! paging never touch record data.

use serde::{Deserialize, Serialize};

use crate::enums::{SortColumn, SortOrder, ViewMode};

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub column: SortColumn,
    pub order: SortOrder,
}

/// Current page (1-based) and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Half-open index range of the current page.
    ///
    /// Saturates at `usize::MAX`, which lies past the end of any collection.
    pub fn bounds(&self) -> (usize, usize) {
        let start = self
            .current_page
            .saturating_sub(1)
            .saturating_mul(self.page_size);
        (start, start.saturating_add(self.page_size))
    }
}

/// Transient notification.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub message: String,
    pub is_visible: bool,
}

/// All UI state of the list page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewState {
    pub view_mode: ViewMode,
    pub search_query: String,
    pub sort: SortState,
    pub pagination: Pagination,
    pub toast: Toast,
}

impl ViewState {
    /// Default state with a custom page size.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            pagination: Pagination {
                page_size: page_size.max(1),
                ..Pagination::default()
            },
            ..Self::default()
        }
    }
}
