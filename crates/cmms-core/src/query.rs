//! Search, filter, sort and pagination over a record slice.
//!
//! The owning screen holds a [`TableQuery`]; [`apply`] evaluates it against
//! the current dataset and returns the visible page plus the post-filter
//! total. Renderers never re-derive any of this.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::table::{CellValue, Column};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub column: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableQuery {
    pub search: String,
    /// Column key -> selected filter option value. Composes with search
    /// conjunctively.
    pub filters: BTreeMap<String, String>,
    pub sort: Option<Sort>,
    /// 1-based page index.
    pub page: usize,
    pub page_size: usize,
}

impl TableQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            filters: BTreeMap::new(),
            sort: None,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Any criterion change snaps back to the first page; the old page
    /// offset is meaningless against a different row set.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_filter(&mut self, column: &str, value: Option<String>) {
        match value {
            Some(value) => {
                self.filters.insert(column.to_string(), value);
            }
            None => {
                self.filters.remove(column);
            }
        }
        self.page = 1;
    }

    pub fn filter(&self, column: &str) -> Option<&str> {
        self.filters.get(column).map(String::as_str)
    }

    /// Header click cycle: ascending -> descending -> unsorted. Clicking a
    /// different column starts a fresh ascending sort.
    pub fn toggle_sort(&mut self, column: &str) {
        self.sort = match self.sort.take() {
            Some(sort) if sort.column == column => match sort.direction {
                SortDirection::Ascending => Some(Sort {
                    column: column.to_string(),
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(Sort {
                column: column.to_string(),
                direction: SortDirection::Ascending,
            }),
        };
        self.page = 1;
    }

    pub fn sort_direction(&self, column: &str) -> Option<SortDirection> {
        self.sort
            .as_ref()
            .filter(|sort| sort.column == column)
            .map(|sort| sort.direction)
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }
}

/// Result of evaluating a query: one page of rows plus paging facts.
#[derive(Debug)]
pub struct TableView<'a, T> {
    pub rows: Vec<&'a T>,
    /// Post-filter row count (not the unfiltered dataset size).
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
    pub page_size: usize,
}

impl<T> TableView<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 1-based row range shown, for "12-20 of 87" captions.
    pub fn row_range(&self) -> (usize, usize) {
        if self.total == 0 {
            return (0, 0);
        }
        let start = self.page.saturating_sub(1) * self.page_size + 1;
        let end = (start + self.rows.len()).saturating_sub(1);
        (start.min(self.total), end)
    }
}

/// Evaluate `query` against `data`.
///
/// Search matches when any searchable column contains the needle
/// (case-insensitive). Filters require exact token equality per column.
/// Both compose with AND. Sorting is stable, so clearing the sort restores
/// the dataset order. A page past the end is empty, not an error.
pub fn apply<'a, T>(columns: &[Column<T>], data: &'a [T], query: &TableQuery) -> TableView<'a, T> {
    let needle = query.search.trim().to_lowercase();

    let mut rows: Vec<&T> = data
        .iter()
        .filter(|record| matches_search(columns, record, &needle))
        .filter(|record| matches_filters(columns, record, &query.filters))
        .collect();

    if let Some(sort) = &query.sort {
        if let Some(column) = columns.iter().find(|c| c.sortable && c.key == sort.column) {
            rows.sort_by(|a, b| {
                let ordering = column.value(a).sort_cmp(&column.value(b));
                match sort.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
    }

    let total = rows.len();
    let page_count = total.div_ceil(query.page_size).max(1);
    let start = query.page.saturating_sub(1) * query.page_size;
    let rows = if start < total {
        let end = (start + query.page_size).min(total);
        rows[start..end].to_vec()
    } else {
        Vec::new()
    };

    TableView {
        rows,
        total,
        page: query.page,
        page_count,
        page_size: query.page_size,
    }
}

fn matches_search<T>(columns: &[Column<T>], record: &T, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    columns
        .iter()
        .filter(|column| column.searchable)
        .any(|column| column.value(record).search_text().contains(needle))
}

fn matches_filters<T>(
    columns: &[Column<T>],
    record: &T,
    filters: &BTreeMap<String, String>,
) -> bool {
    filters.iter().all(|(key, expected)| {
        match columns.iter().find(|c| c.is_filterable() && c.key == key) {
            Some(column) => column.value(record).filter_token() == *expected,
            // A filter for a column this table does not carry is inert.
            None => true,
        }
    })
}

/// Selected row identities.
///
/// Select-all operates on the ids the caller passes in, which by contract
/// are the currently visible (filtered and paginated) rows. Hidden rows are
/// never swept into a bulk operation.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: BTreeSet<Uuid>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: Uuid) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.ids.contains(&id)
    }

    pub fn all_selected(&self, visible: &[Uuid]) -> bool {
        !visible.is_empty() && visible.iter().all(|id| self.ids.contains(id))
    }

    /// Select every visible row, or deselect them all if they already are.
    pub fn toggle_all(&mut self, visible: &[Uuid]) {
        if self.all_selected(visible) {
            for id in visible {
                self.ids.remove(id);
            }
        } else {
            self.ids.extend(visible.iter().copied());
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Uuid> + '_ {
        self.ids.iter().copied()
    }
}
