//! Tests for the tabular view contract: search, filter, sort, pagination
//! and selection semantics.

use cmms_core::{apply, CellValue, Column, FilterOption, Selection, SortDirection, TableQuery};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
struct Asset {
    id: Uuid,
    code: String,
    name: String,
    status: &'static str,
    hours: i64,
}

fn asset(n: u128, code: &str, name: &str, status: &'static str, hours: i64) -> Asset {
    Asset {
        id: Uuid::from_u128(n),
        code: code.to_string(),
        name: name.to_string(),
        status,
        hours,
    }
}

fn columns() -> Vec<Column<Asset>> {
    vec![
        Column::new("code", "Code", |a: &Asset| CellValue::text(&a.code))
            .sortable()
            .searchable(),
        Column::new("name", "Name", |a: &Asset| CellValue::text(&a.name))
            .sortable()
            .searchable(),
        Column::new("status", "Status", |a: &Asset| CellValue::text(a.status)).filterable(vec![
            FilterOption::plain("running"),
            FilterOption::plain("stopped"),
        ]),
        Column::new("hours", "Hours", |a: &Asset| CellValue::Integer(a.hours)).sortable(),
    ]
}

fn dataset() -> Vec<Asset> {
    vec![
        asset(1, "A", "Pump", "running", 120),
        asset(2, "B", "Valve", "stopped", 40),
        asset(3, "C", "Compressor", "running", 800),
        asset(4, "D", "Fan", "stopped", 300),
    ]
}

#[test]
fn empty_query_shows_everything_in_order() {
    let data = dataset();
    let view = apply(&columns(), &data, &TableQuery::new(10));
    assert_eq!(view.total, 4);
    let codes: Vec<&str> = view.rows.iter().map(|a| a.code.as_str()).collect();
    assert_eq!(codes, ["A", "B", "C", "D"]);
}

#[test]
fn search_is_case_insensitive_substring_over_searchable_columns() {
    let data = dataset();
    let mut query = TableQuery::new(10);
    query.set_search("VALVE");
    let view = apply(&columns(), &data, &query);
    assert_eq!(view.total, 1);
    assert_eq!(view.rows[0].code, "B");

    // "running" only appears in the status column, which is not searchable.
    query.set_search("running");
    let view = apply(&columns(), &data, &query);
    assert_eq!(view.total, 0);
}

#[test]
fn filter_requires_exact_match() {
    let data = dataset();
    let mut query = TableQuery::new(10);
    query.set_filter("status", Some("running".to_string()));
    let view = apply(&columns(), &data, &query);
    let codes: Vec<&str> = view.rows.iter().map(|a| a.code.as_str()).collect();
    assert_eq!(codes, ["A", "C"]);

    // Substrings must not match.
    query.set_filter("status", Some("run".to_string()));
    assert_eq!(apply(&columns(), &data, &query).total, 0);
}

#[test]
fn search_and_filter_compose_conjunctively() {
    let data = dataset();
    let cols = columns();

    let mut search_only = TableQuery::new(10);
    search_only.set_search("valve");
    assert_eq!(apply(&cols, &data, &search_only).rows[0].code, "B");

    let mut filter_only = TableQuery::new(10);
    filter_only.set_filter("status", Some("running".to_string()));
    assert_eq!(apply(&cols, &data, &filter_only).total, 2);

    // The valve is stopped, so combining both criteria yields an empty
    // result set rather than an error.
    let mut both = TableQuery::new(10);
    both.set_search("valve");
    both.set_filter("status", Some("running".to_string()));
    let view = apply(&cols, &data, &both);
    assert_eq!(view.total, 0);
    assert!(view.is_empty());
}

#[test]
fn sort_cycles_and_unsorted_restores_dataset_order() {
    let data = dataset();
    let cols = columns();
    let mut query = TableQuery::new(10);

    query.toggle_sort("hours");
    assert_eq!(query.sort_direction("hours"), Some(SortDirection::Ascending));
    let ascending: Vec<i64> = apply(&cols, &data, &query).rows.iter().map(|a| a.hours).collect();
    assert_eq!(ascending, [40, 120, 300, 800]);

    query.toggle_sort("hours");
    assert_eq!(
        query.sort_direction("hours"),
        Some(SortDirection::Descending)
    );
    let descending: Vec<i64> = apply(&cols, &data, &query).rows.iter().map(|a| a.hours).collect();
    assert_eq!(descending, [800, 300, 120, 40]);

    query.toggle_sort("hours");
    assert_eq!(query.sort_direction("hours"), None);
    let codes: Vec<&str> = apply(&cols, &data, &query)
        .rows
        .iter()
        .map(|a| a.code.as_str())
        .collect();
    assert_eq!(codes, ["A", "B", "C", "D"]);

    // A different column starts its own ascending cycle.
    query.toggle_sort("hours");
    query.toggle_sort("name");
    assert_eq!(query.sort_direction("name"), Some(SortDirection::Ascending));
    assert_eq!(query.sort_direction("hours"), None);
}

#[test]
fn pagination_slices_the_filtered_set() {
    let data = dataset();
    let cols = columns();
    let mut query = TableQuery::new(3);

    let first = apply(&cols, &data, &query);
    assert_eq!(first.rows.len(), 3);
    assert_eq!(first.total, 4);
    assert_eq!(first.page_count, 2);
    assert_eq!(first.row_range(), (1, 3));

    query.set_page(2);
    let second = apply(&cols, &data, &query);
    assert_eq!(second.rows.len(), 1);
    assert_eq!(second.rows[0].code, "D");
    assert_eq!(second.row_range(), (4, 4));

    // Past-the-end pages are empty, not an error.
    query.set_page(9);
    let past = apply(&cols, &data, &query);
    assert!(past.is_empty());
    assert_eq!(past.total, 4);
}

#[test]
fn total_reflects_post_filter_count() {
    let data = dataset();
    let cols = columns();
    let mut query = TableQuery::new(1);
    query.set_filter("status", Some("stopped".to_string()));
    let view = apply(&cols, &data, &query);
    assert_eq!(view.total, 2);
    assert_eq!(view.page_count, 2);
    assert_eq!(view.rows.len(), 1);
}

#[test]
fn criteria_changes_reset_the_page() {
    let mut query = TableQuery::new(2);
    query.set_page(5);
    query.set_search("pump");
    assert_eq!(query.page, 1);

    query.set_page(5);
    query.set_filter("status", Some("running".to_string()));
    assert_eq!(query.page, 1);

    query.set_page(5);
    query.set_page_size(25);
    assert_eq!(query.page, 1);
}

#[test]
fn unknown_filter_keys_are_inert() {
    let data = dataset();
    let mut query = TableQuery::new(10);
    query.set_filter("nonexistent", Some("x".to_string()));
    assert_eq!(apply(&columns(), &data, &query).total, 4);
}

#[test]
fn missing_values_sort_last() {
    #[derive(Debug)]
    struct Row {
        date: Option<chrono::NaiveDate>,
    }
    let cols = vec![
        Column::new("date", "Date", |r: &Row| CellValue::opt_date(r.date)).sortable(),
    ];
    let data = vec![
        Row { date: None },
        Row {
            date: chrono::NaiveDate::from_ymd_opt(2026, 1, 5),
        },
        Row {
            date: chrono::NaiveDate::from_ymd_opt(2025, 3, 1),
        },
    ];
    let mut query = TableQuery::new(10);
    query.toggle_sort("date");
    let view = apply(&cols, &data, &query);
    assert_eq!(view.rows[0].date, chrono::NaiveDate::from_ymd_opt(2025, 3, 1));
    assert_eq!(view.rows[2].date, None);
}

#[test]
fn selection_toggle_all_covers_visible_rows_only() {
    let data = dataset();
    let cols = columns();
    let query = TableQuery::new(2);
    let view = apply(&cols, &data, &query);
    let visible: Vec<Uuid> = view.rows.iter().map(|a| a.id).collect();

    let mut selection = Selection::new();
    selection.toggle_all(&visible);
    assert_eq!(selection.len(), 2);
    assert!(selection.all_selected(&visible));
    // The rows on page two were never selected.
    assert!(!selection.contains(Uuid::from_u128(4)));

    selection.toggle_all(&visible);
    assert!(selection.is_empty());
}

#[test]
fn selection_toggle_is_symmetric() {
    let mut selection = Selection::new();
    let id = Uuid::from_u128(42);
    selection.toggle(id);
    assert!(selection.contains(id));
    selection.toggle(id);
    assert!(!selection.contains(id));
}
