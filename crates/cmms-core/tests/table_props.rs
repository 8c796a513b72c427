//! Property tests for the query pipeline.

use cmms_core::{apply, CellValue, Column, FilterOption, TableQuery};
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Item {
    code: String,
    status: &'static str,
    hours: i64,
}

fn columns() -> Vec<Column<Item>> {
    vec![
        Column::new("code", "Code", |i: &Item| CellValue::text(&i.code))
            .sortable()
            .searchable(),
        Column::new("status", "Status", |i: &Item| CellValue::text(i.status)).filterable(vec![
            FilterOption::plain("running"),
            FilterOption::plain("stopped"),
        ]),
        Column::new("hours", "Hours", |i: &Item| CellValue::Integer(i.hours)).sortable(),
    ]
}

fn item_strategy() -> impl Strategy<Value = Item> {
    (
        "[a-d]{1,3}",
        prop_oneof![Just("running"), Just("stopped")],
        0i64..1000,
    )
        .prop_map(|(code, status, hours)| Item {
            code,
            status,
            hours,
        })
}

proptest! {
    #[test]
    fn page_length_matches_the_formula(
        data in prop::collection::vec(item_strategy(), 0..40),
        page in 1usize..6,
        page_size in 1usize..10,
    ) {
        let mut query = TableQuery::new(page_size);
        query.set_page(page);
        let view = apply(&columns(), &data, &query);

        let consumed = (page - 1) * page_size;
        let expected = data.len().saturating_sub(consumed).min(page_size);
        prop_assert_eq!(view.rows.len(), expected);
        prop_assert_eq!(view.total, data.len());
    }

    #[test]
    fn search_matches_exactly_the_substring_rows(
        data in prop::collection::vec(item_strategy(), 0..40),
        needle in "[a-d]{1,2}",
    ) {
        let mut query = TableQuery::new(1000);
        query.set_search(needle.clone());
        let view = apply(&columns(), &data, &query);

        let expected: Vec<&Item> = data
            .iter()
            .filter(|item| item.code.to_lowercase().contains(&needle.to_lowercase()))
            .collect();
        prop_assert_eq!(view.rows.len(), expected.len());
        for (got, want) in view.rows.iter().zip(&expected) {
            prop_assert_eq!(got.code.as_str(), want.code.as_str());
        }
    }

    #[test]
    fn every_filtered_row_matches_the_filter(
        data in prop::collection::vec(item_strategy(), 0..40),
        wanted in prop_oneof![Just("running"), Just("stopped")],
    ) {
        let mut query = TableQuery::new(1000);
        query.set_filter("status", Some(wanted.to_string()));
        let view = apply(&columns(), &data, &query);

        prop_assert!(view.rows.iter().all(|item| item.status == wanted));
        let expected = data.iter().filter(|item| item.status == wanted).count();
        prop_assert_eq!(view.total, expected);
    }

    #[test]
    fn combined_criteria_equal_the_intersection(
        data in prop::collection::vec(item_strategy(), 0..40),
        needle in "[a-d]{1,2}",
        wanted in prop_oneof![Just("running"), Just("stopped")],
    ) {
        let cols = columns();

        let mut both = TableQuery::new(1000);
        both.set_search(needle.clone());
        both.set_filter("status", Some(wanted.to_string()));
        let combined = apply(&cols, &data, &both);

        let expected = data
            .iter()
            .filter(|item| item.code.contains(&needle))
            .filter(|item| item.status == wanted)
            .count();
        prop_assert_eq!(combined.total, expected);
    }

    #[test]
    fn three_sort_toggles_restore_the_original_order(
        data in prop::collection::vec(item_strategy(), 0..40),
    ) {
        let cols = columns();
        let mut query = TableQuery::new(1000);
        query.toggle_sort("hours");
        query.toggle_sort("hours");
        query.toggle_sort("hours");
        prop_assert!(query.sort.is_none());

        let view = apply(&cols, &data, &query);
        let codes: Vec<&str> = view.rows.iter().map(|item| item.code.as_str()).collect();
        let original: Vec<&str> = data.iter().map(|item| item.code.as_str()).collect();
        prop_assert_eq!(codes, original);
    }

    #[test]
    fn sorting_never_loses_rows(
        data in prop::collection::vec(item_strategy(), 0..40),
    ) {
        let cols = columns();
        let mut query = TableQuery::new(1000);
        query.toggle_sort("hours");
        let view = apply(&cols, &data, &query);
        prop_assert_eq!(view.total, data.len());

        let mut hours: Vec<i64> = view.rows.iter().map(|item| item.hours).collect();
        let is_sorted = hours.windows(2).all(|pair| pair[0] <= pair[1]);
        prop_assert!(is_sorted);
        hours.sort_unstable();
        let mut original: Vec<i64> = data.iter().map(|item| item.hours).collect();
        original.sort_unstable();
        prop_assert_eq!(hours, original);
    }
}
