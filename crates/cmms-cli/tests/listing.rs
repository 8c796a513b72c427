//! Tests for the terminal listings: shared query semantics plus rendering.

use cmms_cli::tables::{count_table, page_info, render_table};
use cmms_core::{apply, catalog, TableQuery};
use cmms_store::fixtures;

#[test]
fn equipment_listing_shows_every_fixture_row() {
    let dataset = fixtures::sample_dataset();
    let columns = catalog::equipment_columns();
    let query = TableQuery::new(25);
    let view = apply(&columns, dataset.equipment.records(), &query);

    let rendered = render_table(&columns, &view).to_string();
    assert!(rendered.contains("PMP-001"));
    assert!(rendered.contains("CMP-002"));
    assert!(rendered.contains("Code"));

    assert_eq!(page_info(&view), "Page 1 of 1 (6 records)");
}

#[test]
fn status_filter_narrows_the_listing() {
    let dataset = fixtures::sample_dataset();
    let columns = catalog::equipment_columns();
    let mut query = TableQuery::new(25);
    query.set_filter("status", Some("Running".to_string()));
    let view = apply(&columns, dataset.equipment.records(), &query);

    assert_eq!(view.total, 3);
    let rendered = render_table(&columns, &view).to_string();
    assert!(rendered.contains("PMP-001"));
    assert!(!rendered.contains("VLV-010"));
}

#[test]
fn paging_matches_the_desktop_semantics() {
    let dataset = fixtures::sample_dataset();
    let columns = catalog::equipment_columns();
    let mut query = TableQuery::new(4);
    query.set_page(2);
    let view = apply(&columns, dataset.equipment.records(), &query);

    assert_eq!(view.rows.len(), 2);
    assert_eq!(page_info(&view), "Page 2 of 2 (6 records)");
}

#[test]
fn work_order_search_hits_title_and_assignee() {
    let dataset = fixtures::sample_dataset();
    let columns = catalog::work_order_columns();
    let mut query = TableQuery::new(25);
    query.set_search("keller");
    let view = apply(&columns, dataset.work_orders.records(), &query);
    assert_eq!(view.total, 2);

    query.set_search("lubrication");
    let view = apply(&columns, dataset.work_orders.records(), &query);
    assert_eq!(view.total, 1);
}

#[test]
fn count_table_renders_labels_and_counts() {
    let rows = vec![
        ("Running".to_string(), 3usize),
        ("Retired".to_string(), 0usize),
    ];
    let rendered = count_table("Equipment", &rows).to_string();
    assert!(rendered.contains("Equipment"));
    assert!(rendered.contains("Running"));
    assert!(rendered.contains('3'));
}
