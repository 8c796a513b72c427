//! Tests for dataset JSON persistence.

use std::path::PathBuf;

use cmms_model::EquipmentStatus;
use cmms_store::{fixtures, JsonStore};

fn unique_temp_path(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "cmms-console-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    dir.push("dataset.json");
    dir
}

#[test]
fn dataset_round_trips_through_json() {
    let path = unique_temp_path("roundtrip");
    let store = JsonStore::new(&path);

    let dataset = fixtures::sample_dataset();
    store.save(&dataset).expect("save dataset");

    let loaded = store.load().expect("load dataset");
    assert_eq!(
        loaded.equipment.records().len(),
        dataset.equipment.records().len()
    );
    assert_eq!(
        loaded.work_orders.records().len(),
        dataset.work_orders.records().len()
    );
    assert_eq!(loaded.equipment.records()[0].code, "PMP-001");
    assert_eq!(
        loaded.equipment.records()[0].status,
        EquipmentStatus::Running
    );

    std::fs::remove_dir_all(path.parent().unwrap()).ok();
}

#[test]
fn loading_a_missing_file_is_an_io_error() {
    let store = JsonStore::new("/nonexistent/cmms/dataset.json");
    assert!(store.load().is_err());
}
