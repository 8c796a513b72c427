//! Tests for the in-memory repository and fixture integrity.

use cmms_model::{Entity, EquipmentStatus};
use cmms_store::{fixtures, MemoryRepository, Repository, StoreError};
use uuid::Uuid;

#[test]
fn insert_get_update_remove_roundtrip() {
    let dataset = fixtures::sample_dataset();
    let mut repo = MemoryRepository::new();

    let mut pump = dataset.equipment.records()[0].clone();
    repo.insert(pump.clone()).expect("insert");
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.get(pump.id()).map(|e| e.code), Some(pump.code.clone()));

    pump.status = EquipmentStatus::Standby;
    repo.update(pump.clone()).expect("update");
    assert_eq!(
        repo.get(pump.id()).map(|e| e.status),
        Some(EquipmentStatus::Standby)
    );

    let removed = repo.remove(pump.id()).expect("remove");
    assert_eq!(removed.id(), pump.id());
    assert!(repo.is_empty());
}

#[test]
fn duplicate_insert_is_rejected() {
    let dataset = fixtures::sample_dataset();
    let pump = dataset.equipment.records()[0].clone();
    let mut repo = MemoryRepository::with_records(vec![pump.clone()]);
    match repo.insert(pump) {
        Err(StoreError::DuplicateId(_)) => {}
        other => panic!("expected DuplicateId, got {other:?}"),
    }
}

#[test]
fn missing_records_report_not_found() {
    let mut repo: MemoryRepository<cmms_model::Equipment> = MemoryRepository::new();
    let ghost = Uuid::from_u128(0xdead);
    assert!(repo.get(ghost).is_none());
    match repo.remove(ghost) {
        Err(StoreError::NotFound(id)) => assert_eq!(id, ghost),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn list_preserves_insertion_order() {
    let dataset = fixtures::sample_dataset();
    let codes: Vec<String> = dataset
        .equipment
        .list()
        .into_iter()
        .map(|e| e.code)
        .collect();
    let raw: Vec<String> = dataset
        .equipment
        .records()
        .iter()
        .map(|e| e.code.clone())
        .collect();
    assert_eq!(codes, raw);
}

#[test]
fn fixture_references_resolve() {
    let dataset = fixtures::sample_dataset();
    let equipment_ids: Vec<Uuid> = dataset.equipment.records().iter().map(Entity::id).collect();

    for order in dataset.work_orders.records() {
        assert!(
            equipment_ids.contains(&order.equipment_id),
            "work order {} points at unknown equipment",
            order.number
        );
    }
    for inspection in dataset.inspections.records() {
        assert!(equipment_ids.contains(&inspection.equipment_id));
    }
    for schedule in dataset.pm_schedules.records() {
        assert!(equipment_ids.contains(&schedule.equipment_id));
    }

    let role_codes: Vec<&str> = dataset
        .roles
        .records()
        .iter()
        .map(|role| role.code.as_str())
        .collect();
    for user in dataset.users.records() {
        for code in &user.roles {
            assert!(role_codes.contains(&code.as_str()));
        }
    }
}
