//! Tests for form draft round-trips and validation.

use cmms_gui::record::{FormDraft, FormRefs, ManagedRecord};
use cmms_model::{Equipment, EquipmentStatus, Priority, Role, WorkOrder, WorkOrderStatus};
use cmms_store::fixtures;

fn refs() -> FormRefs {
    FormRefs::from_dataset(&fixtures::sample_dataset())
}

fn fixture_equipment() -> Equipment {
    fixtures::sample_dataset().equipment.records()[0].clone()
}

fn fixture_work_order() -> WorkOrder {
    fixtures::sample_dataset().work_orders.records()[0].clone()
}

#[test]
fn equipment_draft_round_trips() {
    let original = fixture_equipment();
    let draft = original.to_draft();
    let rebuilt = Equipment::from_draft(&draft, Some(&original), &refs()).expect("valid draft");
    assert_eq!(rebuilt, original);
}

#[test]
fn equipment_draft_requires_code_and_name() {
    let errors = Equipment::from_draft(&FormDraft::default(), None, &refs())
        .expect_err("empty draft must fail");
    assert!(errors.contains_key("code"));
    assert!(errors.contains_key("name"));
    assert!(errors.contains_key("status"));
}

#[test]
fn equipment_draft_rejects_bad_date() {
    let original = fixture_equipment();
    let mut draft = original.to_draft();
    draft.set("commissioned", "18.03.2019".to_string());
    let errors =
        Equipment::from_draft(&draft, Some(&original), &refs()).expect_err("bad date must fail");
    assert!(errors.contains_key("commissioned"));
}

#[test]
fn new_equipment_gets_a_fresh_id() {
    let original = fixture_equipment();
    let draft = original.to_draft();
    let created = Equipment::from_draft(&draft, None, &refs()).expect("valid draft");
    assert_ne!(created.id, original.id);
    assert_eq!(created.status, EquipmentStatus::Running);
}

#[test]
fn work_order_draft_keeps_status_out_of_the_form() {
    let mut original = fixture_work_order();
    original.start().expect("pending starts");
    assert_eq!(original.status, WorkOrderStatus::InProgress);

    let mut draft = original.to_draft();
    draft.set("priority", Priority::Critical.label().to_string());
    let rebuilt = WorkOrder::from_draft(&draft, Some(&original), &refs()).expect("valid draft");

    // The edit changed the priority but could not touch the lifecycle.
    assert_eq!(rebuilt.priority, Priority::Critical);
    assert_eq!(rebuilt.status, WorkOrderStatus::InProgress);
    assert_eq!(rebuilt.id, original.id);
}

#[test]
fn work_order_draft_rejects_unknown_equipment() {
    let original = fixture_work_order();
    let mut draft = original.to_draft();
    draft.set("equipment", "NOPE-999".to_string());
    let errors = WorkOrder::from_draft(&draft, Some(&original), &refs())
        .expect_err("unknown equipment must fail");
    assert!(errors.contains_key("equipment"));
}

#[test]
fn new_work_orders_start_pending() {
    let original = fixture_work_order();
    let draft = original.to_draft();
    let created = WorkOrder::from_draft(&draft, None, &refs()).expect("valid draft");
    assert_eq!(created.status, WorkOrderStatus::Pending);
    assert_eq!(created.completed, None);
}

#[test]
fn role_access_levels_round_trip() {
    let dataset = fixtures::sample_dataset();
    for role in dataset.roles.records() {
        let draft = role.to_draft();
        let rebuilt = Role::from_draft(&draft, Some(role), &refs()).expect("valid draft");
        assert_eq!(&rebuilt.permissions, &role.permissions, "role {}", role.code);
    }
}
