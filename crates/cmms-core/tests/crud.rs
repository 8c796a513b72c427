//! Tests for the crud interaction state machine against real records.

use chrono::NaiveDate;
use cmms_core::{CrudState, FormMode, OnClose};
use cmms_model::{Equipment, EquipmentCategory, EquipmentStatus};
use uuid::Uuid;

fn equipment(n: u128, code: &str) -> Equipment {
    Equipment {
        id: Uuid::from_u128(n),
        code: code.to_string(),
        name: format!("Asset {code}"),
        category: EquipmentCategory::Mechanical,
        location: "Hall A".to_string(),
        manufacturer: "KSB".to_string(),
        model: "Etanorm".to_string(),
        commissioned: NaiveDate::from_ymd_opt(2021, 4, 12),
        status: EquipmentStatus::Running,
    }
}

#[test]
fn create_after_edit_clears_the_selection() {
    let mut crud: CrudState<Equipment> = CrudState::new();
    crud.open_edit(equipment(2, "VLV-010"));
    assert_eq!(crud.form_mode, FormMode::Edit);
    assert!(crud.selected.is_some());

    crud.open_create();
    assert_eq!(crud.selected, None);
    assert_eq!(crud.form_mode, FormMode::Create);
    assert!(crud.form_open);
}

#[test]
fn delete_request_leaves_an_open_editor_alone() {
    let mut crud: CrudState<Equipment> = CrudState::new();
    crud.open_edit(equipment(1, "PMP-001"));
    crud.request_delete(equipment(2, "VLV-010"));

    assert!(crud.form_open);
    assert_eq!(crud.form_mode, FormMode::Edit);
    assert_eq!(
        crud.selected.as_ref().map(|e| e.code.as_str()),
        Some("PMP-001")
    );
    assert_eq!(
        crud.pending_delete.as_ref().map(|e| e.code.as_str()),
        Some("VLV-010")
    );
}

#[test]
fn view_then_edit_reuses_the_kept_selection() {
    let mut crud: CrudState<Equipment> = CrudState::new();
    crud.open_view(equipment(1, "PMP-001"));
    assert!(crud.is_viewing());

    // The view dialog closes but keeps its record so the caller can
    // reopen it as an editor.
    crud.close_form(OnClose::KeepSelection);
    let kept = crud.selected.clone().expect("selection kept");
    crud.open_edit(kept);
    assert_eq!(crud.form_mode, FormMode::Edit);
    assert!(crud.form_open);
}

#[test]
fn reset_form_returns_to_the_neutral_state() {
    let mut crud: CrudState<Equipment> = CrudState::new();
    crud.open_edit(equipment(1, "PMP-001"));
    crud.reset_form();
    assert_eq!(crud.selected, None);
    assert_eq!(crud.form_mode, FormMode::Create);
    assert!(!crud.form_open);

    // Dialog flags are independent of the form.
    crud.toggle_import_export();
    assert!(crud.import_export_open);
    crud.reset_form();
    assert!(crud.import_export_open);
}
