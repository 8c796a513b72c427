//! Tests driving the generic screen handler the way the views do.

use cmms_core::FormMode;
use cmms_gui::app::handler::screen::handle_screen;
use cmms_gui::message::ScreenMessage;
use cmms_gui::record::FormRefs;
use cmms_gui::state::ScreenState;
use cmms_model::{Entity, Equipment, WorkOrderStatus};
use cmms_store::{fixtures, MemoryRepository, Repository};

fn setup() -> (
    ScreenState<Equipment>,
    MemoryRepository<Equipment>,
    FormRefs,
) {
    let dataset = fixtures::sample_dataset();
    let refs = FormRefs::from_dataset(&dataset);
    let screen = ScreenState::new(25);
    (screen, dataset.equipment, refs)
}

#[test]
fn edit_then_add_clears_the_selection() {
    let (mut screen, mut repo, refs) = setup();
    let target = repo.records()[1].clone();

    handle_screen(
        &mut screen,
        &mut repo,
        &refs,
        ScreenMessage::EditRequested(target.id()),
    );
    assert_eq!(screen.crud.form_mode, FormMode::Edit);
    assert_eq!(
        screen.crud.selected.as_ref().map(|e| e.code.as_str()),
        Some(target.code.as_str())
    );

    handle_screen(&mut screen, &mut repo, &refs, ScreenMessage::AddRequested);
    assert_eq!(screen.crud.selected, None);
    assert_eq!(screen.crud.form_mode, FormMode::Create);
    assert!(screen.crud.form_open);
}

#[test]
fn delete_flow_removes_the_record_without_touching_an_open_editor() {
    let (mut screen, mut repo, refs) = setup();
    let edited = repo.records()[0].clone();
    let doomed = repo.records()[1].clone();
    let before = repo.len();

    handle_screen(
        &mut screen,
        &mut repo,
        &refs,
        ScreenMessage::EditRequested(edited.id()),
    );
    handle_screen(
        &mut screen,
        &mut repo,
        &refs,
        ScreenMessage::DeleteRequested(doomed.id()),
    );
    assert!(screen.crud.delete_dialog_open);
    assert!(screen.crud.form_open);

    handle_screen(&mut screen, &mut repo, &refs, ScreenMessage::DeleteConfirmed);
    assert_eq!(repo.len(), before - 1);
    assert!(repo.get(doomed.id()).is_none());
    assert!(!screen.crud.delete_dialog_open);
    // The editor is still bound to its record.
    assert!(screen.crud.form_open);
    assert_eq!(
        screen.crud.selected.as_ref().map(Entity::id),
        Some(edited.id())
    );
}

#[test]
fn submitted_create_form_inserts_and_resets() {
    let (mut screen, mut repo, refs) = setup();
    let before = repo.len();

    handle_screen(&mut screen, &mut repo, &refs, ScreenMessage::AddRequested);
    for (field, value) in [
        ("code", "FAN-030"),
        ("name", "Extraction fan"),
        ("category", "HVAC"),
        ("location", "Roof"),
        ("status", "Running"),
    ] {
        handle_screen(
            &mut screen,
            &mut repo,
            &refs,
            ScreenMessage::FieldChanged(field.to_string(), value.to_string()),
        );
    }
    handle_screen(&mut screen, &mut repo, &refs, ScreenMessage::FormSubmitted);

    assert_eq!(repo.len(), before + 1);
    assert!(!screen.crud.form_open);
    assert!(screen.errors.is_empty());
    assert!(repo.list().iter().any(|e| e.code == "FAN-030"));
}

#[test]
fn invalid_submit_keeps_the_form_open_with_errors() {
    let (mut screen, mut repo, refs) = setup();
    let before = repo.len();

    handle_screen(&mut screen, &mut repo, &refs, ScreenMessage::AddRequested);
    handle_screen(&mut screen, &mut repo, &refs, ScreenMessage::FormSubmitted);

    assert_eq!(repo.len(), before);
    assert!(screen.crud.form_open);
    assert!(screen.errors.contains_key("code"));
}

#[test]
fn view_then_switch_to_edit_keeps_the_record() {
    let (mut screen, mut repo, refs) = setup();
    let target = repo.records()[2].clone();

    handle_screen(
        &mut screen,
        &mut repo,
        &refs,
        ScreenMessage::ViewRequested(target.id()),
    );
    assert_eq!(screen.crud.form_mode, FormMode::View);

    handle_screen(&mut screen, &mut repo, &refs, ScreenMessage::SwitchToEdit);
    assert_eq!(screen.crud.form_mode, FormMode::Edit);
    assert!(screen.crud.form_open);
    assert_eq!(
        screen.crud.selected.as_ref().map(Entity::id),
        Some(target.id())
    );
}

#[test]
fn field_changes_are_ignored_in_view_mode() {
    let (mut screen, mut repo, refs) = setup();
    let target = repo.records()[0].clone();

    handle_screen(
        &mut screen,
        &mut repo,
        &refs,
        ScreenMessage::ViewRequested(target.id()),
    );
    handle_screen(
        &mut screen,
        &mut repo,
        &refs,
        ScreenMessage::FieldChanged("name".to_string(), "tampered".to_string()),
    );
    assert_eq!(screen.draft.get("name"), target.name);
}

#[test]
fn work_order_start_action_moves_the_lifecycle() {
    let dataset = fixtures::sample_dataset();
    let refs = FormRefs::from_dataset(&dataset);
    let mut repo = dataset.work_orders;
    let mut screen = ScreenState::new(25);

    let pending = repo
        .list()
        .into_iter()
        .find(|order| order.status == WorkOrderStatus::Pending)
        .expect("fixture has a pending order");

    handle_screen(
        &mut screen,
        &mut repo,
        &refs,
        ScreenMessage::ActionInvoked("start".to_string(), pending.id()),
    );
    assert_eq!(
        repo.get(pending.id()).map(|order| order.status),
        Some(WorkOrderStatus::InProgress)
    );

    // A second "start" is rejected by the lifecycle and changes nothing.
    handle_screen(
        &mut screen,
        &mut repo,
        &refs,
        ScreenMessage::ActionInvoked("start".to_string(), pending.id()),
    );
    assert_eq!(
        repo.get(pending.id()).map(|order| order.status),
        Some(WorkOrderStatus::InProgress)
    );
}

#[test]
fn select_all_covers_only_the_visible_page() {
    let (mut screen, mut repo, refs) = setup();
    handle_screen(
        &mut screen,
        &mut repo,
        &refs,
        ScreenMessage::PageSizeChanged(4),
    );
    handle_screen(&mut screen, &mut repo, &refs, ScreenMessage::SelectAllToggled);
    assert_eq!(screen.selection.len(), 4);

    handle_screen(&mut screen, &mut repo, &refs, ScreenMessage::SelectAllToggled);
    assert!(screen.selection.is_empty());
}
