//! Tests for cmms-model types.

use chrono::NaiveDate;
use cmms_model::{
    CrudAction, IntervalUnit, Permission, PmSchedule, Priority, RecordKind, WorkOrder,
    WorkOrderKind, WorkOrderStatus,
};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn work_order(status: WorkOrderStatus) -> WorkOrder {
    WorkOrder {
        id: Uuid::from_u128(1),
        number: "WO-2026-0001".to_string(),
        title: "Replace seal".to_string(),
        equipment_id: Uuid::from_u128(2),
        equipment_code: "PMP-001".to_string(),
        kind: WorkOrderKind::Corrective,
        priority: Priority::High,
        status,
        assignee: "m.keller".to_string(),
        due: Some(date(2026, 8, 1)),
        completed: None,
    }
}

#[test]
fn work_order_lifecycle() {
    let mut order = work_order(WorkOrderStatus::Pending);
    order.start().expect("pending can start");
    assert_eq!(order.status, WorkOrderStatus::InProgress);
    order.complete(date(2026, 8, 3)).expect("in progress can complete");
    assert_eq!(order.status, WorkOrderStatus::Completed);
    assert_eq!(order.completed, Some(date(2026, 8, 3)));
}

#[test]
fn completed_order_rejects_further_transitions() {
    let mut order = work_order(WorkOrderStatus::Completed);
    assert!(order.start().is_err());
    assert!(order.cancel().is_err());
    assert!(order.complete(date(2026, 8, 3)).is_err());
}

#[test]
fn cancel_allowed_from_open_states() {
    let mut pending = work_order(WorkOrderStatus::Pending);
    assert!(pending.cancel().is_ok());

    let mut in_progress = work_order(WorkOrderStatus::InProgress);
    assert!(in_progress.cancel().is_ok());
}

#[test]
fn overdue_only_while_open() {
    let today = date(2026, 8, 6);
    let open = work_order(WorkOrderStatus::Pending);
    assert!(open.overdue(today));

    let mut done = work_order(WorkOrderStatus::InProgress);
    done.complete(today).expect("complete");
    assert!(!done.overdue(today));
}

#[test]
fn pm_schedule_next_due_by_unit() {
    let mut schedule = PmSchedule {
        id: Uuid::from_u128(3),
        equipment_id: Uuid::from_u128(2),
        equipment_code: "PMP-001".to_string(),
        task: "Grease bearings".to_string(),
        interval_count: 2,
        interval_unit: IntervalUnit::Weeks,
        last_done: Some(date(2026, 7, 1)),
        active: true,
    };
    assert_eq!(schedule.next_due(), Some(date(2026, 7, 15)));

    schedule.interval_unit = IntervalUnit::Months;
    assert_eq!(schedule.next_due(), Some(date(2026, 9, 1)));

    schedule.last_done = None;
    assert_eq!(schedule.next_due(), None);
}

#[test]
fn pm_schedule_due_within_window() {
    let schedule = PmSchedule {
        id: Uuid::from_u128(3),
        equipment_id: Uuid::from_u128(2),
        equipment_code: "PMP-001".to_string(),
        task: "Grease bearings".to_string(),
        interval_count: 10,
        interval_unit: IntervalUnit::Days,
        last_done: Some(date(2026, 8, 1)),
        active: true,
    };
    let today = date(2026, 8, 6);
    assert!(schedule.due_within(today, 30));
    assert!(!schedule.due_within(today, 3));
}

#[test]
fn permission_full_covers_every_action() {
    let permissions: Vec<Permission> = Permission::full(RecordKind::Equipment).collect();
    assert_eq!(permissions.len(), CrudAction::all().len());
    assert!(permissions.contains(&Permission::new(RecordKind::Equipment, CrudAction::Delete)));
}
