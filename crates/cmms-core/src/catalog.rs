//! Canonical column and action sets per record kind.
//!
//! Both front ends render from these descriptors, so a filter that exists in
//! the desktop console exists in the CLI with identical semantics.

use cmms_model::{
    Calibration, CalibrationResult, CrudAction, Equipment, EquipmentCategory, EquipmentStatus,
    Inspection, InspectionResult, LabelEntry, Language, MeterReading, Organization, OrgKind,
    Permission, PmSchedule, Priority, RecordKind, Role, WorkOrder, WorkOrderKind, WorkOrderStatus,
};

use crate::table::{
    Action, ActionIcon, ActionTone, BadgeTone, CellAlign, CellValue, Column, ColumnWidth,
    FilterOption,
};

fn options_from_labels(labels: &[&'static str]) -> Vec<FilterOption> {
    labels.iter().map(|label| FilterOption::plain(*label)).collect()
}

fn equipment_status_tone(status: EquipmentStatus) -> BadgeTone {
    match status {
        EquipmentStatus::Running => BadgeTone::Success,
        EquipmentStatus::Standby => BadgeTone::Info,
        EquipmentStatus::Maintenance => BadgeTone::Warning,
        EquipmentStatus::Retired => BadgeTone::Neutral,
    }
}

fn work_order_status_tone(status: WorkOrderStatus) -> BadgeTone {
    match status {
        WorkOrderStatus::Pending => BadgeTone::Info,
        WorkOrderStatus::InProgress => BadgeTone::Warning,
        WorkOrderStatus::Completed => BadgeTone::Success,
        WorkOrderStatus::Cancelled => BadgeTone::Neutral,
    }
}

fn priority_tone(priority: Priority) -> BadgeTone {
    match priority {
        Priority::Low => BadgeTone::Neutral,
        Priority::Medium => BadgeTone::Info,
        Priority::High => BadgeTone::Warning,
        Priority::Critical => BadgeTone::Danger,
    }
}

fn inspection_result_tone(result: InspectionResult) -> BadgeTone {
    match result {
        InspectionResult::Pass => BadgeTone::Success,
        InspectionResult::Observe => BadgeTone::Warning,
        InspectionResult::Fail => BadgeTone::Danger,
    }
}

fn calibration_result_tone(result: CalibrationResult) -> BadgeTone {
    match result {
        CalibrationResult::Pass => BadgeTone::Success,
        CalibrationResult::Adjusted => BadgeTone::Warning,
        CalibrationResult::Fail => BadgeTone::Danger,
    }
}

pub fn equipment_columns() -> Vec<Column<Equipment>> {
    vec![
        Column::new("code", "Code", |e: &Equipment| CellValue::text(&e.code))
            .width(ColumnWidth::Fixed(110.0))
            .sortable()
            .searchable(),
        Column::new("name", "Name", |e: &Equipment| CellValue::text(&e.name))
            .sortable()
            .searchable(),
        Column::new("category", "Category", |e: &Equipment| {
            CellValue::text(e.category.label())
        })
        .sortable()
        .filterable(options_from_labels(
            &EquipmentCategory::all()
                .iter()
                .map(EquipmentCategory::label)
                .collect::<Vec<_>>(),
        )),
        Column::new("location", "Location", |e: &Equipment| {
            CellValue::text(&e.location)
        })
        .searchable(),
        Column::new("commissioned", "Commissioned", |e: &Equipment| {
            CellValue::opt_date(e.commissioned)
        })
        .width(ColumnWidth::Fixed(130.0))
        .sortable(),
        Column::new("status", "Status", |e: &Equipment| {
            CellValue::badge(e.status.label(), equipment_status_tone(e.status))
        })
        .width(ColumnWidth::Fixed(130.0))
        .sortable()
        .filterable(options_from_labels(
            &EquipmentStatus::all()
                .iter()
                .map(EquipmentStatus::label)
                .collect::<Vec<_>>(),
        )),
    ]
}

pub fn work_order_columns() -> Vec<Column<WorkOrder>> {
    vec![
        Column::new("number", "Number", |w: &WorkOrder| {
            CellValue::text(&w.number)
        })
        .width(ColumnWidth::Fixed(130.0))
        .sortable()
        .searchable(),
        Column::new("title", "Title", |w: &WorkOrder| CellValue::text(&w.title))
            .sortable()
            .searchable(),
        Column::new("equipment", "Equipment", |w: &WorkOrder| {
            CellValue::text(&w.equipment_code)
        })
        .width(ColumnWidth::Fixed(110.0))
        .searchable(),
        Column::new("kind", "Type", |w: &WorkOrder| {
            CellValue::text(w.kind.label())
        })
        .width(ColumnWidth::Fixed(110.0))
        .filterable(options_from_labels(
            &WorkOrderKind::all()
                .iter()
                .map(WorkOrderKind::label)
                .collect::<Vec<_>>(),
        )),
        Column::new("priority", "Priority", |w: &WorkOrder| {
            CellValue::badge(w.priority.label(), priority_tone(w.priority))
        })
        .width(ColumnWidth::Fixed(100.0))
        .filterable(options_from_labels(
            &Priority::all().iter().map(Priority::label).collect::<Vec<_>>(),
        )),
        Column::new("assignee", "Assignee", |w: &WorkOrder| {
            CellValue::text(&w.assignee)
        })
        .searchable(),
        Column::new("due", "Due", |w: &WorkOrder| CellValue::opt_date(w.due))
            .width(ColumnWidth::Fixed(110.0))
            .sortable(),
        Column::new("status", "Status", |w: &WorkOrder| {
            CellValue::badge(w.status.label(), work_order_status_tone(w.status))
        })
        .width(ColumnWidth::Fixed(120.0))
        .sortable()
        .filterable(options_from_labels(
            &WorkOrderStatus::all()
                .iter()
                .map(WorkOrderStatus::label)
                .collect::<Vec<_>>(),
        )),
    ]
}

pub fn inspection_columns() -> Vec<Column<Inspection>> {
    vec![
        Column::new("equipment", "Equipment", |i: &Inspection| {
            CellValue::text(&i.equipment_code)
        })
        .width(ColumnWidth::Fixed(110.0))
        .sortable()
        .searchable(),
        Column::new("inspector", "Inspector", |i: &Inspection| {
            CellValue::text(&i.inspector)
        })
        .searchable(),
        Column::new("scheduled", "Scheduled", |i: &Inspection| {
            CellValue::Date(i.scheduled)
        })
        .width(ColumnWidth::Fixed(120.0))
        .sortable(),
        Column::new("performed", "Performed", |i: &Inspection| {
            CellValue::opt_date(i.performed)
        })
        .width(ColumnWidth::Fixed(120.0))
        .sortable(),
        Column::new("result", "Result", |i: &Inspection| match i.result {
            Some(result) => CellValue::badge(result.label(), inspection_result_tone(result)),
            None => CellValue::Missing,
        })
        .width(ColumnWidth::Fixed(110.0))
        .filterable(options_from_labels(
            &InspectionResult::all()
                .iter()
                .map(InspectionResult::label)
                .collect::<Vec<_>>(),
        )),
        Column::new("findings", "Findings", |i: &Inspection| {
            if i.findings.is_empty() {
                CellValue::Missing
            } else {
                CellValue::text(&i.findings)
            }
        })
        .searchable(),
    ]
}

pub fn pm_schedule_columns() -> Vec<Column<PmSchedule>> {
    vec![
        Column::new("equipment", "Equipment", |p: &PmSchedule| {
            CellValue::text(&p.equipment_code)
        })
        .width(ColumnWidth::Fixed(110.0))
        .sortable()
        .searchable(),
        Column::new("task", "Task", |p: &PmSchedule| CellValue::text(&p.task))
            .sortable()
            .searchable(),
        Column::new("interval", "Interval", |p: &PmSchedule| {
            CellValue::Text(p.interval_label())
        })
        .width(ColumnWidth::Fixed(130.0)),
        Column::new("last_done", "Last Done", |p: &PmSchedule| {
            CellValue::opt_date(p.last_done)
        })
        .width(ColumnWidth::Fixed(120.0))
        .sortable(),
        Column::new("next_due", "Next Due", |p: &PmSchedule| {
            CellValue::opt_date(p.next_due())
        })
        .width(ColumnWidth::Fixed(120.0))
        .sortable(),
        Column::new("active", "State", |p: &PmSchedule| {
            if p.active {
                CellValue::badge("Active", BadgeTone::Success)
            } else {
                CellValue::badge("Paused", BadgeTone::Neutral)
            }
        })
        .width(ColumnWidth::Fixed(100.0))
        .filterable(options_from_labels(&["Active", "Paused"])),
    ]
}

pub fn meter_reading_columns() -> Vec<Column<MeterReading>> {
    vec![
        Column::new("equipment", "Equipment", |m: &MeterReading| {
            CellValue::text(&m.equipment_code)
        })
        .width(ColumnWidth::Fixed(110.0))
        .sortable()
        .searchable(),
        Column::new("meter", "Meter", |m: &MeterReading| CellValue::text(&m.meter))
            .sortable()
            .searchable(),
        Column::new("value", "Value", |m: &MeterReading| CellValue::Float(m.value))
            .width(ColumnWidth::Fixed(110.0))
            .align(CellAlign::End)
            .sortable(),
        Column::new("unit", "Unit", |m: &MeterReading| CellValue::text(&m.unit))
            .width(ColumnWidth::Fixed(90.0)),
        Column::new("read_on", "Read On", |m: &MeterReading| {
            CellValue::Date(m.read_on)
        })
        .width(ColumnWidth::Fixed(120.0))
        .sortable(),
        Column::new("reader", "Reader", |m: &MeterReading| {
            CellValue::text(&m.reader)
        })
        .searchable(),
    ]
}

pub fn calibration_columns() -> Vec<Column<Calibration>> {
    vec![
        Column::new("instrument", "Instrument", |c: &Calibration| {
            CellValue::text(&c.instrument_code)
        })
        .width(ColumnWidth::Fixed(120.0))
        .sortable()
        .searchable(),
        Column::new("name", "Name", |c: &Calibration| {
            CellValue::text(&c.instrument_name)
        })
        .sortable()
        .searchable(),
        Column::new("due", "Due", |c: &Calibration| CellValue::Date(c.due))
            .width(ColumnWidth::Fixed(110.0))
            .sortable(),
        Column::new("performed", "Performed", |c: &Calibration| {
            CellValue::opt_date(c.performed)
        })
        .width(ColumnWidth::Fixed(120.0))
        .sortable(),
        Column::new("result", "Result", |c: &Calibration| match c.result {
            Some(result) => CellValue::badge(result.label(), calibration_result_tone(result)),
            None => CellValue::Missing,
        })
        .width(ColumnWidth::Fixed(110.0))
        .filterable(options_from_labels(
            &CalibrationResult::all()
                .iter()
                .map(CalibrationResult::label)
                .collect::<Vec<_>>(),
        )),
        Column::new("certificate", "Certificate", |c: &Calibration| {
            match &c.certificate {
                Some(certificate) => CellValue::text(certificate),
                None => CellValue::Missing,
            }
        })
        .searchable(),
    ]
}

pub fn organization_columns() -> Vec<Column<Organization>> {
    vec![
        Column::new("code", "Code", |o: &Organization| CellValue::text(&o.code))
            .width(ColumnWidth::Fixed(110.0))
            .sortable()
            .searchable(),
        Column::new("name", "Name", |o: &Organization| CellValue::text(&o.name))
            .sortable()
            .searchable(),
        Column::new("kind", "Kind", |o: &Organization| {
            CellValue::text(o.kind.label())
        })
        .width(ColumnWidth::Fixed(120.0))
        .sortable()
        .filterable(options_from_labels(
            &OrgKind::all().iter().map(OrgKind::label).collect::<Vec<_>>(),
        )),
        Column::new("parent", "Parent", |o: &Organization| {
            match &o.parent_code {
                Some(code) => CellValue::text(code),
                None => CellValue::Missing,
            }
        })
        .width(ColumnWidth::Fixed(110.0)),
    ]
}

pub fn role_columns() -> Vec<Column<Role>> {
    vec![
        Column::new("code", "Code", |r: &Role| CellValue::text(&r.code))
            .width(ColumnWidth::Fixed(130.0))
            .sortable()
            .searchable(),
        Column::new("name", "Name", |r: &Role| CellValue::text(&r.name))
            .sortable()
            .searchable(),
        Column::new("description", "Description", |r: &Role| {
            if r.description.is_empty() {
                CellValue::Missing
            } else {
                CellValue::text(&r.description)
            }
        })
        .searchable(),
        Column::new("permissions", "Permissions", |r: &Role| {
            CellValue::Integer(r.permissions.len() as i64)
        })
        .width(ColumnWidth::Fixed(110.0))
        .align(CellAlign::End)
        .sortable(),
    ]
}

pub fn label_columns() -> Vec<Column<LabelEntry>> {
    vec![
        Column::new("key", "Key", |l: &LabelEntry| CellValue::text(&l.key))
            .sortable()
            .searchable(),
        Column::new("language", "Language", |l: &LabelEntry| {
            CellValue::text(l.language.label())
        })
        .width(ColumnWidth::Fixed(110.0))
        .sortable()
        .filterable(options_from_labels(
            &Language::all().iter().map(Language::label).collect::<Vec<_>>(),
        )),
        Column::new("text", "Text", |l: &LabelEntry| CellValue::text(&l.text))
            .searchable(),
    ]
}

fn crud_actions<T>(kind: RecordKind) -> Vec<Action<T>> {
    vec![
        Action::new("view", "View", ActionIcon::Eye)
            .requires(Permission::new(kind, CrudAction::View)),
        Action::new("edit", "Edit", ActionIcon::Pencil)
            .requires(Permission::new(kind, CrudAction::Edit)),
        Action::new("delete", "Delete", ActionIcon::Trash)
            .tone(ActionTone::Danger)
            .requires(Permission::new(kind, CrudAction::Delete)),
    ]
}

pub fn equipment_actions() -> Vec<Action<Equipment>> {
    crud_actions(RecordKind::Equipment)
}

/// Work orders add lifecycle actions that only show for the states that
/// accept them.
pub fn work_order_actions() -> Vec<Action<WorkOrder>> {
    let mut actions = crud_actions(RecordKind::WorkOrders);
    actions.push(
        Action::new("start", "Start", ActionIcon::Play)
            .requires(Permission::new(RecordKind::WorkOrders, CrudAction::Edit))
            .hidden_when(|order: &WorkOrder| order.status != WorkOrderStatus::Pending),
    );
    actions.push(
        Action::new("complete", "Complete", ActionIcon::Check)
            .requires(Permission::new(RecordKind::WorkOrders, CrudAction::Edit))
            .hidden_when(|order: &WorkOrder| order.status != WorkOrderStatus::InProgress),
    );
    actions
}

pub fn inspection_actions() -> Vec<Action<Inspection>> {
    crud_actions(RecordKind::Inspections)
}

pub fn pm_schedule_actions() -> Vec<Action<PmSchedule>> {
    crud_actions(RecordKind::PmSchedules)
}

pub fn meter_reading_actions() -> Vec<Action<MeterReading>> {
    crud_actions(RecordKind::Meters)
}

pub fn calibration_actions() -> Vec<Action<Calibration>> {
    crud_actions(RecordKind::Calibrations)
}

pub fn organization_actions() -> Vec<Action<Organization>> {
    crud_actions(RecordKind::Organizations)
}

pub fn role_actions() -> Vec<Action<Role>> {
    crud_actions(RecordKind::Roles)
}

pub fn label_actions() -> Vec<Action<LabelEntry>> {
    crud_actions(RecordKind::Labels)
}
