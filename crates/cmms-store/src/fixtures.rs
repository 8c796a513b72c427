//! Deterministic sample plant data.
//!
//! Seeds the console when no dataset file is configured and backs the test
//! suites. Ids are fixed so references between collections stay stable
//! across runs.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use cmms_model::{
    Calibration, CalibrationResult, CrudAction, Equipment, EquipmentCategory, EquipmentStatus,
    Inspection, InspectionResult, IntervalUnit, LabelEntry, Language, MeterReading, Organization,
    OrgKind, Permission, PmSchedule, Priority, RecordKind, Role, UserAccount, WorkOrder,
    WorkOrderKind, WorkOrderStatus,
};
use uuid::Uuid;

use crate::dataset::Dataset;
use crate::repository::MemoryRepository;

fn id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

const EQ_PUMP: u128 = 0x1001;
const EQ_VALVE: u128 = 0x1002;
const EQ_COMPRESSOR: u128 = 0x1003;
const EQ_CONVEYOR: u128 = 0x1004;
const EQ_CHILLER: u128 = 0x1005;
const EQ_PANEL: u128 = 0x1006;

const ORG_COMPANY: u128 = 0x7001;
const ORG_SITE: u128 = 0x7002;
const ORG_MAINT: u128 = 0x7003;
const ORG_SHIFT_A: u128 = 0x7004;

pub fn sample_dataset() -> Dataset {
    Dataset {
        equipment: MemoryRepository::with_records(equipment()),
        work_orders: MemoryRepository::with_records(work_orders()),
        inspections: MemoryRepository::with_records(inspections()),
        pm_schedules: MemoryRepository::with_records(pm_schedules()),
        meter_readings: MemoryRepository::with_records(meter_readings()),
        calibrations: MemoryRepository::with_records(calibrations()),
        organizations: MemoryRepository::with_records(organizations()),
        roles: MemoryRepository::with_records(roles()),
        users: MemoryRepository::with_records(users()),
        labels: MemoryRepository::with_records(labels()),
    }
}

fn equipment() -> Vec<Equipment> {
    vec![
        Equipment {
            id: id(EQ_PUMP),
            code: "PMP-001".to_string(),
            name: "Boiler feed pump".to_string(),
            category: EquipmentCategory::Mechanical,
            location: "Hall A / Line 1".to_string(),
            manufacturer: "Grundfos".to_string(),
            model: "CR 32-4".to_string(),
            commissioned: Some(date(2019, 3, 18)),
            status: EquipmentStatus::Running,
        },
        Equipment {
            id: id(EQ_VALVE),
            code: "VLV-010".to_string(),
            name: "Steam control valve".to_string(),
            category: EquipmentCategory::Instrumentation,
            location: "Hall A / Line 1".to_string(),
            manufacturer: "Samson".to_string(),
            model: "3241-7".to_string(),
            commissioned: Some(date(2019, 3, 18)),
            status: EquipmentStatus::Maintenance,
        },
        Equipment {
            id: id(EQ_COMPRESSOR),
            code: "CMP-002".to_string(),
            name: "Air compressor 2".to_string(),
            category: EquipmentCategory::Mechanical,
            location: "Utility room".to_string(),
            manufacturer: "Atlas Copco".to_string(),
            model: "GA 37".to_string(),
            commissioned: Some(date(2021, 11, 2)),
            status: EquipmentStatus::Running,
        },
        Equipment {
            id: id(EQ_CONVEYOR),
            code: "CNV-005".to_string(),
            name: "Packing conveyor".to_string(),
            category: EquipmentCategory::Mechanical,
            location: "Hall B / Packing".to_string(),
            manufacturer: "Interroll".to_string(),
            model: "MCP 40".to_string(),
            commissioned: Some(date(2017, 6, 30)),
            status: EquipmentStatus::Standby,
        },
        Equipment {
            id: id(EQ_CHILLER),
            code: "CHL-001".to_string(),
            name: "Process chiller".to_string(),
            category: EquipmentCategory::Hvac,
            location: "Roof".to_string(),
            manufacturer: "Trane".to_string(),
            model: "CGAM 52".to_string(),
            commissioned: Some(date(2020, 8, 14)),
            status: EquipmentStatus::Running,
        },
        Equipment {
            id: id(EQ_PANEL),
            code: "ELP-003".to_string(),
            name: "Distribution panel 3".to_string(),
            category: EquipmentCategory::Electrical,
            location: "Hall B / Substation".to_string(),
            manufacturer: "Siemens".to_string(),
            model: "Sivacon S8".to_string(),
            commissioned: Some(date(2015, 1, 9)),
            status: EquipmentStatus::Retired,
        },
    ]
}

fn work_orders() -> Vec<WorkOrder> {
    vec![
        WorkOrder {
            id: id(0x2001),
            number: "WO-2026-0012".to_string(),
            title: "Replace mechanical seal".to_string(),
            equipment_id: id(EQ_PUMP),
            equipment_code: "PMP-001".to_string(),
            kind: WorkOrderKind::Corrective,
            priority: Priority::High,
            status: WorkOrderStatus::Pending,
            assignee: "m.keller".to_string(),
            due: Some(date(2026, 8, 10)),
            completed: None,
        },
        WorkOrder {
            id: id(0x2002),
            number: "WO-2026-0013".to_string(),
            title: "Quarterly lubrication round".to_string(),
            equipment_id: id(EQ_CONVEYOR),
            equipment_code: "CNV-005".to_string(),
            kind: WorkOrderKind::Preventive,
            priority: Priority::Medium,
            status: WorkOrderStatus::InProgress,
            assignee: "s.novak".to_string(),
            due: Some(date(2026, 8, 4)),
            completed: None,
        },
        WorkOrder {
            id: id(0x2003),
            number: "WO-2026-0014".to_string(),
            title: "Valve positioner drift".to_string(),
            equipment_id: id(EQ_VALVE),
            equipment_code: "VLV-010".to_string(),
            kind: WorkOrderKind::Corrective,
            priority: Priority::Critical,
            status: WorkOrderStatus::InProgress,
            assignee: "m.keller".to_string(),
            due: Some(date(2026, 7, 30)),
            completed: None,
        },
        WorkOrder {
            id: id(0x2004),
            number: "WO-2026-0009".to_string(),
            title: "Compressor filter change".to_string(),
            equipment_id: id(EQ_COMPRESSOR),
            equipment_code: "CMP-002".to_string(),
            kind: WorkOrderKind::Preventive,
            priority: Priority::Low,
            status: WorkOrderStatus::Completed,
            assignee: "s.novak".to_string(),
            due: Some(date(2026, 7, 15)),
            completed: Some(date(2026, 7, 14)),
        },
        WorkOrder {
            id: id(0x2005),
            number: "WO-2026-0010".to_string(),
            title: "Chiller refrigerant top-up".to_string(),
            equipment_id: id(EQ_CHILLER),
            equipment_code: "CHL-001".to_string(),
            kind: WorkOrderKind::Emergency,
            priority: Priority::High,
            status: WorkOrderStatus::Cancelled,
            assignee: "j.brand".to_string(),
            due: Some(date(2026, 7, 20)),
            completed: None,
        },
    ]
}

fn inspections() -> Vec<Inspection> {
    vec![
        Inspection {
            id: id(0x3001),
            equipment_id: id(EQ_PUMP),
            equipment_code: "PMP-001".to_string(),
            inspector: "j.brand".to_string(),
            scheduled: date(2026, 7, 28),
            performed: Some(date(2026, 7, 28)),
            result: Some(InspectionResult::Pass),
            findings: String::new(),
        },
        Inspection {
            id: id(0x3002),
            equipment_id: id(EQ_VALVE),
            equipment_code: "VLV-010".to_string(),
            inspector: "j.brand".to_string(),
            scheduled: date(2026, 7, 28),
            performed: Some(date(2026, 7, 29)),
            result: Some(InspectionResult::Fail),
            findings: "Positioner hunting under low load".to_string(),
        },
        Inspection {
            id: id(0x3003),
            equipment_id: id(EQ_CHILLER),
            equipment_code: "CHL-001".to_string(),
            inspector: "a.osei".to_string(),
            scheduled: date(2026, 8, 12),
            performed: None,
            result: None,
            findings: String::new(),
        },
        Inspection {
            id: id(0x3004),
            equipment_id: id(EQ_COMPRESSOR),
            equipment_code: "CMP-002".to_string(),
            inspector: "a.osei".to_string(),
            scheduled: date(2026, 8, 1),
            performed: Some(date(2026, 8, 1)),
            result: Some(InspectionResult::Observe),
            findings: "Slight oil mist at separator".to_string(),
        },
    ]
}

fn pm_schedules() -> Vec<PmSchedule> {
    vec![
        PmSchedule {
            id: id(0x4001),
            equipment_id: id(EQ_PUMP),
            equipment_code: "PMP-001".to_string(),
            task: "Grease bearings".to_string(),
            interval_count: 4,
            interval_unit: IntervalUnit::Weeks,
            last_done: Some(date(2026, 7, 20)),
            active: true,
        },
        PmSchedule {
            id: id(0x4002),
            equipment_id: id(EQ_COMPRESSOR),
            equipment_code: "CMP-002".to_string(),
            task: "Change air filter".to_string(),
            interval_count: 3,
            interval_unit: IntervalUnit::Months,
            last_done: Some(date(2026, 7, 14)),
            active: true,
        },
        PmSchedule {
            id: id(0x4003),
            equipment_id: id(EQ_CHILLER),
            equipment_code: "CHL-001".to_string(),
            task: "Clean condenser coils".to_string(),
            interval_count: 6,
            interval_unit: IntervalUnit::Months,
            last_done: Some(date(2026, 4, 2)),
            active: true,
        },
        PmSchedule {
            id: id(0x4004),
            equipment_id: id(EQ_CONVEYOR),
            equipment_code: "CNV-005".to_string(),
            task: "Belt tension check".to_string(),
            interval_count: 14,
            interval_unit: IntervalUnit::Days,
            last_done: None,
            active: false,
        },
    ]
}

fn meter_readings() -> Vec<MeterReading> {
    vec![
        MeterReading {
            id: id(0x5001),
            equipment_id: id(EQ_PUMP),
            equipment_code: "PMP-001".to_string(),
            meter: "Run hours".to_string(),
            unit: "h".to_string(),
            value: 18_250.0,
            read_on: date(2026, 8, 1),
            reader: "s.novak".to_string(),
        },
        MeterReading {
            id: id(0x5002),
            equipment_id: id(EQ_PUMP),
            equipment_code: "PMP-001".to_string(),
            meter: "Discharge pressure".to_string(),
            unit: "bar".to_string(),
            value: 16.4,
            read_on: date(2026, 8, 1),
            reader: "s.novak".to_string(),
        },
        MeterReading {
            id: id(0x5003),
            equipment_id: id(EQ_COMPRESSOR),
            equipment_code: "CMP-002".to_string(),
            meter: "Run hours".to_string(),
            unit: "h".to_string(),
            value: 9_411.5,
            read_on: date(2026, 8, 3),
            reader: "a.osei".to_string(),
        },
        MeterReading {
            id: id(0x5004),
            equipment_id: id(EQ_CHILLER),
            equipment_code: "CHL-001".to_string(),
            meter: "Supply temperature".to_string(),
            unit: "°C".to_string(),
            value: 6.8,
            read_on: date(2026, 8, 5),
            reader: "a.osei".to_string(),
        },
    ]
}

fn calibrations() -> Vec<Calibration> {
    vec![
        Calibration {
            id: id(0x6001),
            instrument_code: "PT-101".to_string(),
            instrument_name: "Boiler pressure transmitter".to_string(),
            due: date(2026, 9, 1),
            performed: Some(date(2025, 9, 1)),
            result: Some(CalibrationResult::Pass),
            certificate: Some("CAL-2025-118".to_string()),
        },
        Calibration {
            id: id(0x6002),
            instrument_code: "TT-204".to_string(),
            instrument_name: "Chiller supply RTD".to_string(),
            due: date(2026, 7, 15),
            performed: None,
            result: None,
            certificate: None,
        },
        Calibration {
            id: id(0x6003),
            instrument_code: "FT-330".to_string(),
            instrument_name: "Feed water flow meter".to_string(),
            due: date(2026, 11, 20),
            performed: Some(date(2025, 11, 20)),
            result: Some(CalibrationResult::Adjusted),
            certificate: Some("CAL-2025-141".to_string()),
        },
    ]
}

fn organizations() -> Vec<Organization> {
    vec![
        Organization {
            id: id(ORG_COMPANY),
            code: "ACME".to_string(),
            name: "Acme Process GmbH".to_string(),
            kind: OrgKind::Company,
            parent_id: None,
            parent_code: None,
        },
        Organization {
            id: id(ORG_SITE),
            code: "ACME-WOB".to_string(),
            name: "Wolfsburg plant".to_string(),
            kind: OrgKind::Site,
            parent_id: Some(id(ORG_COMPANY)),
            parent_code: Some("ACME".to_string()),
        },
        Organization {
            id: id(ORG_MAINT),
            code: "WOB-MAINT".to_string(),
            name: "Maintenance department".to_string(),
            kind: OrgKind::Department,
            parent_id: Some(id(ORG_SITE)),
            parent_code: Some("ACME-WOB".to_string()),
        },
        Organization {
            id: id(ORG_SHIFT_A),
            code: "MAINT-A".to_string(),
            name: "Shift A".to_string(),
            kind: OrgKind::Team,
            parent_id: Some(id(ORG_MAINT)),
            parent_code: Some("WOB-MAINT".to_string()),
        },
    ]
}

fn roles() -> Vec<Role> {
    let viewer: BTreeSet<Permission> = RecordKind::all()
        .iter()
        .map(|kind| Permission::new(*kind, CrudAction::View))
        .collect();

    let mut maintainer = viewer.clone();
    for kind in [
        RecordKind::Equipment,
        RecordKind::WorkOrders,
        RecordKind::Inspections,
        RecordKind::PmSchedules,
        RecordKind::Meters,
        RecordKind::Calibrations,
    ] {
        maintainer.extend(Permission::full(kind));
    }

    let admin: BTreeSet<Permission> = RecordKind::all()
        .iter()
        .flat_map(|kind| Permission::full(*kind))
        .collect();

    vec![
        Role {
            id: id(0x8001),
            code: "viewer".to_string(),
            name: "Viewer".to_string(),
            description: "Read-only access to every screen".to_string(),
            permissions: viewer,
        },
        Role {
            id: id(0x8002),
            code: "maintainer".to_string(),
            name: "Maintainer".to_string(),
            description: "Full access to maintenance records".to_string(),
            permissions: maintainer,
        },
        Role {
            id: id(0x8003),
            code: "admin".to_string(),
            name: "Administrator".to_string(),
            description: "Full access including organizations and roles".to_string(),
            permissions: admin,
        },
    ]
}

fn users() -> Vec<UserAccount> {
    vec![
        UserAccount {
            id: id(0x9001),
            username: "m.keller".to_string(),
            display_name: "Martina Keller".to_string(),
            org_id: Some(id(ORG_SHIFT_A)),
            roles: vec!["maintainer".to_string()],
            active: true,
        },
        UserAccount {
            id: id(0x9002),
            username: "s.novak".to_string(),
            display_name: "Stefan Novak".to_string(),
            org_id: Some(id(ORG_SHIFT_A)),
            roles: vec!["maintainer".to_string()],
            active: true,
        },
        UserAccount {
            id: id(0x9003),
            username: "admin".to_string(),
            display_name: "Site Administrator".to_string(),
            org_id: Some(id(ORG_MAINT)),
            roles: vec!["admin".to_string()],
            active: true,
        },
    ]
}

fn labels() -> Vec<LabelEntry> {
    let mut entries = Vec::new();
    let mut n: u128 = 0xa001;
    let mut push = |key: &str, language: Language, text: &str| {
        entries.push(LabelEntry {
            id: id({
                let current = n;
                n += 1;
                current
            }),
            key: key.to_string(),
            language,
            text: text.to_string(),
        });
    };

    push("nav.dashboard", Language::En, "Dashboard");
    push("nav.dashboard", Language::De, "Übersicht");
    push("nav.equipment", Language::En, "Equipment");
    push("nav.equipment", Language::De, "Anlagen");
    push("nav.work_orders", Language::En, "Work Orders");
    push("nav.work_orders", Language::De, "Arbeitsaufträge");
    push("nav.inspections", Language::En, "Inspections");
    push("nav.inspections", Language::De, "Prüfungen");
    push("nav.pm_schedules", Language::En, "PM Schedules");
    push("nav.pm_schedules", Language::De, "Wartungspläne");
    push("nav.meters", Language::En, "Meter Readings");
    push("nav.meters", Language::De, "Zählerstände");
    push("nav.calibrations", Language::En, "Calibrations");
    push("nav.calibrations", Language::De, "Kalibrierungen");
    push("nav.organizations", Language::En, "Organizations");
    push("nav.organizations", Language::De, "Organisationen");
    push("nav.roles", Language::En, "Roles");
    push("nav.roles", Language::De, "Rollen");
    push("nav.labels", Language::En, "Labels");
    push("nav.labels", Language::De, "Beschriftungen");
    push("nav.settings", Language::En, "Settings");
    push("nav.settings", Language::De, "Einstellungen");

    entries
}
