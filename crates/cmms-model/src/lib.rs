pub mod account;
pub mod equipment;
pub mod error;
pub mod inspection;
pub mod kind;
pub mod labels;
pub mod metering;
pub mod org;
pub mod pm_schedule;
pub mod work_order;

use uuid::Uuid;

pub use account::{CrudAction, Permission, Role, UserAccount};
pub use equipment::{Equipment, EquipmentCategory, EquipmentStatus};
pub use error::{ModelError, Result};
pub use inspection::{Inspection, InspectionResult};
pub use kind::RecordKind;
pub use labels::{LabelEntry, Labels, Language};
pub use metering::{Calibration, CalibrationResult, MeterReading};
pub use org::{OrgKind, Organization};
pub use pm_schedule::{IntervalUnit, PmSchedule};
pub use work_order::{Priority, WorkOrder, WorkOrderKind, WorkOrderStatus};

/// A domain record with a stable identity.
///
/// Every record managed by a console screen implements this; repositories
/// and row selection key off the id.
pub trait Entity {
    fn id(&self) -> Uuid;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_kinds_are_unique() {
        let mut labels: Vec<&str> = RecordKind::all().iter().map(RecordKind::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), RecordKind::all().len());
    }

    #[test]
    fn equipment_serializes() {
        let equipment = Equipment {
            id: Uuid::from_u128(1),
            code: "PMP-001".to_string(),
            name: "Feed pump".to_string(),
            category: EquipmentCategory::Mechanical,
            location: "Hall A".to_string(),
            manufacturer: "Grundfos".to_string(),
            model: "CR 32".to_string(),
            commissioned: None,
            status: EquipmentStatus::Running,
        };
        let json = serde_json::to_string(&equipment).expect("serialize equipment");
        let round: Equipment = serde_json::from_str(&json).expect("deserialize equipment");
        assert_eq!(round.code, "PMP-001");
        assert_eq!(round.status, EquipmentStatus::Running);
    }
}
