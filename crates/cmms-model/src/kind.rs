//! Record kind enumeration.
//!
//! Every management screen of the console operates on exactly one record
//! kind. The enum doubles as the navigation key and the permission domain.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    Equipment,
    WorkOrders,
    Inspections,
    PmSchedules,
    Meters,
    Calibrations,
    Organizations,
    Roles,
    Labels,
}

impl RecordKind {
    /// Default English display name for the screen.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Equipment => "Equipment",
            Self::WorkOrders => "Work Orders",
            Self::Inspections => "Inspections",
            Self::PmSchedules => "PM Schedules",
            Self::Meters => "Meter Readings",
            Self::Calibrations => "Calibrations",
            Self::Organizations => "Organizations",
            Self::Roles => "Roles",
            Self::Labels => "Labels",
        }
    }

    /// Singular name used in form titles ("New Work Order").
    pub fn singular(&self) -> &'static str {
        match self {
            Self::Equipment => "Equipment",
            Self::WorkOrders => "Work Order",
            Self::Inspections => "Inspection",
            Self::PmSchedules => "PM Schedule",
            Self::Meters => "Meter Reading",
            Self::Calibrations => "Calibration",
            Self::Organizations => "Organization",
            Self::Roles => "Role",
            Self::Labels => "Label",
        }
    }

    /// Translation key for the navigation entry.
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Equipment => "nav.equipment",
            Self::WorkOrders => "nav.work_orders",
            Self::Inspections => "nav.inspections",
            Self::PmSchedules => "nav.pm_schedules",
            Self::Meters => "nav.meters",
            Self::Calibrations => "nav.calibrations",
            Self::Organizations => "nav.organizations",
            Self::Roles => "nav.roles",
            Self::Labels => "nav.labels",
        }
    }

    /// All kinds in sidebar display order.
    pub const fn all() -> &'static [RecordKind] {
        &[
            Self::Equipment,
            Self::WorkOrders,
            Self::Inspections,
            Self::PmSchedules,
            Self::Meters,
            Self::Calibrations,
            Self::Organizations,
            Self::Roles,
            Self::Labels,
        ]
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
