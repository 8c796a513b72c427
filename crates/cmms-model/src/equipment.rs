//! Equipment master records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: Uuid,
    /// Plant-wide asset code, unique by convention (e.g. "PMP-001").
    pub code: String,
    pub name: String,
    pub category: EquipmentCategory,
    pub location: String,
    pub manufacturer: String,
    pub model: String,
    pub commissioned: Option<NaiveDate>,
    pub status: EquipmentStatus,
}

impl Entity for Equipment {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentStatus {
    #[default]
    Running,
    Standby,
    Maintenance,
    Retired,
}

impl EquipmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Standby => "Standby",
            Self::Maintenance => "Maintenance",
            Self::Retired => "Retired",
        }
    }

    pub const fn all() -> &'static [EquipmentStatus] {
        &[
            Self::Running,
            Self::Standby,
            Self::Maintenance,
            Self::Retired,
        ]
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|status| status.label().eq_ignore_ascii_case(value.trim()))
    }
}

impl std::fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentCategory {
    #[default]
    Mechanical,
    Electrical,
    Instrumentation,
    Hvac,
    Utility,
}

impl EquipmentCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mechanical => "Mechanical",
            Self::Electrical => "Electrical",
            Self::Instrumentation => "Instrumentation",
            Self::Hvac => "HVAC",
            Self::Utility => "Utility",
        }
    }

    pub const fn all() -> &'static [EquipmentCategory] {
        &[
            Self::Mechanical,
            Self::Electrical,
            Self::Instrumentation,
            Self::Hvac,
            Self::Utility,
        ]
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|category| category.label().eq_ignore_ascii_case(value.trim()))
    }
}

impl std::fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
