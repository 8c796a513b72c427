//! Equipment inspection records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inspection {
    pub id: Uuid,
    pub equipment_id: Uuid,
    pub equipment_code: String,
    pub inspector: String,
    pub scheduled: NaiveDate,
    pub performed: Option<NaiveDate>,
    /// None until the inspection has been carried out.
    pub result: Option<InspectionResult>,
    pub findings: String,
}

impl Inspection {
    pub fn is_done(&self) -> bool {
        self.performed.is_some()
    }

    pub fn overdue(&self, today: NaiveDate) -> bool {
        self.performed.is_none() && self.scheduled < today
    }
}

impl Entity for Inspection {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InspectionResult {
    Pass,
    Observe,
    Fail,
}

impl InspectionResult {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Observe => "Observe",
            Self::Fail => "Fail",
        }
    }

    pub const fn all() -> &'static [InspectionResult] {
        &[Self::Pass, Self::Observe, Self::Fail]
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|result| result.label().eq_ignore_ascii_case(value.trim()))
    }
}

impl std::fmt::Display for InspectionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
