//! Meter readings and instrument calibration records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeterReading {
    pub id: Uuid,
    pub equipment_id: Uuid,
    pub equipment_code: String,
    /// Meter point name (e.g. "Run hours", "Discharge pressure").
    pub meter: String,
    pub unit: String,
    pub value: f64,
    pub read_on: NaiveDate,
    pub reader: String,
}

impl Entity for MeterReading {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    pub id: Uuid,
    pub instrument_code: String,
    pub instrument_name: String,
    pub due: NaiveDate,
    pub performed: Option<NaiveDate>,
    pub result: Option<CalibrationResult>,
    pub certificate: Option<String>,
}

impl Calibration {
    pub fn overdue(&self, today: NaiveDate) -> bool {
        self.performed.is_none() && self.due < today
    }
}

impl Entity for Calibration {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalibrationResult {
    Pass,
    Adjusted,
    Fail,
}

impl CalibrationResult {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Adjusted => "Adjusted",
            Self::Fail => "Fail",
        }
    }

    pub const fn all() -> &'static [CalibrationResult] {
        &[Self::Pass, Self::Adjusted, Self::Fail]
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|result| result.label().eq_ignore_ascii_case(value.trim()))
    }
}

impl std::fmt::Display for CalibrationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
