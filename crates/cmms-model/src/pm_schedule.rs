//! Preventive maintenance schedules.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PmSchedule {
    pub id: Uuid,
    pub equipment_id: Uuid,
    pub equipment_code: String,
    pub task: String,
    pub interval_count: u32,
    pub interval_unit: IntervalUnit,
    pub last_done: Option<NaiveDate>,
    pub active: bool,
}

impl PmSchedule {
    /// Next due date derived from the last execution and the interval.
    ///
    /// A schedule that has never run has no due date; the first execution
    /// anchors the cycle.
    pub fn next_due(&self) -> Option<NaiveDate> {
        let last = self.last_done?;
        match self.interval_unit {
            IntervalUnit::Days => last.checked_add_days(Days::new(u64::from(self.interval_count))),
            IntervalUnit::Weeks => {
                last.checked_add_days(Days::new(u64::from(self.interval_count) * 7))
            }
            IntervalUnit::Months => last.checked_add_months(Months::new(self.interval_count)),
        }
    }

    pub fn due_within(&self, today: NaiveDate, days: u64) -> bool {
        if !self.active {
            return false;
        }
        match self.next_due() {
            Some(due) => {
                due >= today && today.checked_add_days(Days::new(days)).is_some_and(|end| due <= end)
            }
            None => false,
        }
    }

    pub fn interval_label(&self) -> String {
        let unit = match self.interval_unit {
            IntervalUnit::Days => "day",
            IntervalUnit::Weeks => "week",
            IntervalUnit::Months => "month",
        };
        if self.interval_count == 1 {
            format!("every {unit}")
        } else {
            format!("every {} {unit}s", self.interval_count)
        }
    }
}

impl Entity for PmSchedule {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntervalUnit {
    Days,
    Weeks,
    #[default]
    Months,
}

impl IntervalUnit {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Days => "Days",
            Self::Weeks => "Weeks",
            Self::Months => "Months",
        }
    }

    pub const fn all() -> &'static [IntervalUnit] {
        &[Self::Days, Self::Weeks, Self::Months]
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|unit| unit.label().eq_ignore_ascii_case(value.trim()))
    }
}

impl std::fmt::Display for IntervalUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
