//! Maintenance work orders.
//!
//! Work orders carry an explicit status lifecycle: Pending -> InProgress ->
//! Completed, with cancellation allowed from any open state. Transitions are
//! enforced here so screens and the CLI cannot produce impossible states.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ModelError, Result};
use crate::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: Uuid,
    /// Sequential display number (e.g. "WO-2026-0014").
    pub number: String,
    pub title: String,
    pub equipment_id: Uuid,
    /// Asset code snapshot so listings don't need a join.
    pub equipment_code: String,
    pub kind: WorkOrderKind,
    pub priority: Priority,
    pub status: WorkOrderStatus,
    pub assignee: String,
    pub due: Option<NaiveDate>,
    pub completed: Option<NaiveDate>,
}

impl WorkOrder {
    /// Move a pending order into execution.
    pub fn start(&mut self) -> Result<()> {
        match self.status {
            WorkOrderStatus::Pending => {
                self.status = WorkOrderStatus::InProgress;
                Ok(())
            }
            other => Err(ModelError::InvalidTransition {
                from: other.label(),
                to: WorkOrderStatus::InProgress.label(),
            }),
        }
    }

    /// Close out an in-progress order.
    pub fn complete(&mut self, on: NaiveDate) -> Result<()> {
        match self.status {
            WorkOrderStatus::InProgress => {
                self.status = WorkOrderStatus::Completed;
                self.completed = Some(on);
                Ok(())
            }
            other => Err(ModelError::InvalidTransition {
                from: other.label(),
                to: WorkOrderStatus::Completed.label(),
            }),
        }
    }

    /// Cancel an order that has not been completed.
    pub fn cancel(&mut self) -> Result<()> {
        match self.status {
            WorkOrderStatus::Pending | WorkOrderStatus::InProgress => {
                self.status = WorkOrderStatus::Cancelled;
                Ok(())
            }
            other => Err(ModelError::InvalidTransition {
                from: other.label(),
                to: WorkOrderStatus::Cancelled.label(),
            }),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(
            self.status,
            WorkOrderStatus::Pending | WorkOrderStatus::InProgress
        )
    }

    pub fn overdue(&self, today: NaiveDate) -> bool {
        self.is_open() && self.due.is_some_and(|due| due < today)
    }
}

impl Entity for WorkOrder {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkOrderKind {
    #[default]
    Corrective,
    Preventive,
    Emergency,
}

impl WorkOrderKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Corrective => "Corrective",
            Self::Preventive => "Preventive",
            Self::Emergency => "Emergency",
        }
    }

    pub const fn all() -> &'static [WorkOrderKind] {
        &[Self::Corrective, Self::Preventive, Self::Emergency]
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.label().eq_ignore_ascii_case(value.trim()))
    }
}

impl std::fmt::Display for WorkOrderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    pub const fn all() -> &'static [Priority] {
        &[Self::Low, Self::Medium, Self::High, Self::Critical]
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|priority| priority.label().eq_ignore_ascii_case(value.trim()))
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkOrderStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl WorkOrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    pub const fn all() -> &'static [WorkOrderStatus] {
        &[
            Self::Pending,
            Self::InProgress,
            Self::Completed,
            Self::Cancelled,
        ]
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|status| status.label().eq_ignore_ascii_case(value.trim()))
    }
}

impl std::fmt::Display for WorkOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
