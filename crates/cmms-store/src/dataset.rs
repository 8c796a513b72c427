//! The aggregate dataset and its JSON persistence.

use std::fs;
use std::path::{Path, PathBuf};

use cmms_model::{
    Calibration, Equipment, Inspection, LabelEntry, MeterReading, Organization, PmSchedule, Role,
    UserAccount, WorkOrder,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::repository::MemoryRepository;

/// Every record collection the console manages, in one place.
///
/// The GUI owns one of these for its session; the CLI loads one from disk
/// or from fixtures per invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub equipment: MemoryRepository<Equipment>,
    pub work_orders: MemoryRepository<WorkOrder>,
    pub inspections: MemoryRepository<Inspection>,
    pub pm_schedules: MemoryRepository<PmSchedule>,
    pub meter_readings: MemoryRepository<MeterReading>,
    pub calibrations: MemoryRepository<Calibration>,
    pub organizations: MemoryRepository<Organization>,
    pub roles: MemoryRepository<Role>,
    pub users: MemoryRepository<UserAccount>,
    pub labels: MemoryRepository<LabelEntry>,
}

/// Whole-dataset JSON persistence at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Dataset> {
        let bytes = fs::read(&self.path)?;
        let dataset: Dataset = serde_json::from_slice(&bytes)?;
        debug!(
            path = %self.path.display(),
            equipment = dataset.equipment.records().len(),
            work_orders = dataset.work_orders.records().len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    pub fn save(&self, dataset: &Dataset) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(dataset)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "saved dataset");
        Ok(())
    }
}
