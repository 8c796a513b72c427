//! Application state.

pub mod navigation;
pub mod screen;

use cmms_core::AccessPolicy;
use cmms_model::{
    Calibration, Equipment, Inspection, LabelEntry, Labels, MeterReading, Organization,
    PmSchedule, Role, WorkOrder,
};
use cmms_store::{fixtures, Dataset, JsonStore};
use tracing::{info, warn};

pub use navigation::View;
pub use screen::ScreenState;

use crate::settings::Settings;

/// One UI state bundle per management screen.
pub struct Screens {
    pub equipment: ScreenState<Equipment>,
    pub work_orders: ScreenState<WorkOrder>,
    pub inspections: ScreenState<Inspection>,
    pub pm_schedules: ScreenState<PmSchedule>,
    pub meter_readings: ScreenState<MeterReading>,
    pub calibrations: ScreenState<Calibration>,
    pub organizations: ScreenState<Organization>,
    pub roles: ScreenState<Role>,
    pub labels: ScreenState<LabelEntry>,
}

impl Screens {
    pub fn new(page_size: usize) -> Self {
        Self {
            equipment: ScreenState::new(page_size),
            work_orders: ScreenState::new(page_size),
            inspections: ScreenState::new(page_size),
            pm_schedules: ScreenState::new(page_size),
            meter_readings: ScreenState::new(page_size),
            calibrations: ScreenState::new(page_size),
            organizations: ScreenState::new(page_size),
            roles: ScreenState::new(page_size),
            labels: ScreenState::new(page_size),
        }
    }
}

/// All application state.
pub struct AppState {
    pub view: View,
    pub screens: Screens,
    pub data: Dataset,
    pub access: AccessPolicy,
    pub labels: Labels,
    pub settings: Settings,
}

impl AppState {
    /// Build the initial state: settings from disk, the configured dataset
    /// store (or sample data), and the access policy of the configured
    /// account.
    pub fn with_settings(settings: Settings) -> Self {
        let data = match &settings.data_path {
            Some(path) => match JsonStore::new(path).load() {
                Ok(dataset) => {
                    info!(path = %path.display(), "loaded dataset store");
                    dataset
                }
                Err(error) => {
                    warn!(path = %path.display(), %error, "falling back to sample data");
                    fixtures::sample_dataset()
                }
            },
            None => fixtures::sample_dataset(),
        };

        let access = resolve_access(&settings.username, &data);
        let labels = Labels::from_entries(settings.language, data.labels.records());

        Self {
            view: View::default(),
            screens: Screens::new(settings.page_size),
            data,
            access,
            labels,
            settings,
        }
    }

    /// Re-resolve the label catalog, e.g. after the language changed or a
    /// label record was edited.
    pub fn refresh_labels(&mut self) {
        self.labels = Labels::from_entries(self.settings.language, self.data.labels.records());
    }
}

fn resolve_access(username: &str, data: &Dataset) -> AccessPolicy {
    match data
        .users
        .records()
        .iter()
        .find(|user| user.active && user.username == username)
    {
        Some(user) => AccessPolicy::for_user(user, data.roles.records()),
        None => {
            warn!(username, "no matching account, running unrestricted");
            AccessPolicy::unrestricted()
        }
    }
}
