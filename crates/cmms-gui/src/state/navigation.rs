//! Navigation state.

use cmms_model::RecordKind;

/// Current view/screen in the application.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Dashboard with status summaries.
    #[default]
    Dashboard,
    /// One management screen per record kind.
    Manage(RecordKind),
    /// Application settings.
    Settings,
}

impl View {
    /// Position inside the sidebar: dashboard, then every record kind,
    /// then settings.
    pub fn sidebar_index(&self) -> usize {
        match self {
            Self::Dashboard => 0,
            Self::Manage(kind) => {
                1 + RecordKind::all()
                    .iter()
                    .position(|candidate| candidate == kind)
                    .unwrap_or(0)
            }
            Self::Settings => 1 + RecordKind::all().len(),
        }
    }

    pub fn managed_kind(&self) -> Option<RecordKind> {
        match self {
            Self::Manage(kind) => Some(*kind),
            _ => None,
        }
    }
}
