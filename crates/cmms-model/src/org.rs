//! Organization tree records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub kind: OrgKind,
    pub parent_id: Option<Uuid>,
    /// Code snapshot of the parent for display without a lookup.
    pub parent_code: Option<String>,
}

impl Entity for Organization {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrgKind {
    Company,
    Site,
    #[default]
    Department,
    Team,
}

impl OrgKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Company => "Company",
            Self::Site => "Site",
            Self::Department => "Department",
            Self::Team => "Team",
        }
    }

    pub const fn all() -> &'static [OrgKind] {
        &[Self::Company, Self::Site, Self::Department, Self::Team]
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.label().eq_ignore_ascii_case(value.trim()))
    }
}

impl std::fmt::Display for OrgKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
