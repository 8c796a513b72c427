//! Roles, permissions and user accounts.
//!
//! A permission is a (record kind, crud action) pair; roles bundle
//! permissions; accounts reference roles by code. The actual membership
//! checks live in cmms-core so both front ends share them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::kind::RecordKind;
use crate::Entity;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum CrudAction {
    View,
    Create,
    Edit,
    Delete,
    Export,
}

impl CrudAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::View => "View",
            Self::Create => "Create",
            Self::Edit => "Edit",
            Self::Delete => "Delete",
            Self::Export => "Export",
        }
    }

    pub const fn all() -> &'static [CrudAction] {
        &[
            Self::View,
            Self::Create,
            Self::Edit,
            Self::Delete,
            Self::Export,
        ]
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Permission {
    pub kind: RecordKind,
    pub action: CrudAction,
}

impl Permission {
    pub fn new(kind: RecordKind, action: CrudAction) -> Self {
        Self { kind, action }
    }

    /// Every permission for one record kind.
    pub fn full(kind: RecordKind) -> impl Iterator<Item = Permission> {
        CrudAction::all()
            .iter()
            .map(move |action| Permission::new(kind, *action))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: Uuid,
    /// Stable role code referenced by user accounts (e.g. "maintainer").
    pub code: String,
    pub name: String,
    pub description: String,
    pub permissions: BTreeSet<Permission>,
}

impl Entity for Role {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: Uuid,
    pub username: String,
    pub display_name: String,
    pub org_id: Option<Uuid>,
    pub roles: Vec<String>,
    pub active: bool,
}

impl Entity for UserAccount {
    fn id(&self) -> Uuid {
        self.id
    }
}
