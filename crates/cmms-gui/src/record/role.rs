//! Role records in the generic form.
//!
//! Permission grants are edited as one access level per record kind
//! (None / View / Full), which keeps the permission matrix inside the
//! shared field vocabulary.

use std::collections::BTreeSet;

use cmms_core::{catalog, Action, Column};
use cmms_model::{CrudAction, Entity, Permission, RecordKind, Role};
use uuid::Uuid;

use super::{FormDraft, FormErrors, FormField, FormRefs, ManagedRecord};

const ACCESS_LEVELS: [&str; 3] = ["None", "View", "Full"];

fn access_key(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Equipment => "access.equipment",
        RecordKind::WorkOrders => "access.work_orders",
        RecordKind::Inspections => "access.inspections",
        RecordKind::PmSchedules => "access.pm_schedules",
        RecordKind::Meters => "access.meters",
        RecordKind::Calibrations => "access.calibrations",
        RecordKind::Organizations => "access.organizations",
        RecordKind::Roles => "access.roles",
        RecordKind::Labels => "access.labels",
    }
}

fn access_level(role: &Role, kind: RecordKind) -> &'static str {
    let full = CrudAction::all()
        .iter()
        .all(|action| role.permissions.contains(&Permission::new(kind, *action)));
    if full {
        "Full"
    } else if role
        .permissions
        .contains(&Permission::new(kind, CrudAction::View))
    {
        "View"
    } else {
        "None"
    }
}

impl ManagedRecord for Role {
    const KIND: RecordKind = RecordKind::Roles;

    fn columns() -> Vec<Column<Self>> {
        catalog::role_columns()
    }

    fn actions() -> Vec<Action<Self>> {
        catalog::role_actions()
    }

    fn form_fields() -> Vec<FormField> {
        let mut fields = vec![
            FormField::text("code", "Code").required(),
            FormField::text("name", "Name").required(),
            FormField::text("description", "Description"),
        ];
        for kind in RecordKind::all() {
            fields.push(
                FormField::select(
                    access_key(*kind),
                    kind.label(),
                    ACCESS_LEVELS.iter().map(|level| (*level).to_string()).collect(),
                )
                .required(),
            );
        }
        fields
    }

    fn to_draft(&self) -> FormDraft {
        let mut draft = FormDraft::from_pairs(&[
            ("code", self.code.clone()),
            ("name", self.name.clone()),
            ("description", self.description.clone()),
        ]);
        for kind in RecordKind::all() {
            draft.set(access_key(*kind), access_level(self, *kind).to_string());
        }
        draft
    }

    fn from_draft(
        draft: &FormDraft,
        existing: Option<&Self>,
        _refs: &FormRefs,
    ) -> Result<Self, FormErrors> {
        let mut errors = FormErrors::new();
        let code = draft.require("code", "Code", &mut errors);
        let name = draft.require("name", "Name", &mut errors);

        let mut permissions: BTreeSet<Permission> = BTreeSet::new();
        for kind in RecordKind::all() {
            match draft.get(access_key(*kind)) {
                "Full" => permissions.extend(Permission::full(*kind)),
                "View" => {
                    permissions.insert(Permission::new(*kind, CrudAction::View));
                }
                _ => {}
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Role {
            id: existing.map(Entity::id).unwrap_or_else(Uuid::new_v4),
            code,
            name,
            description: draft.optional("description").unwrap_or_default(),
            permissions,
        })
    }

    fn describe(&self) -> String {
        format!("{} ({})", self.code, self.name)
    }
}
