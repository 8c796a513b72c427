use cmms_core::{catalog, Action, Column};
use cmms_model::{Entity, Organization, OrgKind, RecordKind};
use uuid::Uuid;

use super::{
    label_options, parse_choice, FormDraft, FormErrors, FormField, FormRefs, ManagedRecord,
    RefSource,
};

impl ManagedRecord for Organization {
    const KIND: RecordKind = RecordKind::Organizations;

    fn columns() -> Vec<Column<Self>> {
        catalog::organization_columns()
    }

    fn actions() -> Vec<Action<Self>> {
        catalog::organization_actions()
    }

    fn form_fields() -> Vec<FormField> {
        vec![
            FormField::text("code", "Code").required(),
            FormField::text("name", "Name").required(),
            FormField::select(
                "kind",
                "Kind",
                label_options(OrgKind::all(), OrgKind::label),
            )
            .required(),
            FormField::select_ref("parent", "Parent", RefSource::OrganizationCodes),
        ]
    }

    fn to_draft(&self) -> FormDraft {
        FormDraft::from_pairs(&[
            ("code", self.code.clone()),
            ("name", self.name.clone()),
            ("kind", self.kind.label().to_string()),
            ("parent", self.parent_code.clone().unwrap_or_default()),
        ])
    }

    fn from_draft(
        draft: &FormDraft,
        existing: Option<&Self>,
        refs: &FormRefs,
    ) -> Result<Self, FormErrors> {
        let mut errors = FormErrors::new();
        let code = draft.require("code", "Code", &mut errors);
        let name = draft.require("name", "Name", &mut errors);
        let kind = parse_choice(draft, "kind", "kind", OrgKind::parse, &mut errors);

        let parent_code = draft.optional("parent");
        let parent_id = match &parent_code {
            Some(parent) => {
                if existing.is_some_and(|org| &org.code == parent) || *parent == code {
                    errors.insert(
                        "parent".to_string(),
                        "an organization cannot be its own parent".to_string(),
                    );
                    None
                } else {
                    let id = refs.organization_id(parent);
                    if id.is_none() {
                        errors.insert(
                            "parent".to_string(),
                            format!("unknown organization '{parent}'"),
                        );
                    }
                    id
                }
            }
            None => None,
        };

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Organization {
            id: existing.map(Entity::id).unwrap_or_else(Uuid::new_v4),
            code,
            name,
            kind: kind.unwrap_or_default(),
            parent_id,
            parent_code,
        })
    }

    fn describe(&self) -> String {
        format!("{} ({})", self.code, self.name)
    }
}
