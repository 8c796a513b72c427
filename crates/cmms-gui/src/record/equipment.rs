use cmms_core::{catalog, Action, Column};
use cmms_model::{Entity, Equipment, EquipmentCategory, EquipmentStatus, RecordKind};
use uuid::Uuid;

use super::{
    date_string, label_options, parse_choice, parse_date_optional, FormDraft, FormErrors,
    FormField, FormRefs, ManagedRecord,
};

impl ManagedRecord for Equipment {
    const KIND: RecordKind = RecordKind::Equipment;
    const SUPPORTS_IMPORT: bool = true;

    fn columns() -> Vec<Column<Self>> {
        catalog::equipment_columns()
    }

    fn actions() -> Vec<Action<Self>> {
        catalog::equipment_actions()
    }

    fn form_fields() -> Vec<FormField> {
        vec![
            FormField::text("code", "Code").required(),
            FormField::text("name", "Name").required(),
            FormField::select(
                "category",
                "Category",
                label_options(EquipmentCategory::all(), EquipmentCategory::label),
            )
            .required(),
            FormField::text("location", "Location").required(),
            FormField::text("manufacturer", "Manufacturer"),
            FormField::text("model", "Model"),
            FormField::date("commissioned", "Commissioned"),
            FormField::select(
                "status",
                "Status",
                label_options(EquipmentStatus::all(), EquipmentStatus::label),
            )
            .required(),
        ]
    }

    fn to_draft(&self) -> FormDraft {
        FormDraft::from_pairs(&[
            ("code", self.code.clone()),
            ("name", self.name.clone()),
            ("category", self.category.label().to_string()),
            ("location", self.location.clone()),
            ("manufacturer", self.manufacturer.clone()),
            ("model", self.model.clone()),
            ("commissioned", date_string(self.commissioned)),
            ("status", self.status.label().to_string()),
        ])
    }

    fn from_draft(
        draft: &FormDraft,
        existing: Option<&Self>,
        _refs: &FormRefs,
    ) -> Result<Self, FormErrors> {
        let mut errors = FormErrors::new();
        let code = draft.require("code", "Code", &mut errors);
        let name = draft.require("name", "Name", &mut errors);
        let location = draft.require("location", "Location", &mut errors);
        let category = parse_choice(
            draft,
            "category",
            "category",
            EquipmentCategory::parse,
            &mut errors,
        );
        let status = parse_choice(draft, "status", "status", EquipmentStatus::parse, &mut errors);
        let commissioned = parse_date_optional(draft, "commissioned", "Commissioned", &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Equipment {
            id: existing.map(Entity::id).unwrap_or_else(Uuid::new_v4),
            code,
            name,
            category: category.unwrap_or_default(),
            location,
            manufacturer: draft.optional("manufacturer").unwrap_or_default(),
            model: draft.optional("model").unwrap_or_default(),
            commissioned,
            status: status.unwrap_or_default(),
        })
    }

    fn describe(&self) -> String {
        format!("{} ({})", self.code, self.name)
    }
}
