use cmms_core::{catalog, Action, Column};
use cmms_model::{Entity, Inspection, InspectionResult, RecordKind};
use uuid::Uuid;

use super::{
    date_string, label_options, parse_date_optional, parse_date_required, FormDraft, FormErrors,
    FormField, FormRefs, ManagedRecord, RefSource,
};

impl ManagedRecord for Inspection {
    const KIND: RecordKind = RecordKind::Inspections;

    fn columns() -> Vec<Column<Self>> {
        catalog::inspection_columns()
    }

    fn actions() -> Vec<Action<Self>> {
        catalog::inspection_actions()
    }

    fn form_fields() -> Vec<FormField> {
        vec![
            FormField::select_ref("equipment", "Equipment", RefSource::EquipmentCodes).required(),
            FormField::text("inspector", "Inspector").required(),
            FormField::date("scheduled", "Scheduled").required(),
            FormField::date("performed", "Performed"),
            FormField::select(
                "result",
                "Result",
                label_options(InspectionResult::all(), InspectionResult::label),
            ),
            FormField::text("findings", "Findings"),
        ]
    }

    fn to_draft(&self) -> FormDraft {
        FormDraft::from_pairs(&[
            ("equipment", self.equipment_code.clone()),
            ("inspector", self.inspector.clone()),
            ("scheduled", self.scheduled.format("%Y-%m-%d").to_string()),
            ("performed", date_string(self.performed)),
            (
                "result",
                self.result.map(|r| r.label().to_string()).unwrap_or_default(),
            ),
            ("findings", self.findings.clone()),
        ])
    }

    fn from_draft(
        draft: &FormDraft,
        existing: Option<&Self>,
        refs: &FormRefs,
    ) -> Result<Self, FormErrors> {
        let mut errors = FormErrors::new();
        let inspector = draft.require("inspector", "Inspector", &mut errors);
        let equipment_code = draft.require("equipment", "Equipment", &mut errors);
        let scheduled = parse_date_required(draft, "scheduled", "Scheduled", &mut errors);
        let performed = parse_date_optional(draft, "performed", "Performed", &mut errors);

        let result = match draft.optional("result") {
            Some(value) => {
                let parsed = InspectionResult::parse(&value);
                if parsed.is_none() {
                    errors.insert("result".to_string(), format!("unknown result '{value}'"));
                }
                parsed
            }
            None => None,
        };
        if result.is_some() && performed.is_none() && !errors.contains_key("performed") {
            errors.insert(
                "performed".to_string(),
                "a result needs a performed date".to_string(),
            );
        }

        let equipment_id = if equipment_code.is_empty() {
            None
        } else {
            let id = refs.equipment_id(&equipment_code);
            if id.is_none() {
                errors.insert(
                    "equipment".to_string(),
                    format!("unknown equipment '{equipment_code}'"),
                );
            }
            id
        };

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Inspection {
            id: existing.map(Entity::id).unwrap_or_else(Uuid::new_v4),
            equipment_id: equipment_id.unwrap_or_default(),
            equipment_code,
            inspector,
            scheduled,
            performed,
            result,
            findings: draft.optional("findings").unwrap_or_default(),
        })
    }

    fn describe(&self) -> String {
        format!("inspection of {} on {}", self.equipment_code, self.scheduled)
    }
}
