use cmms_core::{catalog, Action, Column};
use cmms_model::{Entity, IntervalUnit, PmSchedule, RecordKind};
use uuid::Uuid;

use super::{
    date_string, label_options, parse_choice, parse_date_optional, parse_u32_required, FormDraft,
    FormErrors, FormField, FormRefs, ManagedRecord, RefSource,
};

impl ManagedRecord for PmSchedule {
    const KIND: RecordKind = RecordKind::PmSchedules;

    fn columns() -> Vec<Column<Self>> {
        catalog::pm_schedule_columns()
    }

    fn actions() -> Vec<Action<Self>> {
        catalog::pm_schedule_actions()
    }

    fn form_fields() -> Vec<FormField> {
        vec![
            FormField::select_ref("equipment", "Equipment", RefSource::EquipmentCodes).required(),
            FormField::text("task", "Task").required(),
            FormField::number("interval_count", "Every").required(),
            FormField::select(
                "interval_unit",
                "Unit",
                label_options(IntervalUnit::all(), IntervalUnit::label),
            )
            .required(),
            FormField::date("last_done", "Last Done"),
            FormField::flag("active", "Active"),
        ]
    }

    fn to_draft(&self) -> FormDraft {
        FormDraft::from_pairs(&[
            ("equipment", self.equipment_code.clone()),
            ("task", self.task.clone()),
            ("interval_count", self.interval_count.to_string()),
            ("interval_unit", self.interval_unit.label().to_string()),
            ("last_done", date_string(self.last_done)),
            ("active", self.active.to_string()),
        ])
    }

    fn from_draft(
        draft: &FormDraft,
        existing: Option<&Self>,
        refs: &FormRefs,
    ) -> Result<Self, FormErrors> {
        let mut errors = FormErrors::new();
        let task = draft.require("task", "Task", &mut errors);
        let equipment_code = draft.require("equipment", "Equipment", &mut errors);
        let interval_count = parse_u32_required(draft, "interval_count", "Interval", &mut errors);
        let interval_unit = parse_choice(
            draft,
            "interval_unit",
            "interval unit",
            IntervalUnit::parse,
            &mut errors,
        );
        let last_done = parse_date_optional(draft, "last_done", "Last Done", &mut errors);

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
        Ok(PmSchedule {
            id: existing.map(Entity::id).unwrap_or_else(Uuid::new_v4),
            equipment_id: equipment_id.unwrap_or_default(),
            equipment_code,
            task,
            interval_count,
            interval_unit: interval_unit.unwrap_or_default(),
            last_done,
            active: draft.get("active") == "true",
        })
    }

    fn describe(&self) -> String {
        format!("{} for {}", self.task, self.equipment_code)
    }
}
