use chrono::NaiveDate;
use cmms_core::{catalog, Action, Column};
use cmms_model::{Entity, Priority, RecordKind, WorkOrder, WorkOrderKind, WorkOrderStatus};
use uuid::Uuid;

use super::{
    date_string, label_options, parse_choice, parse_date_optional, FormDraft, FormErrors,
    FormField, FormRefs, ManagedRecord, RefSource,
};

impl ManagedRecord for WorkOrder {
    const KIND: RecordKind = RecordKind::WorkOrders;

    fn columns() -> Vec<Column<Self>> {
        catalog::work_order_columns()
    }

    fn actions() -> Vec<Action<Self>> {
        catalog::work_order_actions()
    }

    // Status is not a form field: it only moves through the start/complete
    // row actions so the lifecycle stays valid.
    fn form_fields() -> Vec<FormField> {
        vec![
            FormField::text("number", "Number").required(),
            FormField::text("title", "Title").required(),
            FormField::select_ref("equipment", "Equipment", RefSource::EquipmentCodes).required(),
            FormField::select(
                "kind",
                "Type",
                label_options(WorkOrderKind::all(), WorkOrderKind::label),
            )
            .required(),
            FormField::select(
                "priority",
                "Priority",
                label_options(Priority::all(), Priority::label),
            )
            .required(),
            FormField::text("assignee", "Assignee").required(),
            FormField::date("due", "Due"),
        ]
    }

    fn to_draft(&self) -> FormDraft {
        FormDraft::from_pairs(&[
            ("number", self.number.clone()),
            ("title", self.title.clone()),
            ("equipment", self.equipment_code.clone()),
            ("kind", self.kind.label().to_string()),
            ("priority", self.priority.label().to_string()),
            ("assignee", self.assignee.clone()),
            ("due", date_string(self.due)),
        ])
    }

    fn from_draft(
        draft: &FormDraft,
        existing: Option<&Self>,
        refs: &FormRefs,
    ) -> Result<Self, FormErrors> {
        let mut errors = FormErrors::new();
        let number = draft.require("number", "Number", &mut errors);
        let title = draft.require("title", "Title", &mut errors);
        let assignee = draft.require("assignee", "Assignee", &mut errors);
        let equipment_code = draft.require("equipment", "Equipment", &mut errors);
        let kind = parse_choice(draft, "kind", "type", WorkOrderKind::parse, &mut errors);
        let priority = parse_choice(draft, "priority", "priority", Priority::parse, &mut errors);
        let due = parse_date_optional(draft, "due", "Due", &mut errors);

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
        Ok(WorkOrder {
            id: existing.map(Entity::id).unwrap_or_else(Uuid::new_v4),
            number,
            title,
            equipment_id: equipment_id.unwrap_or_default(),
            equipment_code,
            kind: kind.unwrap_or_default(),
            priority: priority.unwrap_or_default(),
            status: existing.map_or(WorkOrderStatus::Pending, |order| order.status),
            assignee,
            due,
            completed: existing.and_then(|order| order.completed),
        })
    }

    fn describe(&self) -> String {
        format!("{} ({})", self.number, self.title)
    }

    fn run_action(key: &str, record: &mut Self, today: NaiveDate) -> cmms_model::Result<bool> {
        match key {
            "start" => record.start().map(|()| true),
            "complete" => record.complete(today).map(|()| true),
            _ => Ok(false),
        }
    }
}
