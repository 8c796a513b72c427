use cmms_core::{catalog, Action, Column};
use cmms_model::{Entity, MeterReading, RecordKind};
use uuid::Uuid;

use super::{
    parse_date_required, parse_f64_required, FormDraft, FormErrors, FormField, FormRefs,
    ManagedRecord, RefSource,
};

impl ManagedRecord for MeterReading {
    const KIND: RecordKind = RecordKind::Meters;

    fn columns() -> Vec<Column<Self>> {
        catalog::meter_reading_columns()
    }

    fn actions() -> Vec<Action<Self>> {
        catalog::meter_reading_actions()
    }

    fn form_fields() -> Vec<FormField> {
        vec![
            FormField::select_ref("equipment", "Equipment", RefSource::EquipmentCodes).required(),
            FormField::text("meter", "Meter").required(),
            FormField::number("value", "Value").required(),
            FormField::text("unit", "Unit").required(),
            FormField::date("read_on", "Read On").required(),
            FormField::text("reader", "Reader").required(),
        ]
    }

    fn to_draft(&self) -> FormDraft {
        FormDraft::from_pairs(&[
            ("equipment", self.equipment_code.clone()),
            ("meter", self.meter.clone()),
            ("value", format!("{}", self.value)),
            ("unit", self.unit.clone()),
            ("read_on", self.read_on.format("%Y-%m-%d").to_string()),
            ("reader", self.reader.clone()),
        ])
    }

    fn from_draft(
        draft: &FormDraft,
        existing: Option<&Self>,
        refs: &FormRefs,
    ) -> Result<Self, FormErrors> {
        let mut errors = FormErrors::new();
        let meter = draft.require("meter", "Meter", &mut errors);
        let unit = draft.require("unit", "Unit", &mut errors);
        let reader = draft.require("reader", "Reader", &mut errors);
        let equipment_code = draft.require("equipment", "Equipment", &mut errors);
        let value = parse_f64_required(draft, "value", "Value", &mut errors);
        let read_on = parse_date_required(draft, "read_on", "Read On", &mut errors);

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
        Ok(MeterReading {
            id: existing.map(Entity::id).unwrap_or_else(Uuid::new_v4),
            equipment_id: equipment_id.unwrap_or_default(),
            equipment_code,
            meter,
            unit,
            value,
            read_on,
            reader,
        })
    }

    fn describe(&self) -> String {
        format!("{} reading for {}", self.meter, self.equipment_code)
    }
}
