use cmms_core::{catalog, Action, Column};
use cmms_model::{Calibration, CalibrationResult, Entity, RecordKind};
use uuid::Uuid;

use super::{
    date_string, label_options, parse_date_optional, parse_date_required, FormDraft, FormErrors,
    FormField, FormRefs, ManagedRecord,
};

impl ManagedRecord for Calibration {
    const KIND: RecordKind = RecordKind::Calibrations;

    fn columns() -> Vec<Column<Self>> {
        catalog::calibration_columns()
    }

    fn actions() -> Vec<Action<Self>> {
        catalog::calibration_actions()
    }

    fn form_fields() -> Vec<FormField> {
        vec![
            FormField::text("instrument_code", "Instrument Code").required(),
            FormField::text("instrument_name", "Instrument Name").required(),
            FormField::date("due", "Due").required(),
            FormField::date("performed", "Performed"),
            FormField::select(
                "result",
                "Result",
                label_options(CalibrationResult::all(), CalibrationResult::label),
            ),
            FormField::text("certificate", "Certificate"),
        ]
    }

    fn to_draft(&self) -> FormDraft {
        FormDraft::from_pairs(&[
            ("instrument_code", self.instrument_code.clone()),
            ("instrument_name", self.instrument_name.clone()),
            ("due", self.due.format("%Y-%m-%d").to_string()),
            ("performed", date_string(self.performed)),
            (
                "result",
                self.result.map(|r| r.label().to_string()).unwrap_or_default(),
            ),
            ("certificate", self.certificate.clone().unwrap_or_default()),
        ])
    }

    fn from_draft(
        draft: &FormDraft,
        existing: Option<&Self>,
        _refs: &FormRefs,
    ) -> Result<Self, FormErrors> {
        let mut errors = FormErrors::new();
        let instrument_code = draft.require("instrument_code", "Instrument Code", &mut errors);
        let instrument_name = draft.require("instrument_name", "Instrument Name", &mut errors);
        let due = parse_date_required(draft, "due", "Due", &mut errors);
        let performed = parse_date_optional(draft, "performed", "Performed", &mut errors);

        let result = match draft.optional("result") {
            Some(value) => {
                let parsed = CalibrationResult::parse(&value);
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

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Calibration {
            id: existing.map(Entity::id).unwrap_or_else(Uuid::new_v4),
            instrument_code,
            instrument_name,
            due,
            performed,
            result,
            certificate: draft.optional("certificate"),
        })
    }

    fn describe(&self) -> String {
        format!("{} ({})", self.instrument_code, self.instrument_name)
    }
}
