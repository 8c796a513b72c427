use cmms_core::{catalog, Action, Column};
use cmms_model::{Entity, LabelEntry, Language, RecordKind};
use uuid::Uuid;

use super::{
    label_options, parse_choice, FormDraft, FormErrors, FormField, FormRefs, ManagedRecord,
};

impl ManagedRecord for LabelEntry {
    const KIND: RecordKind = RecordKind::Labels;

    fn columns() -> Vec<Column<Self>> {
        catalog::label_columns()
    }

    fn actions() -> Vec<Action<Self>> {
        catalog::label_actions()
    }

    fn form_fields() -> Vec<FormField> {
        vec![
            FormField::text("key", "Key").required(),
            FormField::select(
                "language",
                "Language",
                label_options(Language::all(), Language::label),
            )
            .required(),
            FormField::text("text", "Text").required(),
        ]
    }

    fn to_draft(&self) -> FormDraft {
        FormDraft::from_pairs(&[
            ("key", self.key.clone()),
            ("language", self.language.label().to_string()),
            ("text", self.text.clone()),
        ])
    }

    fn from_draft(
        draft: &FormDraft,
        existing: Option<&Self>,
        _refs: &FormRefs,
    ) -> Result<Self, FormErrors> {
        let mut errors = FormErrors::new();
        let key = draft.require("key", "Key", &mut errors);
        let text = draft.require("text", "Text", &mut errors);
        let language = parse_choice(draft, "language", "language", Language::parse, &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(LabelEntry {
            id: existing.map(Entity::id).unwrap_or_else(Uuid::new_v4),
            key,
            language: language.unwrap_or_default(),
            text,
        })
    }

    fn describe(&self) -> String {
        format!("{} [{}]", self.key, self.language.code())
    }
}
