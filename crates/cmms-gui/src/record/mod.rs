//! Managed record descriptors.
//!
//! A management screen is entirely described by its record type's
//! [`ManagedRecord`] implementation: which columns the table shows, which
//! row actions exist, which fields the form renders and how a draft turns
//! back into a record. The screens themselves share one state type, one
//! handler and one view.

mod calibration;
mod equipment;
mod inspection;
mod label_entry;
mod meter_reading;
mod organization;
mod pm_schedule;
mod role;
mod work_order;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use cmms_core::{Action, Column};
use cmms_model::{Entity, RecordKind};
use cmms_store::Dataset;
use uuid::Uuid;

/// Validation failures keyed by field; the empty key carries form-level
/// messages.
pub type FormErrors = BTreeMap<String, String>;

pub trait ManagedRecord: Entity + Clone + 'static {
    const KIND: RecordKind;
    /// Whether the exchange panel offers CSV import for this kind.
    const SUPPORTS_IMPORT: bool = false;

    fn columns() -> Vec<Column<Self>>;
    fn actions() -> Vec<Action<Self>>;
    fn form_fields() -> Vec<FormField>;

    /// Field values for an existing record, keyed like `form_fields`.
    fn to_draft(&self) -> FormDraft;

    /// Validate a draft into a record. `existing` carries the identity and
    /// any state the form does not edit (e.g. a work order's status).
    fn from_draft(
        draft: &FormDraft,
        existing: Option<&Self>,
        refs: &FormRefs,
    ) -> Result<Self, FormErrors>;

    /// Short description used in the delete confirmation.
    fn describe(&self) -> String;

    /// Lifecycle action beyond view/edit/delete ("start", "complete").
    /// Returns true when the record changed and must be written back.
    fn run_action(_key: &str, _record: &mut Self, _today: NaiveDate) -> cmms_model::Result<bool> {
        Ok(false)
    }
}

// =============================================================================
// FORM DRAFT
// =============================================================================

/// Working copy of the form's field values, all kept as strings until
/// submit-time validation.
#[derive(Debug, Clone, Default)]
pub struct FormDraft {
    values: BTreeMap<String, String>,
}

impl FormDraft {
    pub fn from_pairs(pairs: &[(&str, String)]) -> Self {
        Self {
            values: pairs
                .iter()
                .map(|(key, value)| ((*key).to_string(), value.clone()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map_or("", String::as_str)
    }

    pub fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    /// Trimmed value of a mandatory field, recording an error when empty.
    pub fn require(&self, key: &str, label: &str, errors: &mut FormErrors) -> String {
        let value = self.get(key).trim().to_string();
        if value.is_empty() {
            errors.insert(key.to_string(), format!("{label} is required"));
        }
        value
    }

    /// Trimmed value of an optional field, `None` when empty.
    pub fn optional(&self, key: &str) -> Option<String> {
        let value = self.get(key).trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}

// =============================================================================
// FIELD DESCRIPTORS
// =============================================================================

#[derive(Debug, Clone)]
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub control: FieldControl,
    pub required: bool,
}

impl FormField {
    pub fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            control: FieldControl::Text,
            required: false,
        }
    }

    pub fn number(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            control: FieldControl::Number,
            required: false,
        }
    }

    pub fn date(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            control: FieldControl::Date,
            required: false,
        }
    }

    pub fn flag(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            control: FieldControl::Flag,
            required: false,
        }
    }

    pub fn select(key: &'static str, label: &'static str, options: Vec<String>) -> Self {
        Self {
            key,
            label,
            control: FieldControl::Select(options),
            required: false,
        }
    }

    pub fn select_ref(key: &'static str, label: &'static str, source: RefSource) -> Self {
        Self {
            key,
            label,
            control: FieldControl::SelectRef(source),
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

#[derive(Debug, Clone)]
pub enum FieldControl {
    Text,
    Number,
    /// ISO date input (YYYY-MM-DD).
    Date,
    Flag,
    Select(Vec<String>),
    /// Choice list fed from another collection at render time.
    SelectRef(RefSource),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefSource {
    EquipmentCodes,
    OrganizationCodes,
}

/// Cross-collection lookups for select fields and draft resolution,
/// snapshotted from the dataset before a screen handler runs.
#[derive(Debug, Clone, Default)]
pub struct FormRefs {
    equipment: Vec<(String, Uuid)>,
    organizations: Vec<(String, Uuid)>,
}

impl FormRefs {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            equipment: dataset
                .equipment
                .records()
                .iter()
                .map(|e| (e.code.clone(), e.id))
                .collect(),
            organizations: dataset
                .organizations
                .records()
                .iter()
                .map(|o| (o.code.clone(), o.id))
                .collect(),
        }
    }

    pub fn codes(&self, source: RefSource) -> Vec<String> {
        match source {
            RefSource::EquipmentCodes => {
                self.equipment.iter().map(|(code, _)| code.clone()).collect()
            }
            RefSource::OrganizationCodes => self
                .organizations
                .iter()
                .map(|(code, _)| code.clone())
                .collect(),
        }
    }

    pub fn equipment_id(&self, code: &str) -> Option<Uuid> {
        self.equipment
            .iter()
            .find(|(candidate, _)| candidate == code)
            .map(|(_, id)| *id)
    }

    pub fn organization_id(&self, code: &str) -> Option<Uuid> {
        self.organizations
            .iter()
            .find(|(candidate, _)| candidate == code)
            .map(|(_, id)| *id)
    }
}

// =============================================================================
// PARSE HELPERS
// =============================================================================

pub(crate) fn parse_date_required(
    draft: &FormDraft,
    key: &str,
    label: &str,
    errors: &mut FormErrors,
) -> NaiveDate {
    let value = draft.require(key, label, errors);
    if value.is_empty() {
        return NaiveDate::default();
    }
    match NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => {
            errors.insert(key.to_string(), format!("{label} must be YYYY-MM-DD"));
            NaiveDate::default()
        }
    }
}

pub(crate) fn parse_date_optional(
    draft: &FormDraft,
    key: &str,
    label: &str,
    errors: &mut FormErrors,
) -> Option<NaiveDate> {
    let value = draft.optional(key)?;
    match NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.insert(key.to_string(), format!("{label} must be YYYY-MM-DD"));
            None
        }
    }
}

pub(crate) fn parse_f64_required(
    draft: &FormDraft,
    key: &str,
    label: &str,
    errors: &mut FormErrors,
) -> f64 {
    let value = draft.require(key, label, errors);
    if value.is_empty() {
        return 0.0;
    }
    match value.parse::<f64>() {
        Ok(number) => number,
        Err(_) => {
            errors.insert(key.to_string(), format!("{label} must be a number"));
            0.0
        }
    }
}

pub(crate) fn parse_u32_required(
    draft: &FormDraft,
    key: &str,
    label: &str,
    errors: &mut FormErrors,
) -> u32 {
    let value = draft.require(key, label, errors);
    if value.is_empty() {
        return 0;
    }
    match value.parse::<u32>() {
        Ok(number) if number > 0 => number,
        _ => {
            errors.insert(
                key.to_string(),
                format!("{label} must be a positive whole number"),
            );
            0
        }
    }
}

pub(crate) fn parse_choice<T>(
    draft: &FormDraft,
    key: &str,
    label: &str,
    parse: fn(&str) -> Option<T>,
    errors: &mut FormErrors,
) -> Option<T> {
    let value = draft.require(key, label, errors);
    if value.is_empty() {
        return None;
    }
    match parse(&value) {
        Some(parsed) => Some(parsed),
        None => {
            errors.insert(key.to_string(), format!("unknown {label} '{value}'"));
            None
        }
    }
}

pub(crate) fn date_string(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Owned label list for a static enum choice field.
pub(crate) fn label_options<T>(items: &'static [T], label: fn(&T) -> &'static str) -> Vec<String> {
    items.iter().map(|item| label(item).to_string()).collect()
}
