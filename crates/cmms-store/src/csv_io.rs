//! CSV exchange.
//!
//! Export writes exactly what a table shows: the caller passes the column
//! set and the already filtered rows. Import parses equipment rows one by
//! one and collects per-line issues instead of aborting the whole file.

use std::io::{Read, Write};

use chrono::NaiveDate;
use cmms_core::Column;
use cmms_model::{Equipment, EquipmentCategory, EquipmentStatus};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::error::Result;

/// Write the visible rows of a table as CSV.
///
/// Missing cells become empty fields; everything else uses the cell's
/// display string, so the file matches what was on screen.
pub fn export_csv<T, W: Write>(writer: W, columns: &[Column<T>], rows: &[&T]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(columns.iter().map(|column| column.title.as_str()))?;
    for row in rows {
        csv_writer.write_record(
            columns
                .iter()
                .map(|column| column.value(row).display()),
        )?;
    }
    csv_writer.flush()?;
    debug!(rows = rows.len(), columns = columns.len(), "exported csv");
    Ok(())
}

/// One rejected input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportIssue {
    /// 1-based line in the file, counting the header.
    pub line: usize,
    pub message: String,
}

/// Result of an equipment import: accepted records plus rejected lines.
#[derive(Debug, Default)]
pub struct ImportOutcome {
    pub records: Vec<Equipment>,
    pub issues: Vec<ImportIssue>,
}

impl ImportOutcome {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct RawEquipmentRow {
    code: String,
    name: String,
    category: String,
    location: String,
    #[serde(default)]
    manufacturer: String,
    #[serde(default)]
    model: String,
    #[serde(default)]
    commissioned: String,
    status: String,
}

/// Parse an equipment CSV with the header
/// `code,name,category,location,manufacturer,model,commissioned,status`.
///
/// Every line is validated independently; a bad category on line 7 does not
/// stop line 8 from importing.
pub fn import_equipment_csv<R: Read>(reader: R) -> Result<ImportOutcome> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut outcome = ImportOutcome::default();
    for (index, row) in csv_reader.deserialize::<RawEquipmentRow>().enumerate() {
        let line = index + 2;
        match row {
            Ok(raw) => match validate_row(raw) {
                Ok(equipment) => outcome.records.push(equipment),
                Err(message) => outcome.issues.push(ImportIssue { line, message }),
            },
            Err(error) => outcome.issues.push(ImportIssue {
                line,
                message: error.to_string(),
            }),
        }
    }
    debug!(
        accepted = outcome.records.len(),
        rejected = outcome.issues.len(),
        "imported equipment csv"
    );
    Ok(outcome)
}

fn validate_row(raw: RawEquipmentRow) -> std::result::Result<Equipment, String> {
    if raw.code.is_empty() {
        return Err("code must not be empty".to_string());
    }
    if raw.name.is_empty() {
        return Err("name must not be empty".to_string());
    }
    let category = EquipmentCategory::parse(&raw.category)
        .ok_or_else(|| format!("unknown category '{}'", raw.category))?;
    let status = EquipmentStatus::parse(&raw.status)
        .ok_or_else(|| format!("unknown status '{}'", raw.status))?;
    let commissioned = if raw.commissioned.is_empty() {
        None
    } else {
        Some(
            NaiveDate::parse_from_str(&raw.commissioned, "%Y-%m-%d")
                .map_err(|_| format!("invalid commissioned date '{}'", raw.commissioned))?,
        )
    };

    Ok(Equipment {
        id: Uuid::new_v4(),
        code: raw.code,
        name: raw.name,
        category,
        location: raw.location,
        manufacturer: raw.manufacturer,
        model: raw.model,
        commissioned,
        status,
    })
}
