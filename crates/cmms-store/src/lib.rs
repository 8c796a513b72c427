//! Data access for the console.
//!
//! Screens receive repositories by injection; nothing in here is global.
//! The in-memory repository seeded from [`fixtures`] is the default data
//! source, and a [`JsonStore`] persists a whole dataset between sessions.

pub mod csv_io;
pub mod dataset;
pub mod error;
pub mod fixtures;
pub mod repository;

pub use csv_io::{export_csv, import_equipment_csv, ImportIssue, ImportOutcome};
pub use dataset::{Dataset, JsonStore};
pub use error::{Result, StoreError};
pub use repository::{MemoryRepository, Repository};
