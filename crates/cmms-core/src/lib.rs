//! Shared console logic: the crud interaction state machine, the tabular
//! view contract and the permission checks.
//!
//! Everything in this crate is pure state manipulation. There is no I/O and
//! no UI toolkit dependency, so the desktop front end and the reporting CLI
//! drive the exact same semantics.

pub mod access;
pub mod catalog;
pub mod crud;
pub mod query;
pub mod table;

pub use access::AccessPolicy;
pub use crud::{CrudState, FormMode, OnClose};
pub use query::{Selection, Sort, SortDirection, TableQuery, TableView, apply};
pub use table::{
    Action, ActionIcon, ActionTone, BadgeTone, CellAlign, CellValue, Column, ColumnWidth,
    FilterOption,
};
