//! Per-screen UI state.
//!
//! Each management screen owns exactly one of these: the crud interaction
//! state, the table query, the row selection and the form draft. Nothing in
//! here is shared between screens.

use std::collections::BTreeMap;

use cmms_core::{CrudState, Selection, TableQuery};

use crate::record::FormDraft;

pub struct ScreenState<T> {
    pub crud: CrudState<T>,
    pub query: TableQuery,
    pub selection: Selection,
    /// Working copy of the open form's field values.
    pub draft: FormDraft,
    /// Field key -> validation message from the last submit attempt.
    pub errors: BTreeMap<String, String>,
    /// Outcome line of the last import/export, shown in the exchange panel.
    pub notice: Option<String>,
}

impl<T> ScreenState<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            crud: CrudState::new(),
            query: TableQuery::new(page_size),
            selection: Selection::new(),
            draft: FormDraft::default(),
            errors: BTreeMap::new(),
            notice: None,
        }
    }
}
