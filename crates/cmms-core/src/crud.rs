//! Crud interaction state.
//!
//! One `CrudState` per management screen tracks which record a form or a
//! delete confirmation is aimed at. The record targeted for deletion is held
//! separately from the form selection so a delete request never disturbs an
//! open editor.

/// What an open form is doing with its record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    /// Blank form producing a new record.
    #[default]
    Create,
    /// Editable form bound to an existing record.
    Edit,
    /// Read-only form; consuming views must disable every field.
    View,
}

/// Selection handling when a form closes.
///
/// Closing used to silently keep the selection, which let stale records leak
/// into a later create flow. Call sites now name the behavior they want.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnClose {
    /// Keep `selected`/`form_mode` for a reopen of the same record.
    KeepSelection,
    /// Drop the selection; equivalent to `reset_form`.
    ClearSelection,
}

#[derive(Debug, Clone)]
pub struct CrudState<T> {
    /// Record the form is bound to; `None` while creating.
    pub selected: Option<T>,
    pub form_mode: FormMode,
    pub form_open: bool,
    pub delete_dialog_open: bool,
    pub import_export_open: bool,
    /// Record awaiting delete confirmation, independent of `selected`.
    pub pending_delete: Option<T>,
}

impl<T> Default for CrudState<T> {
    fn default() -> Self {
        Self {
            selected: None,
            form_mode: FormMode::default(),
            form_open: false,
            delete_dialog_open: false,
            import_export_open: false,
            pending_delete: None,
        }
    }
}

impl<T> CrudState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a blank create form. Always lands in the same state no matter
    /// what was in flight before.
    pub fn open_create(&mut self) {
        self.selected = None;
        self.form_mode = FormMode::Create;
        self.form_open = true;
    }

    pub fn open_edit(&mut self, record: T) {
        self.selected = Some(record);
        self.form_mode = FormMode::Edit;
        self.form_open = true;
    }

    pub fn open_view(&mut self, record: T) {
        self.selected = Some(record);
        self.form_mode = FormMode::View;
        self.form_open = true;
    }

    /// Ask for a delete confirmation. Leaves `selected` untouched so an
    /// open editor survives the request.
    pub fn request_delete(&mut self, record: T) {
        self.pending_delete = Some(record);
        self.delete_dialog_open = true;
    }

    pub fn close_delete_dialog(&mut self) {
        self.delete_dialog_open = false;
        self.pending_delete = None;
    }

    pub fn close_form(&mut self, on_close: OnClose) {
        self.form_open = false;
        if on_close == OnClose::ClearSelection {
            self.selected = None;
            self.form_mode = FormMode::default();
        }
    }

    /// Clear the form completely: no selection, neutral mode, closed.
    pub fn reset_form(&mut self) {
        self.selected = None;
        self.form_mode = FormMode::default();
        self.form_open = false;
    }

    pub fn toggle_import_export(&mut self) {
        self.import_export_open = !self.import_export_open;
    }

    pub fn is_viewing(&self) -> bool {
        self.form_open && self.form_mode == FormMode::View
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_create_resets_selection() {
        let mut state: CrudState<u32> = CrudState::new();
        state.open_edit(7);
        state.open_create();
        assert_eq!(state.selected, None);
        assert_eq!(state.form_mode, FormMode::Create);
        assert!(state.form_open);
    }

    #[test]
    fn delete_request_keeps_editor_intact() {
        let mut state: CrudState<u32> = CrudState::new();
        state.open_edit(7);
        state.request_delete(9);
        assert_eq!(state.selected, Some(7));
        assert!(state.form_open);
        assert_eq!(state.pending_delete, Some(9));
        assert!(state.delete_dialog_open);

        state.close_delete_dialog();
        assert_eq!(state.selected, Some(7));
        assert_eq!(state.pending_delete, None);
    }

    #[test]
    fn close_form_honors_requested_behavior() {
        let mut state: CrudState<u32> = CrudState::new();
        state.open_view(3);
        state.close_form(OnClose::KeepSelection);
        assert!(!state.form_open);
        assert_eq!(state.selected, Some(3));
        assert_eq!(state.form_mode, FormMode::View);

        state.open_view(3);
        state.close_form(OnClose::ClearSelection);
        assert_eq!(state.selected, None);
        assert_eq!(state.form_mode, FormMode::Create);
    }
}
