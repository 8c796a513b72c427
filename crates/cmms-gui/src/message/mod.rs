//! Message hierarchy for the Elm-style architecture.
//!
//! Every management screen speaks the same [`ScreenMessage`] vocabulary;
//! the root [`Message`] tags it with the record kind so the update loop can
//! route it to the right screen state and repository.

use std::path::PathBuf;

use cmms_model::{Language, RecordKind};
use uuid::Uuid;

use crate::state::View;
use crate::theme::ThemeMode;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    /// Navigate to a different view.
    Navigate(View),

    /// A management screen interaction, routed by record kind.
    Screen(RecordKind, ScreenMessage),

    /// Settings screen messages.
    Settings(SettingsMessage),

    /// Save-file dialog finished for a CSV export.
    ExportPathChosen(RecordKind, Option<PathBuf>),

    /// Open-file dialog finished for a CSV import.
    ImportPathChosen(RecordKind, Option<PathBuf>),

    /// No operation - used for placeholder actions.
    Noop,
}

/// Interactions shared by every management screen.
#[derive(Debug, Clone)]
pub enum ScreenMessage {
    // === Table query ===
    SearchChanged(String),
    /// Column key plus the selected option value; `None` clears the filter.
    FilterChanged(String, Option<String>),
    SortToggled(String),
    PageChanged(usize),
    PageSizeChanged(usize),

    // === Crud flow ===
    AddRequested,
    ViewRequested(Uuid),
    EditRequested(Uuid),
    /// Reopen the kept view-mode selection as an editor.
    SwitchToEdit,
    DeleteRequested(Uuid),
    DeleteConfirmed,
    DeleteCancelled,
    /// Lifecycle action ("start", "complete") on one row.
    ActionInvoked(String, Uuid),

    // === Form ===
    FieldChanged(String, String),
    FormSubmitted,
    FormCancelled,

    // === Selection ===
    SelectionToggled(Uuid),
    SelectAllToggled,

    // === Import/export ===
    ImportExportToggled,
    ExportCsvRequested,
    ImportCsvRequested,
}

/// Settings screen messages.
#[derive(Debug, Clone)]
pub enum SettingsMessage {
    ThemeModeChanged(ThemeMode),
    LanguageChanged(Language),
    PageSizeChanged(usize),
}
