//! Main application module.
//!
//! Implements the Iced application using the builder pattern. The
//! architecture follows the Elm pattern: State -> Message -> Update -> View.
//! All state changes happen in `update()`; views are pure functions.

pub mod handler;

use std::fs::File;
use std::path::Path;

use iced::{Element, Task, Theme};
use tracing::warn;

use cmms_core::apply;
use cmms_model::{Entity, RecordKind};
use cmms_store::{export_csv, import_equipment_csv, JsonStore, MemoryRepository, Repository};

use crate::message::{Message, ScreenMessage};
use crate::record::{FormRefs, ManagedRecord};
use crate::settings::Settings;
use crate::state::{AppState, ScreenState};
use crate::theme::console_theme;
use crate::view::view_root;

/// Main application struct: the root of the Iced application.
pub struct App {
    pub state: AppState,
}

impl App {
    /// Called once at startup; loads settings and the configured dataset.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let app = Self {
            state: AppState::with_settings(settings),
        };
        (app, Task::none())
    }

    pub fn title(&self) -> String {
        "CMMS Console".to_string()
    }

    pub fn theme(&self) -> Theme {
        console_theme(self.state.settings.theme_mode)
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(view) => {
                self.state.view = view;
                Task::none()
            }

            Message::Screen(kind, screen_message) => self.dispatch_screen(kind, screen_message),

            Message::Settings(settings_message) => {
                handler::settings::handle_settings(&mut self.state, settings_message)
            }

            Message::ExportPathChosen(kind, Some(path)) => {
                self.export_to(kind, &path);
                Task::none()
            }
            Message::ExportPathChosen(_, None) => Task::none(),

            Message::ImportPathChosen(kind, Some(path)) => {
                self.import_from(kind, &path);
                Task::none()
            }
            Message::ImportPathChosen(_, None) => Task::none(),

            Message::Noop => Task::none(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view_root(&self.state)
    }

    /// Route a screen message to the matching state/repository pair.
    fn dispatch_screen(&mut self, kind: RecordKind, message: ScreenMessage) -> Task<Message> {
        let mutating = matches!(
            message,
            ScreenMessage::DeleteConfirmed
                | ScreenMessage::FormSubmitted
                | ScreenMessage::ActionInvoked(..)
        );
        let refs = FormRefs::from_dataset(&self.state.data);

        let state = &mut self.state;
        let task = match kind {
            RecordKind::Equipment => handler::screen::handle_screen(
                &mut state.screens.equipment,
                &mut state.data.equipment,
                &refs,
                message,
            ),
            RecordKind::WorkOrders => handler::screen::handle_screen(
                &mut state.screens.work_orders,
                &mut state.data.work_orders,
                &refs,
                message,
            ),
            RecordKind::Inspections => handler::screen::handle_screen(
                &mut state.screens.inspections,
                &mut state.data.inspections,
                &refs,
                message,
            ),
            RecordKind::PmSchedules => handler::screen::handle_screen(
                &mut state.screens.pm_schedules,
                &mut state.data.pm_schedules,
                &refs,
                message,
            ),
            RecordKind::Meters => handler::screen::handle_screen(
                &mut state.screens.meter_readings,
                &mut state.data.meter_readings,
                &refs,
                message,
            ),
            RecordKind::Calibrations => handler::screen::handle_screen(
                &mut state.screens.calibrations,
                &mut state.data.calibrations,
                &refs,
                message,
            ),
            RecordKind::Organizations => handler::screen::handle_screen(
                &mut state.screens.organizations,
                &mut state.data.organizations,
                &refs,
                message,
            ),
            RecordKind::Roles => handler::screen::handle_screen(
                &mut state.screens.roles,
                &mut state.data.roles,
                &refs,
                message,
            ),
            RecordKind::Labels => handler::screen::handle_screen(
                &mut state.screens.labels,
                &mut state.data.labels,
                &refs,
                message,
            ),
        };

        if mutating {
            // Label edits feed the navigation captions directly.
            if kind == RecordKind::Labels {
                self.state.refresh_labels();
            }
            self.persist();
        }
        task
    }

    /// Write the dataset back to the configured store, if any.
    fn persist(&self) {
        let Some(path) = &self.state.settings.data_path else {
            return;
        };
        if let Err(error) = JsonStore::new(path).save(&self.state.data) {
            warn!(path = %path.display(), %error, "could not persist dataset");
        }
    }

    fn export_to(&mut self, kind: RecordKind, path: &Path) {
        let state = &mut self.state;
        match kind {
            RecordKind::Equipment => {
                export_screen(&mut state.screens.equipment, &state.data.equipment, path);
            }
            RecordKind::WorkOrders => {
                export_screen(&mut state.screens.work_orders, &state.data.work_orders, path);
            }
            RecordKind::Inspections => {
                export_screen(&mut state.screens.inspections, &state.data.inspections, path);
            }
            RecordKind::PmSchedules => {
                export_screen(&mut state.screens.pm_schedules, &state.data.pm_schedules, path);
            }
            RecordKind::Meters => {
                export_screen(
                    &mut state.screens.meter_readings,
                    &state.data.meter_readings,
                    path,
                );
            }
            RecordKind::Calibrations => {
                export_screen(&mut state.screens.calibrations, &state.data.calibrations, path);
            }
            RecordKind::Organizations => {
                export_screen(
                    &mut state.screens.organizations,
                    &state.data.organizations,
                    path,
                );
            }
            RecordKind::Roles => {
                export_screen(&mut state.screens.roles, &state.data.roles, path);
            }
            RecordKind::Labels => {
                export_screen(&mut state.screens.labels, &state.data.labels, path);
            }
        }
    }

    /// CSV import lands records in the equipment repository; other kinds
    /// do not offer the import button.
    fn import_from(&mut self, kind: RecordKind, path: &Path) {
        if kind != RecordKind::Equipment {
            return;
        }
        let outcome = match File::open(path) {
            Ok(file) => match import_equipment_csv(file) {
                Ok(outcome) => outcome,
                Err(error) => {
                    warn!(%error, "import failed");
                    self.state.screens.equipment.notice = Some(format!("Import failed: {error}"));
                    return;
                }
            },
            Err(error) => {
                warn!(%error, path = %path.display(), "could not open import file");
                self.state.screens.equipment.notice = Some(format!("Import failed: {error}"));
                return;
            }
        };

        let mut inserted = 0usize;
        let mut skipped = outcome.issues.len();
        for record in outcome.records {
            match self.state.data.equipment.insert(record) {
                Ok(()) => inserted += 1,
                Err(_) => skipped += 1,
            }
        }
        self.state.screens.equipment.notice = Some(format!(
            "Imported {inserted} records, {skipped} rejected"
        ));
        self.persist();
    }
}

/// Export what the table currently shows: the filtered and sorted rows
/// (all pages), narrowed to the selection when one exists.
fn export_screen<R: ManagedRecord>(
    screen: &mut ScreenState<R>,
    repo: &MemoryRepository<R>,
    path: &Path,
) {
    let columns = R::columns();
    let data = repo.list();
    let mut query = screen.query.clone();
    query.set_page_size(data.len().max(1));

    let view = apply(&columns, &data, &query);
    let rows: Vec<&R> = if screen.selection.is_empty() {
        view.rows
    } else {
        view.rows
            .into_iter()
            .filter(|record| screen.selection.contains(record.id()))
            .collect()
    };
    let count = rows.len();

    let result = File::create(path)
        .map_err(cmms_store::StoreError::from)
        .and_then(|file| export_csv(file, &columns, &rows));
    screen.notice = Some(match result {
        Ok(()) => format!("Exported {count} rows to {}", path.display()),
        Err(error) => {
            warn!(%error, "export failed");
            format!("Export failed: {error}")
        }
    });
}
