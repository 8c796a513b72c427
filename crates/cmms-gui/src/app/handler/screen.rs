//! The generic management-screen handler.
//!
//! One function processes every [`ScreenMessage`] for every record kind;
//! the record type's `ManagedRecord` implementation supplies the
//! kind-specific pieces. All repository mutations happen synchronously in
//! here, inside the update loop.

use chrono::Local;
use iced::Task;
use tracing::{debug, warn};
use uuid::Uuid;

use cmms_core::{apply, FormMode, OnClose};
use cmms_model::Entity;
use cmms_store::{MemoryRepository, Repository};

use crate::message::{Message, ScreenMessage};
use crate::record::{FormDraft, FormRefs, ManagedRecord};
use crate::state::ScreenState;

pub fn handle_screen<R: ManagedRecord>(
    screen: &mut ScreenState<R>,
    repo: &mut MemoryRepository<R>,
    refs: &FormRefs,
    message: ScreenMessage,
) -> Task<Message> {
    match message {
        // === Table query ===
        ScreenMessage::SearchChanged(query) => {
            screen.query.set_search(query);
        }
        ScreenMessage::FilterChanged(column, value) => {
            screen.query.set_filter(&column, value);
        }
        ScreenMessage::SortToggled(column) => {
            screen.query.toggle_sort(&column);
        }
        ScreenMessage::PageChanged(page) => {
            screen.query.set_page(page);
        }
        ScreenMessage::PageSizeChanged(page_size) => {
            screen.query.set_page_size(page_size);
        }

        // === Crud flow ===
        ScreenMessage::AddRequested => {
            screen.draft = FormDraft::default();
            screen.errors.clear();
            screen.crud.open_create();
        }
        ScreenMessage::ViewRequested(id) => {
            if let Some(record) = repo.get(id) {
                screen.draft = record.to_draft();
                screen.errors.clear();
                screen.crud.open_view(record);
            }
        }
        ScreenMessage::EditRequested(id) => {
            if let Some(record) = repo.get(id) {
                screen.draft = record.to_draft();
                screen.errors.clear();
                screen.crud.open_edit(record);
            }
        }
        ScreenMessage::SwitchToEdit => {
            // The view dialog keeps its selection on close exactly so this
            // reopen-as-editor works without refetching.
            screen.crud.close_form(OnClose::KeepSelection);
            if let Some(kept) = screen.crud.selected.clone() {
                screen.crud.open_edit(kept);
            }
        }
        ScreenMessage::DeleteRequested(id) => {
            if let Some(record) = repo.get(id) {
                screen.crud.request_delete(record);
            }
        }
        ScreenMessage::DeleteConfirmed => {
            if let Some(record) = screen.crud.pending_delete.clone() {
                let id = record.id();
                match repo.remove(id) {
                    Ok(_) => {
                        if screen.selection.contains(id) {
                            screen.selection.toggle(id);
                        }
                        debug!(kind = %R::KIND, %id, "record deleted");
                    }
                    Err(error) => warn!(kind = %R::KIND, %error, "delete failed"),
                }
            }
            screen.crud.close_delete_dialog();
        }
        ScreenMessage::DeleteCancelled => {
            screen.crud.close_delete_dialog();
        }
        ScreenMessage::ActionInvoked(action, id) => {
            if let Some(mut record) = repo.get(id) {
                let today = Local::now().date_naive();
                match R::run_action(&action, &mut record, today) {
                    Ok(true) => {
                        if let Err(error) = repo.update(record) {
                            warn!(kind = %R::KIND, %error, "action write-back failed");
                        }
                    }
                    Ok(false) => {}
                    Err(error) => warn!(kind = %R::KIND, action = %action, %error, "action rejected"),
                }
            }
        }

        // === Form ===
        ScreenMessage::FieldChanged(field, value) => {
            if screen.crud.form_open && screen.crud.form_mode != FormMode::View {
                screen.draft.set(&field, value);
            }
        }
        ScreenMessage::FormSubmitted => {
            match R::from_draft(&screen.draft, screen.crud.selected.as_ref(), refs) {
                Ok(record) => {
                    let result = if screen.crud.form_mode == FormMode::Create {
                        repo.insert(record)
                    } else {
                        repo.update(record)
                    };
                    match result {
                        Ok(()) => {
                            screen.crud.reset_form();
                            screen.draft = FormDraft::default();
                            screen.errors.clear();
                        }
                        Err(error) => {
                            screen.errors.insert(String::new(), error.to_string());
                        }
                    }
                }
                Err(errors) => {
                    screen.errors = errors;
                }
            }
        }
        ScreenMessage::FormCancelled => {
            screen.crud.close_form(OnClose::ClearSelection);
            screen.errors.clear();
        }

        // === Selection ===
        ScreenMessage::SelectionToggled(id) => {
            screen.selection.toggle(id);
        }
        ScreenMessage::SelectAllToggled => {
            let columns = R::columns();
            let data = repo.list();
            let view = apply(&columns, &data, &screen.query);
            let visible: Vec<Uuid> = view.rows.iter().map(|record| record.id()).collect();
            screen.selection.toggle_all(&visible);
        }

        // === Import/export ===
        ScreenMessage::ImportExportToggled => {
            screen.crud.toggle_import_export();
        }
        ScreenMessage::ExportCsvRequested => {
            let kind = R::KIND;
            let file_name = format!("{}.csv", file_stem(kind.label()));
            return Task::perform(
                async move {
                    rfd::AsyncFileDialog::new()
                        .set_file_name(file_name)
                        .save_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                move |path| Message::ExportPathChosen(kind, path),
            );
        }
        ScreenMessage::ImportCsvRequested => {
            let kind = R::KIND;
            return Task::perform(
                async move {
                    rfd::AsyncFileDialog::new()
                        .add_filter("CSV", &["csv"])
                        .pick_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                move |path| Message::ImportPathChosen(kind, path),
            );
        }
    }
    Task::none()
}

fn file_stem(label: &str) -> String {
    label.to_lowercase().replace(' ', "_")
}
