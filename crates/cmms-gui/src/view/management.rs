//! The generic management screen.
//!
//! Every record kind renders through this one function: toolbar, search
//! and filter bar, data table, pagination, and the form/delete/exchange
//! dialogs driven by the screen's crud state.

use cmms_core::{apply, AccessPolicy, FormMode};
use cmms_model::{CrudAction, Entity, Labels};
use cmms_store::{MemoryRepository, Repository};
use iced::widget::{button, column, row, scrollable, space, text};
use iced::{Element, Length, Theme};
use iced_fonts::lucide;

use crate::component::form::form_fields_view;
use crate::component::search_filter_bar::FilterSpec;
use crate::component::{
    confirm_modal, data_table, modal, page_header, pagination, rows_per_page_selector,
    search_filter_bar, HeaderSpec, RowActionSpec, TableRow,
};
use crate::message::{Message, ScreenMessage};
use crate::record::{FormRefs, ManagedRecord};
use crate::state::ScreenState;
use crate::theme::{
    button_ghost, button_primary, button_secondary, ConsoleColors, SPACING_MD, SPACING_SM,
};

pub fn view_management<R: ManagedRecord>(
    screen: &ScreenState<R>,
    repo: &MemoryRepository<R>,
    access: &AccessPolicy,
    labels: &Labels,
    refs: &FormRefs,
) -> Element<'static, Message> {
    let kind = R::KIND;
    let columns = R::columns();
    let actions = R::actions();
    let data = repo.list();
    let view = apply(&columns, &data, &screen.query);

    let headers: Vec<HeaderSpec> = columns
        .iter()
        .map(|column| HeaderSpec {
            key: column.key.to_string(),
            title: column.title.clone(),
            width: column.width,
            align: column.align,
            sortable: column.sortable,
            sorted: screen.query.sort_direction(column.key),
        })
        .collect();

    let rows: Vec<TableRow> = view
        .rows
        .iter()
        .map(|record| TableRow {
            id: record.id(),
            cells: columns.iter().map(|column| column.value(record)).collect(),
            actions: actions
                .iter()
                .filter(|action| action.visible_for(record))
                .filter(|action| {
                    action
                        .requires
                        .is_none_or(|permission| access.has_permission(permission))
                })
                .map(|action| RowActionSpec {
                    key: action.key.to_string(),
                    label: action.label.clone(),
                    icon: action.icon,
                    tone: action.tone,
                })
                .collect(),
        })
        .collect();

    let filters: Vec<FilterSpec> = columns
        .iter()
        .filter(|column| column.is_filterable())
        .map(|column| FilterSpec {
            key: column.key.to_string(),
            options: column.filter_options.clone(),
            selected: screen.query.filter(column.key).map(str::to_string),
        })
        .collect();

    // Toolbar actions honor the access policy, same as row actions.
    let mut toolbar: Vec<Element<'static, Message>> = Vec::new();
    if access.allows(kind, CrudAction::Export) {
        toolbar.push(
            button(
                row![lucide::download().size(13), text("CSV").size(13)]
                    .spacing(6.0)
                    .align_y(iced::Alignment::Center),
            )
            .on_press(Message::Screen(kind, ScreenMessage::ImportExportToggled))
            .padding([8.0, 14.0])
            .style(button_secondary)
            .into(),
        );
    }
    if access.allows(kind, CrudAction::Create) {
        toolbar.push(
            button(
                row![
                    lucide::plus().size(13),
                    text(format!("New {}", kind.singular())).size(13),
                ]
                .spacing(6.0)
                .align_y(iced::Alignment::Center),
            )
            .on_press(Message::Screen(kind, ScreenMessage::AddRequested))
            .padding([8.0, 14.0])
            .style(button_primary)
            .into(),
        );
    }

    let title = labels.resolve(kind.label_key(), kind.label()).to_string();
    let header = page_header(title, None, toolbar);

    let table = data_table(kind, &headers, rows, &screen.selection, "No matching records");

    let footer = row![
        rows_per_page_selector(kind, screen.query.page_size),
        space::horizontal(),
        pagination(kind, view.page, view.page_count, view.row_range(), view.total),
    ]
    .align_y(iced::Alignment::Center);

    let page: Element<'static, Message> = column![
        header,
        search_filter_bar(kind, &screen.query.search, filters),
        table,
        footer,
    ]
    .spacing(SPACING_MD)
    .into();

    // Dialog stack: form, then exchange, then the delete confirmation on
    // top, matching the order the interactions can nest in.
    let mut page = page;
    if screen.crud.form_open {
        page = form_modal(page, screen, access, refs);
    }
    if screen.crud.import_export_open {
        page = exchange_modal::<R>(page, screen, access);
    }
    if screen.crud.delete_dialog_open {
        let subject = screen
            .crud
            .pending_delete
            .as_ref()
            .map_or_else(|| "this record".to_string(), |record| record.describe());
        page = confirm_modal(
            page,
            &format!("Delete {}", kind.singular()),
            format!("Delete {subject}? This cannot be undone."),
            "Delete",
            Message::Screen(kind, ScreenMessage::DeleteConfirmed),
            Message::Screen(kind, ScreenMessage::DeleteCancelled),
        );
    }
    page
}

fn form_modal<R: ManagedRecord>(
    base: Element<'static, Message>,
    screen: &ScreenState<R>,
    access: &AccessPolicy,
    refs: &FormRefs,
) -> Element<'static, Message> {
    let kind = R::KIND;
    let read_only = screen.crud.form_mode == FormMode::View;
    let title = match screen.crud.form_mode {
        FormMode::Create => format!("New {}", kind.singular()),
        FormMode::Edit => format!("Edit {}", kind.singular()),
        FormMode::View => kind.singular().to_string(),
    };

    let fields = R::form_fields();
    let body = scrollable(form_fields_view(
        kind,
        &fields,
        &screen.draft,
        &screen.errors,
        refs,
        read_only,
    ))
    .height(Length::Shrink);

    let mut buttons: Vec<Element<'static, Message>> = Vec::new();
    if read_only {
        buttons.push(
            button(text("Close"))
                .on_press(Message::Screen(kind, ScreenMessage::FormCancelled))
                .padding([8.0, 16.0])
                .style(button_secondary)
                .into(),
        );
        if access.allows(kind, CrudAction::Edit) {
            buttons.push(
                button(text("Edit"))
                    .on_press(Message::Screen(kind, ScreenMessage::SwitchToEdit))
                    .padding([8.0, 16.0])
                    .style(button_primary)
                    .into(),
            );
        }
    } else {
        buttons.push(
            button(text("Cancel"))
                .on_press(Message::Screen(kind, ScreenMessage::FormCancelled))
                .padding([8.0, 16.0])
                .style(button_secondary)
                .into(),
        );
        buttons.push(
            button(text("Save"))
                .on_press(Message::Screen(kind, ScreenMessage::FormSubmitted))
                .padding([8.0, 16.0])
                .style(button_primary)
                .into(),
        );
    }

    modal(
        base,
        &title,
        body.into(),
        Message::Screen(kind, ScreenMessage::FormCancelled),
        buttons,
    )
}

fn exchange_modal<R: ManagedRecord>(
    base: Element<'static, Message>,
    screen: &ScreenState<R>,
    access: &AccessPolicy,
) -> Element<'static, Message> {
    let kind = R::KIND;

    let mut body = column![
        text("Export writes the rows matching the current search and filters.").size(13),
    ]
    .spacing(SPACING_SM);
    if !screen.selection.is_empty() {
        body = body.push(
            text(format!(
                "{} selected rows will be exported instead.",
                screen.selection.len()
            ))
            .size(12)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.console().text_muted),
            }),
        );
    }
    if let Some(notice) = &screen.notice {
        body = body.push(text(notice.clone()).size(12).style(
            |theme: &Theme| text::Style {
                color: Some(theme.console().text_secondary),
            },
        ));
    }

    let mut buttons: Vec<Element<'static, Message>> = vec![
        button(text("Close"))
            .on_press(Message::Screen(kind, ScreenMessage::ImportExportToggled))
            .padding([8.0, 16.0])
            .style(button_ghost)
            .into(),
    ];
    if R::SUPPORTS_IMPORT && access.allows(kind, CrudAction::Create) {
        buttons.push(
            button(text("Import CSV"))
                .on_press(Message::Screen(kind, ScreenMessage::ImportCsvRequested))
                .padding([8.0, 16.0])
                .style(button_secondary)
                .into(),
        );
    }
    if access.allows(kind, CrudAction::Export) {
        buttons.push(
            button(text("Export CSV"))
                .on_press(Message::Screen(kind, ScreenMessage::ExportCsvRequested))
                .padding([8.0, 16.0])
                .style(button_primary)
                .into(),
        );
    }

    modal(
        base,
        "Import / Export",
        body.into(),
        Message::Screen(kind, ScreenMessage::ImportExportToggled),
        buttons,
    )
}
