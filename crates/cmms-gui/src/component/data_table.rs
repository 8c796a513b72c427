//! Data table component.
//!
//! Renders one page of rows as prepared by the query pipeline: sortable
//! headers, zebra rows, badge cells, selection checkboxes and per-row
//! action buttons. All query state lives with the owning screen; this
//! component only displays and emits messages.

use cmms_core::{
    ActionIcon, ActionTone, CellAlign, CellValue, ColumnWidth, Selection, SortDirection,
};
use cmms_model::RecordKind;
use iced::widget::{button, checkbox, column, container, row, rule, scrollable, text};
use iced::{Element, Length, Theme};
use iced_fonts::lucide;
use uuid::Uuid;

use crate::component::empty_state::empty_state;
use crate::component::icon::action_glyph;
use crate::component::status_badge::status_badge;
use crate::message::{Message, ScreenMessage};
use crate::theme::{
    button_ghost, ConsoleColors, SPACING_XS, TABLE_CELL_PADDING_X, TABLE_CELL_PADDING_Y,
};

/// Token shown for missing cell values.
const EMPTY_TOKEN: &str = "\u{2014}";

const SELECT_COLUMN_WIDTH: f32 = 36.0;
const ACTIONS_COLUMN_WIDTH: f32 = 150.0;

/// Header cell facts derived from a column descriptor plus the query.
pub struct HeaderSpec {
    pub key: String,
    pub title: String,
    pub width: ColumnWidth,
    pub align: CellAlign,
    pub sortable: bool,
    pub sorted: Option<SortDirection>,
}

/// One visible action button on a row.
pub struct RowActionSpec {
    pub key: String,
    pub label: String,
    pub icon: ActionIcon,
    pub tone: ActionTone,
}

/// One rendered row: identity, materialized cells, visible actions.
pub struct TableRow {
    pub id: Uuid,
    pub cells: Vec<CellValue>,
    pub actions: Vec<RowActionSpec>,
}

/// Creates the data table for one page of rows.
pub fn data_table(
    kind: RecordKind,
    headers: &[HeaderSpec],
    rows: Vec<TableRow>,
    selection: &Selection,
    empty_message: &str,
) -> Element<'static, Message> {
    let visible_ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
    let all_selected = selection.all_selected(&visible_ids);

    // Header row: select-all box, column titles (sortable ones as buttons),
    // actions spacer.
    let mut header = row![].spacing(0);
    header = header.push(
        header_container(
            checkbox(all_selected)
                .label("")
                .on_toggle(move |_| Message::Screen(kind, ScreenMessage::SelectAllToggled))
                .size(14)
                .into(),
        )
        .width(Length::Fixed(SELECT_COLUMN_WIDTH)),
    );
    for spec in headers {
        let title_text = text(spec.title.clone())
            .size(12)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.console().text_muted),
            });
        let content: Element<'static, Message> = if spec.sortable {
            let glyph = match spec.sorted {
                Some(SortDirection::Ascending) => lucide::arrow_up(),
                Some(SortDirection::Descending) => lucide::arrow_down(),
                None => lucide::arrow_up_down(),
            };
            let key = spec.key.clone();
            button(
                row![
                    title_text,
                    glyph.size(11).style(|theme: &Theme| text::Style {
                        color: Some(theme.console().text_muted),
                    }),
                ]
                .spacing(SPACING_XS)
                .align_y(iced::Alignment::Center),
            )
            .on_press(Message::Screen(kind, ScreenMessage::SortToggled(key)))
            .padding(0)
            .style(button_ghost)
            .into()
        } else {
            title_text.into()
        };
        header = header.push(header_container(content).width(length(spec.width)));
    }
    header = header.push(
        header_container(text("").into()).width(Length::Fixed(ACTIONS_COLUMN_WIDTH)),
    );

    // Data rows.
    let body: Element<'static, Message> = if rows.is_empty() {
        empty_state(empty_message)
    } else {
        let mut data_rows = column![].spacing(0);
        for (row_idx, table_row) in rows.into_iter().enumerate() {
            let is_even = row_idx % 2 == 0;
            let id = table_row.id;
            let is_selected = selection.contains(id);

            let mut data_row = row![].spacing(0);
            data_row = data_row.push(
                cell_container(
                    checkbox(is_selected)
                        .label("")
                        .on_toggle(move |_| {
                            Message::Screen(kind, ScreenMessage::SelectionToggled(id))
                        })
                        .size(14)
                        .into(),
                    is_even,
                )
                .width(Length::Fixed(SELECT_COLUMN_WIDTH)),
            );

            for (col_idx, cell) in table_row.cells.into_iter().enumerate() {
                let spec = headers.get(col_idx);
                let width = spec.map_or(ColumnWidth::Fill, |s| s.width);
                let align = spec.map_or(CellAlign::Start, |s| s.align);
                data_row = data_row.push(
                    cell_container(cell_content(cell), is_even)
                        .width(length(width))
                        .align_x(horizontal(align)),
                );
            }

            let mut action_buttons = row![].spacing(2.0);
            for action in table_row.actions {
                action_buttons = action_buttons.push(action_button(kind, id, action));
            }
            data_row = data_row.push(
                cell_container(action_buttons.into(), is_even)
                    .width(Length::Fixed(ACTIONS_COLUMN_WIDTH)),
            );

            data_rows = data_rows.push(data_row);
        }
        scrollable(data_rows).height(Length::Fill).into()
    };

    column![
        header,
        rule::horizontal(1).style(|theme: &Theme| rule::Style {
            color: theme.console().border_default,
            radius: 0.0.into(),
            fill_mode: rule::FillMode::Full,
            snap: true,
        }),
        body,
    ]
    .spacing(0)
    .into()
}

fn cell_content(cell: CellValue) -> Element<'static, Message> {
    match cell {
        CellValue::Badge { label, tone } => status_badge(label, tone),
        CellValue::Missing => text(EMPTY_TOKEN)
            .size(13)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.console().text_disabled),
            })
            .into(),
        other => text(other.display())
            .size(13)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.console().text_secondary),
            })
            .into(),
    }
}

fn action_button(kind: RecordKind, id: Uuid, action: RowActionSpec) -> Element<'static, Message> {
    let danger = action.tone == ActionTone::Danger;
    let message = match action.key.as_str() {
        "view" => ScreenMessage::ViewRequested(id),
        "edit" => ScreenMessage::EditRequested(id),
        "delete" => ScreenMessage::DeleteRequested(id),
        other => ScreenMessage::ActionInvoked(other.to_string(), id),
    };
    button(
        action_glyph(action.icon)
            .size(14)
            .style(move |theme: &Theme| text::Style {
                color: Some(if danger {
                    theme.extended_palette().danger.base.color
                } else {
                    theme.console().text_secondary
                }),
            }),
    )
    .on_press(Message::Screen(kind, message))
    .padding([4.0, 6.0])
    .style(button_ghost)
    .into()
}

fn header_container(
    content: Element<'static, Message>,
) -> iced::widget::Container<'static, Message> {
    container(content)
        .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X])
        .style(|theme: &Theme| container::Style {
            background: Some(theme.console().background_secondary.into()),
            ..Default::default()
        })
}

fn cell_container(
    content: Element<'static, Message>,
    is_even: bool,
) -> iced::widget::Container<'static, Message> {
    container(content)
        .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X])
        .style(move |theme: &Theme| {
            let console = theme.console();
            container::Style {
                background: Some(
                    if is_even {
                        console.background_elevated
                    } else {
                        theme.extended_palette().background.base.color
                    }
                    .into(),
                ),
                ..Default::default()
            }
        })
}

fn length(width: ColumnWidth) -> Length {
    match width {
        ColumnWidth::Fixed(w) => Length::Fixed(w),
        ColumnWidth::Fill => Length::Fill,
        ColumnWidth::Portion(p) => Length::FillPortion(p),
    }
}

fn horizontal(align: CellAlign) -> iced::alignment::Horizontal {
    match align {
        CellAlign::Start => iced::alignment::Horizontal::Left,
        CellAlign::Center => iced::alignment::Horizontal::Center,
        CellAlign::End => iced::alignment::Horizontal::Right,
    }
}
