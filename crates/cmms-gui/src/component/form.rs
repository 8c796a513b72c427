//! Declarative form rendering.
//!
//! Renders the field descriptors of a managed record into input widgets
//! bound to the screen's draft. View mode shows plain values instead of
//! inputs, which is how "all fields disabled" looks here.

use std::collections::BTreeMap;

use cmms_model::RecordKind;
use iced::widget::{checkbox, column, pick_list, row, text, text_input};
use iced::{Element, Length, Theme};

use crate::message::{Message, ScreenMessage};
use crate::record::{FieldControl, FormDraft, FormField, FormRefs};
use crate::theme::{text_input_default, ConsoleColors, SPACING_MD, SPACING_XS};

/// Render every field of a form, with validation errors inline.
pub fn form_fields_view(
    kind: RecordKind,
    fields: &[FormField],
    draft: &FormDraft,
    errors: &BTreeMap<String, String>,
    refs: &FormRefs,
    read_only: bool,
) -> Element<'static, Message> {
    let mut body = column![].spacing(SPACING_MD);

    if let Some(message) = errors.get("") {
        body = body.push(error_text(message.clone()));
    }

    for field in fields {
        let value = draft.get(field.key).to_string();
        let mut field_column = column![].spacing(SPACING_XS);

        // Flags carry their own label inside the checkbox.
        if !matches!(field.control, FieldControl::Flag) {
            let label = if field.required {
                format!("{} *", field.label)
            } else {
                field.label.to_string()
            };
            field_column = field_column.push(text(label).size(12).style(
                |theme: &Theme| text::Style {
                    color: Some(theme.console().text_secondary),
                },
            ));
        }

        let control: Element<'static, Message> = if read_only {
            read_only_value(field, &value)
        } else {
            editable_control(kind, field, value, refs)
        };
        field_column = field_column.push(control);

        if let Some(message) = errors.get(field.key) {
            field_column = field_column.push(error_text(message.clone()));
        }

        body = body.push(field_column);
    }

    body.into()
}

fn editable_control(
    kind: RecordKind,
    field: &FormField,
    value: String,
    refs: &FormRefs,
) -> Element<'static, Message> {
    let key = field.key;
    match &field.control {
        FieldControl::Text => text_input("", &value)
            .on_input(move |input| {
                Message::Screen(kind, ScreenMessage::FieldChanged(key.to_string(), input))
            })
            .padding([8.0, 12.0])
            .size(13)
            .style(text_input_default)
            .into(),
        FieldControl::Number => text_input("0", &value)
            .on_input(move |input| {
                Message::Screen(kind, ScreenMessage::FieldChanged(key.to_string(), input))
            })
            .padding([8.0, 12.0])
            .size(13)
            .style(text_input_default)
            .into(),
        FieldControl::Date => text_input("YYYY-MM-DD", &value)
            .on_input(move |input| {
                Message::Screen(kind, ScreenMessage::FieldChanged(key.to_string(), input))
            })
            .padding([8.0, 12.0])
            .size(13)
            .style(text_input_default)
            .into(),
        FieldControl::Flag => checkbox(value == "true")
            .label(field.label.to_string())
            .on_toggle(move |checked| {
                Message::Screen(
                    kind,
                    ScreenMessage::FieldChanged(key.to_string(), checked.to_string()),
                )
            })
            .size(16)
            .into(),
        FieldControl::Select(options) => select_control(kind, key, options.clone(), value),
        FieldControl::SelectRef(source) => {
            select_control(kind, key, refs.codes(*source), value)
        }
    }
}

fn select_control(
    kind: RecordKind,
    key: &'static str,
    options: Vec<String>,
    value: String,
) -> Element<'static, Message> {
    let selected = if value.is_empty() { None } else { Some(value) };
    pick_list(options, selected, move |choice| {
        Message::Screen(kind, ScreenMessage::FieldChanged(key.to_string(), choice))
    })
    .placeholder("Select...")
    .text_size(13)
    .padding([6.0, 10.0])
    .width(Length::Fill)
    .into()
}

fn read_only_value(field: &FormField, value: &str) -> Element<'static, Message> {
    let shown = match &field.control {
        FieldControl::Flag => {
            if value == "true" {
                "Yes".to_string()
            } else {
                "No".to_string()
            }
        }
        _ if value.is_empty() => "\u{2014}".to_string(),
        _ => value.to_string(),
    };
    let label = field.label.to_string();
    match field.control {
        FieldControl::Flag => row![
            text(label).size(12).style(|theme: &Theme| text::Style {
                color: Some(theme.console().text_secondary),
            }),
            text(shown).size(13),
        ]
        .spacing(SPACING_XS)
        .into(),
        _ => text(shown)
            .size(13)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.base.text),
            })
            .into(),
    }
}

fn error_text(message: String) -> Element<'static, Message> {
    text(message)
        .size(11)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().danger.base.color),
        })
        .into()
}
