//! Modal dialog overlay component.
//!
//! Modal dialogs stack on top of the base view with a backdrop. Clicking
//! the backdrop does NOT close the modal - use the close button.

use iced::widget::{button, center, column, container, opaque, row, space, stack, text};
use iced::{Element, Length, Theme};
use iced_fonts::lucide;

use crate::theme::{
    button_danger, button_ghost, button_secondary, container_modal, ConsoleColors, MODAL_WIDTH_MD,
    SPACING_MD, SPACING_SM,
};

/// Creates a modal dialog overlay.
///
/// # Arguments
///
/// * `base` - The background content (entire app view)
/// * `title` - Modal title text
/// * `content` - Modal body content
/// * `on_close` - Message sent by the close button
/// * `actions` - Footer action buttons
pub fn modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &str,
    content: Element<'a, M>,
    on_close: M,
    actions: Vec<Element<'a, M>>,
) -> Element<'a, M> {
    let backdrop = container(column![])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.console().backdrop.into()),
            ..Default::default()
        });

    let header = row![
        text(title.to_string())
            .size(18)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.base.text),
            }),
        space::horizontal(),
        button(
            container(lucide::x().size(18)).style(|theme: &Theme| container::Style {
                text_color: Some(theme.console().text_muted),
                ..Default::default()
            })
        )
        .on_press(on_close)
        .padding([4.0, 8.0])
        .style(button_ghost),
    ]
    .align_y(iced::Alignment::Center);

    let action_row = {
        let mut footer = row![space::horizontal()].spacing(SPACING_SM);
        for action in actions {
            footer = footer.push(action);
        }
        footer
    };

    let dialog = container(
        column![
            header,
            container(content).padding([SPACING_MD, 0.0]),
            action_row,
        ]
        .spacing(SPACING_MD),
    )
    .width(Length::Fixed(MODAL_WIDTH_MD))
    .padding(SPACING_MD)
    .style(container_modal);

    stack![base, opaque(backdrop), center(dialog)].into()
}

/// Pre-built confirmation modal for destructive actions.
pub fn confirm_modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &str,
    message: String,
    confirm_label: &str,
    on_confirm: M,
    on_cancel: M,
) -> Element<'a, M> {
    let content = text(message).size(14).into();

    let cancel_btn: Element<'a, M> = button(text("Cancel"))
        .on_press(on_cancel.clone())
        .padding([8.0, 16.0])
        .style(button_secondary)
        .into();

    let confirm_btn: Element<'a, M> = button(text(confirm_label.to_string()))
        .on_press(on_confirm)
        .padding([8.0, 16.0])
        .style(button_danger)
        .into();

    modal(base, title, content, on_cancel, vec![cancel_btn, confirm_btn])
}
