//! Empty state placeholder shown when a table has no matching rows.

use iced::widget::{column, container, text};
use iced::{Element, Length, Theme};
use iced_fonts::lucide;

use crate::theme::{ConsoleColors, SPACING_SM};

/// Centered icon-and-message placeholder.
pub fn empty_state<'a, M: 'a>(message: &str) -> Element<'a, M> {
    let message = message.to_string();
    container(
        column![
            lucide::inbox().size(28).style(|theme: &Theme| text::Style {
                color: Some(theme.console().text_disabled),
            }),
            text(message)
                .size(13)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.console().text_muted),
                }),
        ]
        .spacing(SPACING_SM)
        .align_x(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .padding(40.0)
    .center_x(Length::Fill)
    .into()
}
