//! Page header with title and toolbar actions.

use iced::widget::{column, row, space, text};
use iced::{Element, Theme};

use crate::theme::{ConsoleColors, SPACING_SM, SPACING_XS};

/// Title line plus right-aligned toolbar buttons.
pub fn page_header<'a, M: 'a>(
    title: String,
    subtitle: Option<String>,
    actions: Vec<Element<'a, M>>,
) -> Element<'a, M> {
    let mut heading = column![
        text(title)
            .size(22)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.base.text),
            }),
    ]
    .spacing(SPACING_XS);

    if let Some(subtitle) = subtitle {
        heading = heading.push(text(subtitle).size(12).style(|theme: &Theme| text::Style {
            color: Some(theme.console().text_muted),
        }));
    }

    let mut header = row![heading, space::horizontal()].spacing(SPACING_SM);
    for action in actions {
        header = header.push(action);
    }
    header.align_y(iced::Alignment::Center).into()
}
