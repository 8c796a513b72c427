//! Sidebar navigation component.

use iced::widget::{button, column, container, scrollable, text};
use iced::{Border, Element, Length, Theme};

use crate::theme::{
    container_sidebar, ConsoleColors, BORDER_RADIUS_SM, SIDEBAR_WIDTH, SPACING_SM, SPACING_XS,
};

/// A sidebar navigation item.
pub struct SidebarItem<M> {
    pub label: String,
    pub message: M,
}

impl<M> SidebarItem<M> {
    pub fn new(label: impl Into<String>, message: M) -> Self {
        Self {
            label: label.into(),
            message,
        }
    }
}

/// Creates the vertical sidebar navigation.
pub fn sidebar<'a, M: Clone + 'a>(
    items: Vec<SidebarItem<M>>,
    active_index: usize,
) -> Element<'a, M> {
    let mut item_column = column![].spacing(SPACING_XS);

    for (index, item) in items.into_iter().enumerate() {
        let is_active = index == active_index;
        let entry = button(
            text(item.label)
                .size(14)
                .style(move |theme: &Theme| text::Style {
                    color: Some(if is_active {
                        theme.extended_palette().primary.base.color
                    } else {
                        theme.console().text_secondary
                    }),
                }),
        )
        .on_press(item.message)
        .width(Length::Fill)
        .padding([8.0, 12.0])
        .style(move |theme: &Theme, _status| {
            let console = theme.console();
            iced::widget::button::Style {
                background: if is_active {
                    Some(console.accent_primary_light.into())
                } else {
                    None
                },
                border: Border {
                    radius: BORDER_RADIUS_SM.into(),
                    ..Border::default()
                },
                ..Default::default()
            }
        });
        item_column = item_column.push(entry);
    }

    container(scrollable(item_column).height(Length::Fill))
        .width(Length::Fixed(SIDEBAR_WIDTH))
        .height(Length::Fill)
        .padding(SPACING_SM)
        .style(container_sidebar)
        .into()
}
