//! Pagination controls and the rows-per-page selector.

use cmms_model::RecordKind;
use iced::widget::{button, container, row, space, text};
use iced::{Border, Element, Theme};
use iced_fonts::lucide;

use crate::message::{Message, ScreenMessage};
use crate::theme::{button_ghost, ConsoleColors, BORDER_RADIUS_SM, SPACING_SM, SPACING_XS};

/// First/prev/info/next/last pagination row.
pub fn pagination(
    kind: RecordKind,
    page: usize,
    page_count: usize,
    row_range: (usize, usize),
    total: usize,
) -> Element<'static, Message> {
    let prev_enabled = page > 1;
    let next_enabled = page < page_count;

    let go = move |target: usize| Message::Screen(kind, ScreenMessage::PageChanged(target));

    let first_button = page_button(lucide::chevrons_left(), prev_enabled, go(1));
    let prev_button = page_button(
        lucide::chevron_left(),
        prev_enabled,
        go(page.saturating_sub(1).max(1)),
    );
    let next_button = page_button(lucide::chevron_right(), next_enabled, go(page + 1));
    let last_button = page_button(lucide::chevrons_right(), next_enabled, go(page_count));

    let (start, end) = row_range;
    let page_info = container(
        text(format!("{start}-{end} of {total}"))
            .size(12)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.console().text_secondary),
            }),
    )
    .padding([6.0, 12.0])
    .style(|theme: &Theme| {
        let console = theme.console();
        container::Style {
            background: Some(console.background_elevated.into()),
            border: Border {
                color: console.border_default,
                width: 1.0,
                radius: BORDER_RADIUS_SM.into(),
            },
            ..Default::default()
        }
    });

    row![
        first_button,
        prev_button,
        space::horizontal().width(SPACING_XS),
        page_info,
        space::horizontal().width(SPACING_XS),
        next_button,
        last_button,
    ]
    .align_y(iced::Alignment::Center)
    .into()
}

fn page_button(
    glyph: iced::widget::Text<'static>,
    enabled: bool,
    message: Message,
) -> Element<'static, Message> {
    button(glyph.size(14).style(move |theme: &Theme| text::Style {
        color: Some(if enabled {
            theme.console().text_secondary
        } else {
            theme.console().text_disabled
        }),
    }))
    .on_press_maybe(if enabled { Some(message) } else { None })
    .padding([6.0, 8.0])
    .style(button_ghost)
    .into()
}

/// Rows-per-page selector.
pub fn rows_per_page_selector(kind: RecordKind, current: usize) -> Element<'static, Message> {
    let options = [10, 25, 50, 100];

    let label = text("Rows:").size(12).style(|theme: &Theme| text::Style {
        color: Some(theme.console().text_secondary),
    });

    let buttons: Vec<Element<'static, Message>> = options
        .iter()
        .map(|&n| {
            let is_selected = current == n;
            button(
                text(format!("{n}"))
                    .size(11)
                    .style(move |theme: &Theme| text::Style {
                        color: Some(if is_selected {
                            theme.extended_palette().primary.base.color
                        } else {
                            theme.console().text_secondary
                        }),
                    }),
            )
            .on_press(Message::Screen(kind, ScreenMessage::PageSizeChanged(n)))
            .padding([4.0, 8.0])
            .style(move |theme: &Theme, _status| {
                let console = theme.console();
                let accent = theme.extended_palette().primary.base.color;
                if is_selected {
                    iced::widget::button::Style {
                        background: Some(console.accent_primary_light.into()),
                        text_color: accent,
                        border: Border {
                            color: accent,
                            width: 1.0,
                            radius: BORDER_RADIUS_SM.into(),
                        },
                        ..Default::default()
                    }
                } else {
                    iced::widget::button::Style {
                        background: Some(console.background_elevated.into()),
                        text_color: console.text_secondary,
                        border: Border {
                            color: console.border_default,
                            width: 1.0,
                            radius: BORDER_RADIUS_SM.into(),
                        },
                        ..Default::default()
                    }
                }
            })
            .into()
        })
        .collect();

    row![label, space::horizontal().width(SPACING_SM)]
        .push(row(buttons).spacing(4.0))
        .align_y(iced::Alignment::Center)
        .into()
}
