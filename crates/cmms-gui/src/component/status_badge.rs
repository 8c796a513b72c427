//! Status badge component.
//!
//! Small pill showing a badge cell; tone decides text and fill colors.

use cmms_core::BadgeTone;
use iced::widget::{container, text};
use iced::{Border, Element, Theme};

use crate::theme::{ConsoleColors, BORDER_RADIUS_FULL};

/// Creates a colored status pill.
pub fn status_badge<'a, M: 'a>(label: String, tone: BadgeTone) -> Element<'a, M> {
    container(
        text(label)
            .size(11)
            .style(move |theme: &Theme| text::Style {
                color: Some(badge_text_color(theme, tone)),
            }),
    )
    .padding([2.0, 8.0])
    .style(move |theme: &Theme| container::Style {
        background: Some(badge_background(theme, tone).into()),
        border: Border {
            radius: BORDER_RADIUS_FULL.into(),
            ..Border::default()
        },
        ..Default::default()
    })
    .into()
}

fn badge_text_color(theme: &Theme, tone: BadgeTone) -> iced::Color {
    let palette = theme.extended_palette();
    let console = theme.console();
    match tone {
        BadgeTone::Success => palette.success.base.color,
        BadgeTone::Warning => palette.warning.base.color,
        BadgeTone::Danger => palette.danger.base.color,
        BadgeTone::Info => console.info,
        BadgeTone::Neutral => console.text_muted,
    }
}

fn badge_background(theme: &Theme, tone: BadgeTone) -> iced::Color {
    let console = theme.console();
    match tone {
        BadgeTone::Success => console.status_success_light,
        BadgeTone::Warning => console.status_warning_light,
        BadgeTone::Danger => console.status_danger_light,
        BadgeTone::Info => console.status_info_light,
        BadgeTone::Neutral => console.status_neutral_light,
    }
}
