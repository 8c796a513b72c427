//! Widget style functions.
//!
//! Style functions receive `&Theme` and resolve colors through the console
//! extension trait, e.g. `button(text("Save")).style(button_primary)`.

#![allow(dead_code)]

use iced::widget::{button, container, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

use super::colors::ConsoleColors;
use super::spacing;

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - main actions.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let console = theme.console();

    match status {
        button::Status::Active => button::Style {
            background: Some(palette.primary.base.color.into()),
            text_color: console.text_on_accent,
            border: rounded_border(),
            shadow: Shadow {
                color: console.shadow,
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(console.accent_hover.into()),
            text_color: console.text_on_accent,
            border: rounded_border(),
            shadow: Shadow {
                color: console.shadow_strong,
                offset: Vector::new(0.0, 2.0),
                blur_radius: 4.0,
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(console.accent_pressed.into()),
            text_color: console.text_on_accent,
            border: rounded_border(),
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(console.accent_disabled.into()),
            text_color: console.text_muted,
            border: rounded_border(),
            shadow: Shadow::default(),
            ..Default::default()
        },
    }
}

/// Secondary button style - alternative actions.
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let console = theme.console();

    match status {
        button::Status::Active => button::Style {
            background: Some(console.background_elevated.into()),
            text_color: console.text_secondary,
            border: outlined_border(console.border_default),
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.base.color.into()),
            text_color: console.text_secondary,
            border: outlined_border(console.text_disabled),
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(console.background_secondary.into()),
            text_color: console.text_secondary,
            border: outlined_border(console.border_default),
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(console.background_secondary.into()),
            text_color: console.text_disabled,
            border: outlined_border(console.border_subtle),
            shadow: Shadow::default(),
            ..Default::default()
        },
    }
}

/// Danger button style - destructive actions.
pub fn button_danger(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let console = theme.console();

    match status {
        button::Status::Active => button::Style {
            background: Some(palette.danger.base.color.into()),
            text_color: console.text_on_accent,
            border: rounded_border(),
            shadow: Shadow {
                color: console.shadow,
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(console.danger_hover.into()),
            text_color: console.text_on_accent,
            border: rounded_border(),
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(console.danger_pressed.into()),
            text_color: console.text_on_accent,
            border: rounded_border(),
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(console.accent_disabled.into()),
            text_color: console.text_muted,
            border: rounded_border(),
            shadow: Shadow::default(),
            ..Default::default()
        },
    }
}

/// Ghost button style - minimal visual weight.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let console = theme.console();

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: palette.primary.base.color,
            border: rounded_border(),
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(console.accent_primary_light.into()),
            text_color: palette.primary.base.color,
            border: rounded_border(),
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(console.accent_primary_medium.into()),
            text_color: console.accent_pressed,
            border: rounded_border(),
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: console.text_disabled,
            border: rounded_border(),
            shadow: Shadow::default(),
            ..Default::default()
        },
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Card container style - elevated surface.
pub fn container_card(theme: &Theme) -> container::Style {
    let console = theme.console();

    container::Style {
        background: Some(console.background_elevated.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: console.border_subtle,
        },
        shadow: Shadow {
            color: console.shadow,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Modal container style - dialog overlay.
pub fn container_modal(theme: &Theme) -> container::Style {
    let console = theme.console();

    container::Style {
        background: Some(console.background_elevated.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_LG.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: console.border_subtle,
        },
        shadow: Shadow {
            color: console.shadow_strong,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        },
        ..Default::default()
    }
}

/// Sidebar container style - navigation panel.
pub fn container_sidebar(theme: &Theme) -> container::Style {
    let console = theme.console();

    container::Style {
        background: Some(console.background_secondary.into()),
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();
    let console = theme.console();

    match status {
        text_input::Status::Active => text_input::Style {
            background: console.background_elevated.into(),
            border: outlined_border(console.border_default),
            icon: console.text_muted,
            placeholder: console.text_disabled,
            value: palette.background.base.text,
            selection: console.accent_primary_medium,
        },
        text_input::Status::Hovered => text_input::Style {
            background: console.background_elevated.into(),
            border: outlined_border(console.text_disabled),
            icon: console.text_muted,
            placeholder: console.text_disabled,
            value: palette.background.base.text,
            selection: console.accent_primary_medium,
        },
        text_input::Status::Focused { .. } => text_input::Style {
            background: console.background_elevated.into(),
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: spacing::BORDER_WIDTH_MEDIUM,
                color: console.border_focused,
            },
            icon: console.text_muted,
            placeholder: console.text_disabled,
            value: palette.background.base.text,
            selection: console.accent_primary_medium,
        },
        text_input::Status::Disabled => text_input::Style {
            background: console.background_secondary.into(),
            border: outlined_border(console.border_default),
            icon: console.text_disabled,
            placeholder: console.text_disabled,
            value: console.text_muted,
            selection: console.border_subtle,
        },
    }
}

fn rounded_border() -> Border {
    Border {
        radius: spacing::BORDER_RADIUS_SM.into(),
        width: 0.0,
        color: Color::TRANSPARENT,
    }
}

fn outlined_border(color: Color) -> Border {
    Border {
        radius: spacing::BORDER_RADIUS_SM.into(),
        width: spacing::BORDER_WIDTH_THIN,
        color,
    }
}
