//! Console color extension trait.
//!
//! Adds console-specific colors to Iced's `Theme` for surfaces the
//! built-in `ExtendedPalette` does not cover. Use inside style closures
//! that receive a `&Theme`.

use iced::{Color, Theme};

/// Console-specific colors derived from the active palette.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleColorSet {
    // === Status backgrounds (badge fills) ===
    pub status_success_light: Color,
    pub status_warning_light: Color,
    pub status_danger_light: Color,
    pub status_info_light: Color,
    pub status_neutral_light: Color,

    /// Info accent - not part of Iced's extended palette.
    pub info: Color,

    // === Danger button states ===
    pub danger_hover: Color,
    pub danger_pressed: Color,

    // === Accent tints ===
    pub accent_primary_light: Color,
    pub accent_primary_medium: Color,

    // === Borders ===
    pub border_default: Color,
    pub border_subtle: Color,
    pub border_focused: Color,

    // === Backgrounds ===
    pub background_secondary: Color,
    pub background_elevated: Color,
    pub background_inset: Color,

    // === Text ===
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub text_on_accent: Color,

    // === Interactive ===
    pub accent_hover: Color,
    pub accent_pressed: Color,
    pub accent_disabled: Color,

    // === Special ===
    pub shadow: Color,
    pub shadow_strong: Color,
    pub backdrop: Color,
}

/// Extension trait for console-specific colors.
pub trait ConsoleColors {
    fn console(&self) -> ConsoleColorSet;
}

impl ConsoleColors for Theme {
    fn console(&self) -> ConsoleColorSet {
        let palette = self.extended_palette();
        let is_dark = palette.is_dark;

        ConsoleColorSet {
            status_success_light: tint(palette.success.base.color, is_dark),
            status_warning_light: tint(palette.warning.base.color, is_dark),
            status_danger_light: tint(palette.danger.base.color, is_dark),
            status_info_light: if is_dark {
                Color::from_rgba(0.25, 0.55, 0.85, 0.15)
            } else {
                Color::from_rgb(0.90, 0.95, 0.99)
            },
            status_neutral_light: palette.background.weak.color,

            info: Color::from_rgb(0.25, 0.55, 0.85),

            danger_hover: if is_dark {
                blend_color(palette.danger.base.color, Color::WHITE, 0.15)
            } else {
                blend_color(palette.danger.base.color, Color::BLACK, 0.12)
            },
            danger_pressed: if is_dark {
                blend_color(palette.danger.base.color, Color::BLACK, 0.15)
            } else {
                blend_color(palette.danger.base.color, Color::BLACK, 0.25)
            },

            accent_primary_light: if is_dark {
                Color::from_rgba(
                    palette.primary.base.color.r,
                    palette.primary.base.color.g,
                    palette.primary.base.color.b,
                    0.15,
                )
            } else {
                blend_color(palette.primary.base.color, Color::WHITE, 0.88)
            },
            accent_primary_medium: if is_dark {
                Color::from_rgba(
                    palette.primary.base.color.r,
                    palette.primary.base.color.g,
                    palette.primary.base.color.b,
                    0.25,
                )
            } else {
                blend_color(palette.primary.base.color, Color::WHITE, 0.70)
            },

            border_default: palette.background.strong.color,
            border_subtle: if is_dark {
                Color::from_rgb(0.20, 0.20, 0.22)
            } else {
                Color::from_rgb(0.90, 0.90, 0.93)
            },
            border_focused: palette.primary.base.color,

            background_secondary: palette.background.weak.color,
            background_elevated: if is_dark {
                Color::from_rgb(0.16, 0.16, 0.18)
            } else {
                Color::WHITE
            },
            background_inset: if is_dark {
                Color::from_rgb(0.06, 0.06, 0.08)
            } else {
                Color::from_rgb(0.98, 0.98, 0.99)
            },

            text_secondary: if is_dark {
                Color::from_rgb(0.80, 0.80, 0.85)
            } else {
                Color::from_rgb(0.30, 0.30, 0.35)
            },
            text_muted: if is_dark {
                Color::from_rgb(0.60, 0.60, 0.65)
            } else {
                Color::from_rgb(0.50, 0.50, 0.55)
            },
            text_disabled: if is_dark {
                Color::from_rgb(0.40, 0.40, 0.45)
            } else {
                Color::from_rgb(0.65, 0.65, 0.70)
            },
            text_on_accent: Color::WHITE,

            accent_hover: palette.primary.strong.color,
            accent_pressed: if is_dark {
                blend_color(palette.primary.base.color, Color::BLACK, 0.20)
            } else {
                blend_color(palette.primary.base.color, Color::BLACK, 0.15)
            },
            accent_disabled: if is_dark {
                Color::from_rgb(0.30, 0.30, 0.35)
            } else {
                Color::from_rgb(0.82, 0.82, 0.86)
            },

            shadow: Color::from_rgba(0.0, 0.0, 0.0, if is_dark { 0.25 } else { 0.08 }),
            shadow_strong: Color::from_rgba(0.0, 0.0, 0.0, if is_dark { 0.40 } else { 0.16 }),
            backdrop: Color::from_rgba(0.0, 0.0, 0.0, if is_dark { 0.70 } else { 0.50 }),
        }
    }
}

/// Translucent tint of a status color, used behind badge text.
fn tint(base: Color, is_dark: bool) -> Color {
    if is_dark {
        Color::from_rgba(base.r, base.g, base.b, 0.15)
    } else {
        blend_color(base, Color::WHITE, 0.85)
    }
}

/// Blend two colors together.
///
/// `factor` of 0.0 returns `base`, 1.0 returns `blend`.
fn blend_color(base: Color, blend: Color, factor: f32) -> Color {
    Color::from_rgb(
        base.r + (blend.r - base.r) * factor,
        base.g + (blend.g - base.g) * factor,
        base.b + (blend.b - base.b) * factor,
    )
}
