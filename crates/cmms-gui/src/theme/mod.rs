//! Theme for the CMMS Console.
//!
//! Colors come from Iced's extended palette plus a small extension trait
//! for console-specific surfaces; spacing and widget styles live in their
//! own modules.

pub mod colors;
pub mod spacing;
pub mod styles;

pub use colors::ConsoleColors;
pub use spacing::{
    BORDER_RADIUS_FULL, BORDER_RADIUS_LG, BORDER_RADIUS_MD, BORDER_RADIUS_SM, BORDER_WIDTH_MEDIUM,
    BORDER_WIDTH_THIN, MODAL_WIDTH_MD, SIDEBAR_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM,
    SPACING_XL, SPACING_XS, TABLE_CELL_PADDING_X, TABLE_CELL_PADDING_Y,
};
pub use styles::{
    button_danger, button_ghost, button_primary, button_secondary, container_card,
    container_modal, container_sidebar, text_input_default,
};

use iced::Theme;
use serde::{Deserialize, Serialize};

/// Appearance mode, persisted in the settings file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    pub const ALL: &'static [ThemeMode] = &[Self::Light, Self::Dark];
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolve the Iced theme for the configured mode.
pub fn console_theme(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Light => Theme::Light,
        ThemeMode::Dark => Theme::Dark,
    }
}
