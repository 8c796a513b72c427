//! Settings view.

use cmms_model::Language;
use iced::widget::{column, pick_list, text};
use iced::{Element, Length, Theme};

use crate::message::{Message, SettingsMessage};
use crate::state::AppState;
use crate::theme::{ConsoleColors, ThemeMode, SPACING_LG, SPACING_XS};

pub fn view_settings(state: &AppState) -> Element<'static, Message> {
    let settings = &state.settings;

    let appearance = column![
        section_title("Appearance"),
        hint("Light or dark mode, applied immediately"),
        pick_list(ThemeMode::ALL.to_vec(), Some(settings.theme_mode), |mode| {
            Message::Settings(SettingsMessage::ThemeModeChanged(mode))
        })
        .width(Length::Fixed(200.0)),
    ]
    .spacing(SPACING_XS);

    let language = column![
        section_title("Language"),
        hint("Display language for navigation labels"),
        pick_list(
            Language::all().to_vec(),
            Some(settings.language),
            |language| Message::Settings(SettingsMessage::LanguageChanged(language)),
        )
        .width(Length::Fixed(200.0)),
    ]
    .spacing(SPACING_XS);

    let page_size = column![
        section_title("Rows per page"),
        hint("Default page size for every screen"),
        pick_list(
            vec![10usize, 25, 50, 100],
            Some(settings.page_size),
            |size| Message::Settings(SettingsMessage::PageSizeChanged(size)),
        )
        .width(Length::Fixed(120.0)),
    ]
    .spacing(SPACING_XS);

    let account = column![
        section_title("Account"),
        hint("Configured in the settings file"),
        text(format!("Signed in as {}", settings.username)).size(13),
        text(match &settings.data_path {
            Some(path) => format!("Dataset store: {}", path.display()),
            None => "Dataset store: built-in sample data".to_string(),
        })
        .size(13),
    ]
    .spacing(SPACING_XS);

    column![appearance, language, page_size, account]
        .spacing(SPACING_LG)
        .into()
}

fn section_title(title: &str) -> Element<'static, Message> {
    text(title.to_string())
        .size(14)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.base.text),
        })
        .into()
}

fn hint(message: &str) -> Element<'static, Message> {
    text(message.to_string())
        .size(12)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.console().text_muted),
        })
        .into()
}
