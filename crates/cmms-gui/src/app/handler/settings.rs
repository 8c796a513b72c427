//! Settings screen handlers.

use iced::Task;

use crate::message::{Message, SettingsMessage};
use crate::state::AppState;

pub fn handle_settings(state: &mut AppState, message: SettingsMessage) -> Task<Message> {
    match message {
        SettingsMessage::ThemeModeChanged(mode) => {
            state.settings.theme_mode = mode;
        }
        SettingsMessage::LanguageChanged(language) => {
            state.settings.language = language;
            state.refresh_labels();
        }
        SettingsMessage::PageSizeChanged(page_size) => {
            state.settings.page_size = page_size;
            let screens = &mut state.screens;
            screens.equipment.query.set_page_size(page_size);
            screens.work_orders.query.set_page_size(page_size);
            screens.inspections.query.set_page_size(page_size);
            screens.pm_schedules.query.set_page_size(page_size);
            screens.meter_readings.query.set_page_size(page_size);
            screens.calibrations.query.set_page_size(page_size);
            screens.organizations.query.set_page_size(page_size);
            screens.roles.query.set_page_size(page_size);
            screens.labels.query.set_page_size(page_size);
        }
    }
    state.settings.save();
    Task::none()
}
