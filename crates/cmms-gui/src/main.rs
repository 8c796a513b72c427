//! CMMS Console - Desktop GUI Application
//!
//! A desktop console for factory equipment and maintenance records:
//! equipment, work orders, inspections, PM schedules, meter readings,
//! calibrations, organizations, roles and display labels.
//!
//! Built with Iced using the Elm architecture (State, Message, Update, View).

mod app;
mod component;
mod message;
mod record;
mod settings;
mod state;
mod theme;
mod view;

use app::App;
use iced::window;
use iced::Size;

/// Application entry point.
pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting CMMS Console");

    // Run the Iced application using the builder pattern
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: Size::new(1280.0, 800.0),
            min_size: Some(Size::new(1024.0, 600.0)),
            ..Default::default()
        })
        .run()
}
