//! View composition.

pub mod dashboard;
pub mod management;
pub mod settings;

use iced::widget::{container, row};
use iced::{Element, Length};

use cmms_model::RecordKind;

use crate::component::{sidebar, SidebarItem};
use crate::message::Message;
use crate::record::FormRefs;
use crate::state::{AppState, View};
use crate::theme::SPACING_LG;

/// Root view: sidebar navigation plus the active screen.
pub fn view_root(state: &AppState) -> Element<'_, Message> {
    let labels = &state.labels;

    let mut items = vec![SidebarItem::new(
        labels.resolve("nav.dashboard", "Dashboard"),
        Message::Navigate(View::Dashboard),
    )];
    for kind in RecordKind::all() {
        items.push(SidebarItem::new(
            labels.resolve(kind.label_key(), kind.label()),
            Message::Navigate(View::Manage(*kind)),
        ));
    }
    items.push(SidebarItem::new(
        labels.resolve("nav.settings", "Settings"),
        Message::Navigate(View::Settings),
    ));

    let nav = sidebar(items, state.view.sidebar_index());

    let content: Element<'_, Message> = match state.view {
        View::Dashboard => dashboard::view_dashboard(state),
        View::Manage(kind) => manage_view(state, kind),
        View::Settings => settings::view_settings(state),
    };

    row![
        nav,
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(SPACING_LG),
    ]
    .into()
}

fn manage_view(state: &AppState, kind: RecordKind) -> Element<'static, Message> {
    let refs = FormRefs::from_dataset(&state.data);
    match kind {
        RecordKind::Equipment => management::view_management(
            &state.screens.equipment,
            &state.data.equipment,
            &state.access,
            &state.labels,
            &refs,
        ),
        RecordKind::WorkOrders => management::view_management(
            &state.screens.work_orders,
            &state.data.work_orders,
            &state.access,
            &state.labels,
            &refs,
        ),
        RecordKind::Inspections => management::view_management(
            &state.screens.inspections,
            &state.data.inspections,
            &state.access,
            &state.labels,
            &refs,
        ),
        RecordKind::PmSchedules => management::view_management(
            &state.screens.pm_schedules,
            &state.data.pm_schedules,
            &state.access,
            &state.labels,
            &refs,
        ),
        RecordKind::Meters => management::view_management(
            &state.screens.meter_readings,
            &state.data.meter_readings,
            &state.access,
            &state.labels,
            &refs,
        ),
        RecordKind::Calibrations => management::view_management(
            &state.screens.calibrations,
            &state.data.calibrations,
            &state.access,
            &state.labels,
            &refs,
        ),
        RecordKind::Organizations => management::view_management(
            &state.screens.organizations,
            &state.data.organizations,
            &state.access,
            &state.labels,
            &refs,
        ),
        RecordKind::Roles => management::view_management(
            &state.screens.roles,
            &state.data.roles,
            &state.access,
            &state.labels,
            &refs,
        ),
        RecordKind::Labels => management::view_management(
            &state.screens.labels,
            &state.data.labels,
            &state.access,
            &state.labels,
            &refs,
        ),
    }
}
