//! Dashboard view: status summaries computed from the repositories.

use chrono::Local;
use cmms_model::{EquipmentStatus, Priority, RecordKind};
use iced::widget::{button, column, container, row, text};
use iced::{Element, Length, Theme};

use crate::message::Message;
use crate::state::{AppState, View};
use crate::theme::{button_ghost, container_card, ConsoleColors, SPACING_MD, SPACING_SM, SPACING_XS};

pub fn view_dashboard(state: &AppState) -> Element<'static, Message> {
    let today = Local::now().date_naive();

    let equipment_cards: Vec<Element<'static, Message>> = EquipmentStatus::all()
        .iter()
        .map(|status| {
            let count = state
                .data
                .equipment
                .records()
                .iter()
                .filter(|e| e.status == *status)
                .count();
            stat_card(count, status.label().to_string())
        })
        .collect();

    let order_cards: Vec<Element<'static, Message>> = Priority::all()
        .iter()
        .map(|priority| {
            let count = state
                .data
                .work_orders
                .records()
                .iter()
                .filter(|order| order.is_open() && order.priority == *priority)
                .count();
            stat_card(count, format!("Open / {}", priority.label()))
        })
        .collect();

    let overdue_orders = state
        .data
        .work_orders
        .records()
        .iter()
        .filter(|order| order.overdue(today))
        .count();
    let overdue_calibrations = state
        .data
        .calibrations
        .records()
        .iter()
        .filter(|calibration| calibration.overdue(today))
        .count();
    let pm_due = state
        .data
        .pm_schedules
        .records()
        .iter()
        .filter(|schedule| schedule.due_within(today, 30))
        .count();
    let attention_cards = vec![
        stat_card(overdue_orders, "Overdue work orders".to_string()),
        stat_card(overdue_calibrations, "Overdue calibrations".to_string()),
        stat_card(pm_due, "PM due in 30 days".to_string()),
    ];

    column![
        section(
            state
                .labels
                .resolve(RecordKind::Equipment.label_key(), "Equipment")
                .to_string(),
            RecordKind::Equipment,
            equipment_cards,
        ),
        section(
            state
                .labels
                .resolve(RecordKind::WorkOrders.label_key(), "Work Orders")
                .to_string(),
            RecordKind::WorkOrders,
            order_cards,
        ),
        section("Attention".to_string(), RecordKind::Calibrations, attention_cards),
    ]
    .spacing(SPACING_MD)
    .into()
}

fn section(
    title: String,
    kind: RecordKind,
    cards: Vec<Element<'static, Message>>,
) -> Element<'static, Message> {
    let heading = row![
        text(title)
            .size(16)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.base.text),
            }),
        button(text("Open").size(12))
            .on_press(Message::Navigate(View::Manage(kind)))
            .padding([4.0, 10.0])
            .style(button_ghost),
    ]
    .spacing(SPACING_SM)
    .align_y(iced::Alignment::Center);

    let mut card_row = row![].spacing(SPACING_SM);
    for card in cards {
        card_row = card_row.push(card);
    }

    column![heading, card_row].spacing(SPACING_SM).into()
}

fn stat_card(count: usize, label: String) -> Element<'static, Message> {
    container(
        column![
            text(format!("{count}"))
                .size(28)
                .style(move |theme: &Theme| text::Style {
                    color: Some(if count > 0 {
                        theme.extended_palette().background.base.text
                    } else {
                        theme.console().text_disabled
                    }),
                }),
            text(label).size(12).style(|theme: &Theme| text::Style {
                color: Some(theme.console().text_muted),
            }),
        ]
        .spacing(SPACING_XS),
    )
    .width(Length::Fixed(170.0))
    .padding(SPACING_MD)
    .style(container_card)
    .into()
}
