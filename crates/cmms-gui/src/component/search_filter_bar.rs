//! Search input plus one pick list per filterable column.

use std::fmt;

use cmms_core::FilterOption;
use cmms_model::RecordKind;
use iced::widget::{pick_list, row, text_input};
use iced::{Element, Length};

use crate::message::{Message, ScreenMessage};
use crate::theme::{text_input_default, SPACING_SM};

/// One filterable column as shown in the bar.
pub struct FilterSpec {
    pub key: String,
    pub options: Vec<FilterOption>,
    pub selected: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum FilterChoice {
    All,
    Is(FilterOption),
}

impl fmt::Display for FilterChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Is(option) => f.write_str(&option.label),
        }
    }
}

/// Search field and filter pick lists for one management screen.
pub fn search_filter_bar(
    kind: RecordKind,
    search: &str,
    filters: Vec<FilterSpec>,
) -> Element<'static, Message> {
    let search_input = text_input("Search...", search)
        .on_input(move |value| Message::Screen(kind, ScreenMessage::SearchChanged(value)))
        .padding([8.0, 12.0])
        .size(13)
        .width(Length::Fill)
        .style(text_input_default);

    let mut bar = row![search_input].spacing(SPACING_SM);

    for filter in filters {
        let mut choices = vec![FilterChoice::All];
        choices.extend(filter.options.iter().cloned().map(FilterChoice::Is));

        let selected = match &filter.selected {
            Some(value) => filter
                .options
                .iter()
                .find(|option| &option.value == value)
                .cloned()
                .map(FilterChoice::Is),
            None => Some(FilterChoice::All),
        };

        let key = filter.key.clone();
        let picker = pick_list(choices, selected, move |choice| {
            let value = match choice {
                FilterChoice::All => None,
                FilterChoice::Is(option) => Some(option.value),
            };
            Message::Screen(kind, ScreenMessage::FilterChanged(key.clone(), value))
        })
        .text_size(12)
        .padding([6.0, 10.0]);

        bar = bar.push(picker);
    }

    bar.align_y(iced::Alignment::Center).into()
}
