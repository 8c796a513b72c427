//! Terminal table rendering on top of the shared column descriptors.
//!
//! The CLI prints exactly what the desktop table would show: same columns,
//! same filter semantics, same page window.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cmms_core::{BadgeTone, CellAlign, CellValue, Column, TableView};

/// Build a terminal table for one page of rows.
pub fn render_table<T>(columns: &[Column<T>], view: &TableView<'_, T>) -> Table {
    let mut table = Table::new();
    table.set_header(
        columns
            .iter()
            .map(|column| header_cell(&column.title))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for (index, column) in columns.iter().enumerate() {
        align_column(&mut table, index, alignment(column.align));
    }
    for row in &view.rows {
        table.add_row(
            columns
                .iter()
                .map(|column| value_cell(&column.value(row)))
                .collect::<Vec<_>>(),
        );
    }
    table
}

/// "Page 1 of 3 (61 records)" footer under a listing.
pub fn page_info<T>(view: &TableView<'_, T>) -> String {
    format!(
        "Page {} of {} ({} records)",
        view.page, view.page_count, view.total
    )
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn alignment(align: CellAlign) -> CellAlignment {
    match align {
        CellAlign::Start => CellAlignment::Left,
        CellAlign::Center => CellAlignment::Center,
        CellAlign::End => CellAlignment::Right,
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: &CellValue) -> Cell {
    match value {
        CellValue::Badge { label, tone } => Cell::new(label).fg(tone_color(*tone)),
        CellValue::Missing => dim_cell("-"),
        other => Cell::new(other.display()),
    }
}

fn tone_color(tone: BadgeTone) -> Color {
    match tone {
        BadgeTone::Neutral => Color::DarkGrey,
        BadgeTone::Info => Color::Blue,
        BadgeTone::Success => Color::Green,
        BadgeTone::Warning => Color::Yellow,
        BadgeTone::Danger => Color::Red,
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

/// Two-column count table used by the summary command.
pub fn count_table(title: &str, rows: &[(String, usize)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(title), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, count) in rows {
        let count_cell = if *count > 0 {
            Cell::new(count).add_attribute(Attribute::Bold)
        } else {
            dim_cell(count)
        };
        table.add_row(vec![Cell::new(label), count_cell]);
    }
    table
}
