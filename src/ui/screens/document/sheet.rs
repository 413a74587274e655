use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    widgets::{Block, Row, Table, Widget},
};

use crate::ui::{document::content::SheetTable, style};

/// Widest a column gets before its cells are cut off.
const MAX_COLUMN_WIDTH: usize = 30;

pub fn render_sheet(table: &SheetTable, first_row: usize, block: Block<'_>, area: Rect, buf: &mut Buffer) {
    let widths: Vec<Constraint> = (0..table.column_count())
        .map(|column| {
            let width = table
                .rows
                .iter()
                .filter_map(|row| row.get(column))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .clamp(1, MAX_COLUMN_WIDTH);
            Constraint::Length(width as u16)
        })
        .collect();

    let rows = table
        .rows
        .iter()
        .enumerate()
        .skip(first_row)
        .map(|(index, cells)| Row::new(cells.iter().map(String::as_str)).style(style::striped_row(index)));

    Table::new(rows, widths)
        .block(block.title(format!(" {} ", table.sheet_name)))
        .column_spacing(2)
        .render(area, buf);
}
