use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Row, Table},
};

/// Bordered table with the shared header row and spacing.
pub fn build_table<'a>(
    rows: Vec<Row<'a>>,
    header: Row<'a>,
    widths: Vec<Constraint>,
    title: impl Into<String>,
) -> Table<'a> {
    Table::new(rows, widths)
        .header(header.bottom_margin(1))
        .block(Block::default().borders(Borders::ALL).title(title.into()))
        .column_spacing(2)
}

/// Width for a column: the wider of its header and its widest cell, plus padding.
pub fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> u16 {
    use unicode_width::UnicodeWidthStr;

    let data_width = cells.map(UnicodeWidthStr::width).max().unwrap_or(0);
    let width = UnicodeWidthStr::width(header).max(data_width) + 2;
    u16::try_from(width).unwrap_or(u16::MAX)
}
