use ratatui::{prelude::*, widgets::*};

use crate::app::state::{AppState, Focus};
use crate::records::{Column, GridView, Record};
use crate::ui::components::{build_table, column_width, utils::split_vertical};
use crate::ui::styles::{button_style, focus_style, secondary_line, ACCENT};

/// Grid over the loaded rows plus the pagination footer and export button.
pub fn render_records_table(f: &mut Frame<'_>, area: Rect, state: &AppState) {
    let chunks = split_vertical(
        area,
        &[
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(1),
        ],
    );

    let rows = state.rows();
    let grid = state.grid();
    let table_focused = state.focus() == Focus::Table;

    let visible = grid.visible(rows);
    let table = build_table(
        visible.iter().map(|record| body_row(record)).collect(),
        header_row(grid, table_focused),
        column_widths(rows),
        format!("Records ({} rows)", rows.len()),
    );
    f.render_widget(table, chunks[0]);

    f.render_widget(Paragraph::new(pagination_line(grid, rows.len())), chunks[1]);

    let export = Line::from(vec![Span::styled(
        " Download CSV ",
        button_style(state.focus() == Focus::Export, state.can_export()),
    )]);
    f.render_widget(Paragraph::new(export), chunks[2]);
}

fn header_row(grid: &GridView, table_focused: bool) -> Row<'static> {
    let sort = grid.sort();
    let cells: Vec<Cell> = Column::ALL
        .iter()
        .map(|column| {
            let mut label = column.header().to_string();
            let mut style = Style::default().fg(ACCENT);
            if let Some(state) = sort.filter(|s| s.column == *column) {
                label.push(' ');
                label.push_str(state.direction.icon());
                style = style.add_modifier(Modifier::BOLD);
            }
            if table_focused && grid.cursor() == *column {
                style = focus_style().add_modifier(Modifier::UNDERLINED);
            }
            Cell::from(label).style(style)
        })
        .collect();
    Row::new(cells)
}

fn body_row(record: &Record) -> Row<'static> {
    Row::new(
        Column::ALL
            .iter()
            .map(|column| Cell::from(column.value(record).to_string()))
            .collect::<Vec<_>>(),
    )
}

/// Sized over every loaded row so widths stay put while paging.
fn column_widths(rows: &[Record]) -> Vec<Constraint> {
    Column::ALL
        .iter()
        .map(|column| {
            // room for the sort arrow
            let header = format!("{} ↓", column.header());
            Constraint::Length(column_width(
                &header,
                rows.iter().map(|record| column.value(record)),
            ))
        })
        .collect()
}

fn pagination_line(grid: &GridView, total: usize) -> Line<'static> {
    let (first, last) = grid.visible_range(total);
    let sizes = grid
        .page_sizes()
        .iter()
        .map(|size| {
            if *size == grid.page_size() {
                format!("[{size}]")
            } else {
                size.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    secondary_line(format!(
        "{first}-{last} of {total} • page {}/{} • rows per page: {sizes}",
        grid.page().min(grid.page_count(total) - 1) + 1,
        grid.page_count(total)
    ))
}
