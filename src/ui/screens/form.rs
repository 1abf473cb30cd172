use ratatui::{prelude::*, widgets::*};

use crate::app::state::{AppState, Focus, Status};
use crate::form::FormField;
use crate::ui::styles::{button_style, focus_style, secondary_line, spinner_frame};

/// Rows needed by the form block, borders included.
pub const FORM_HEIGHT: u16 = FormField::ALL.len() as u16 + 4;

pub fn render_form(f: &mut Frame<'_>, area: Rect, state: &AppState, tick: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Data Retrieval Form");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = FormField::ALL
        .iter()
        .map(|field| field_line(state, *field))
        .collect();
    lines.push(Line::default());
    lines.push(submit_line(state, tick));

    f.render_widget(Paragraph::new(lines), inner);
}

fn field_line(state: &AppState, field: FormField) -> Line<'static> {
    let focused = state.focus() == Focus::Field(field);
    let label_style = if focused {
        focus_style()
    } else {
        Style::default()
    };

    let value = state.form.display_value(field);
    let mut spans = vec![
        Span::styled(format!("{:<26}", field.label()), label_style),
        Span::raw("* "),
    ];

    if field == FormField::Parameter {
        let shown = if value.is_empty() {
            "‹ select ›".to_string()
        } else {
            format!("‹ {value} ›")
        };
        let style = if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        spans.push(Span::styled(shown, style));
    } else {
        spans.push(Span::raw(value));
        if focused {
            spans.push(Span::styled("▏", focus_style()));
        }
    }

    Line::from(spans)
}

fn submit_line(state: &AppState, tick: usize) -> Line<'static> {
    let mut spans = vec![Span::styled(
        " Submit ",
        button_style(state.focus() == Focus::Submit, true),
    )];

    match (state.status(), state.status_message()) {
        (Status::Loading, _) => {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("{} Loading…", spinner_frame(tick)),
                focus_style(),
            ));
        }
        // fetch failures only reach the log
        (_, Some(message)) => {
            spans.push(Span::raw("  "));
            spans.extend(secondary_line(message.to_string()).spans);
        }
        (_, None) => {}
    }

    Line::from(spans)
}
