pub mod alert;
pub mod form;
pub mod records_table;

use ratatui::{prelude::*, widgets::*};

use crate::app::state::{AppState, Focus};
use crate::ui::components::utils::split_vertical;
use crate::ui::styles::secondary_line;

pub use alert::render_alert;
pub use form::render_form;
pub use records_table::render_records_table;

/// Draw one full frame: form, optional table, key help, optional alert.
pub fn render_app(f: &mut Frame<'_>, state: &AppState, tick: usize) {
    let chunks = split_vertical(
        f.size(),
        &[
            Constraint::Length(form::FORM_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ],
    );

    render_form(f, chunks[0], state, tick);

    if !state.rows().is_empty() {
        render_records_table(f, chunks[1], state);
    }

    f.render_widget(Paragraph::new(help_line(state.focus())), chunks[2]);

    if let Some(message) = state.alert() {
        render_alert(f, message);
    }
}

fn help_line(focus: Focus) -> Line<'static> {
    let keys = match focus {
        Focus::Field(crate::form::FormField::Parameter) => {
            "←/→ choose • Tab/↑/↓ move • Enter submit • Esc quit"
        }
        Focus::Field(_) => "type to edit • Tab/↑/↓ move • Enter submit • Esc quit",
        Focus::Submit => "Enter submit • Tab/↑/↓ move • Esc quit",
        Focus::Table => {
            "←/→ column • s sort • n/p page • Home/End • z rows per page • e export • Tab move"
        }
        Focus::Export => "Enter download CSV • Tab/↑/↓ move • Esc quit",
    };
    secondary_line(keys)
}
