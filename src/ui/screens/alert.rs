use ratatui::{prelude::*, widgets::*};

use crate::ui::components::utils::centered_rect;
use crate::ui::styles::{header_text, secondary_line};

/// Modal that blocks the form until dismissed.
pub fn render_alert(f: &mut Frame<'_>, message: &str) {
    let area = centered_rect(50, 6, f.size());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title("Alert");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut text = header_text(message.to_string());
    text.lines.push(Line::default());
    text.lines.push(secondary_line("Enter or Esc to dismiss"));
    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}
