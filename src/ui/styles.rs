use std::borrow::Cow;

use ratatui::prelude::Stylize;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};

/// Accent color for the title, headers, and focused widgets.
pub const ACCENT: Color = Color::Indexed(208);

/// Spinner frames cycled while a request is in flight.
pub const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

pub fn header_text<'a>(text: impl Into<Cow<'a, str>>) -> Text<'a> {
    let owned = text.into().into_owned();
    Text::from(owned.bold().fg(ACCENT))
}

/// Dimmed line for hints and the key help footer.
pub fn secondary_line<'a>(text: impl Into<Cow<'a, str>>) -> Line<'a> {
    let owned = text.into().into_owned();
    Line::from(owned.dim())
}

pub fn focus_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Buttons render reversed when focused, plain otherwise.
pub fn button_style(focused: bool, enabled: bool) -> Style {
    match (focused, enabled) {
        (_, false) => Style::default().fg(Color::DarkGray),
        (true, true) => Style::default()
            .fg(ACCENT)
            .add_modifier(Modifier::REVERSED | Modifier::BOLD),
        (false, true) => Style::default().add_modifier(Modifier::BOLD),
    }
}

pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}
