use chrono::{DateTime, Local, TimeZone};

/// Minute-resolution local time for status lines.
pub fn current_human_timestamp() -> String {
    format_human(&Local::now())
}

fn format_human<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%Y-%m-%d %H:%M").to_string()
}
