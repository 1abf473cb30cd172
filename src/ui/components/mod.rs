pub mod table;
pub mod terminal;
pub mod utils;

pub use table::{build_table, column_width};
pub use terminal::TerminalGuard;
