pub mod app;
pub mod config;
pub mod error;
pub mod fetch;
pub mod form;
pub mod logging;
pub mod records;
pub mod ui;
pub mod utils;

pub use error::{AppError, Result};
