use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;
use crate::records::CsvQuoting;

pub mod loader;
pub mod validator;

pub use loader::{load_overrides, ConfigOverrides};

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/records/file/";
pub const DEFAULT_MIN_LATENCY_MS: u64 = 2000;
pub const DEFAULT_EXPORT_FILE: &str = "records.csv";
pub const DEFAULT_LOG_FILE: &str = "records-cli.log";
pub const DEFAULT_PAGE_SIZES: [usize; 3] = [5, 10, 20];
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Runtime settings for the form, the fetcher, the grid, and the exporter.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub endpoint: String,
    /// Fixed wait before every request, independent of network speed.
    pub min_latency: Duration,
    pub export_path: PathBuf,
    pub quoting: CsvQuoting,
    pub page_sizes: Vec<usize>,
    pub default_page_size: usize,
    pub log_file: PathBuf,
}

impl Config {
    pub fn builtin() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            min_latency: Duration::from_millis(DEFAULT_MIN_LATENCY_MS),
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
            quoting: CsvQuoting::Raw,
            page_sizes: DEFAULT_PAGE_SIZES.to_vec(),
            default_page_size: DEFAULT_PAGE_SIZE,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }

    /// Layer the optional config file and then the command-line overrides on
    /// top of the builtin defaults, validating the result.
    pub fn resolve(file: Option<&Path>, cli: ConfigOverrides) -> Result<Self> {
        let mut config = Self::builtin();
        if let Some(path) = file {
            load_overrides(path)?.apply(&mut config);
        }
        cli.apply(&mut config);
        validator::validate_config(&config)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::builtin()
    }
}
