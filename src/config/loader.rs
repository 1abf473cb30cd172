use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;

use crate::error::{Context, Result};
use crate::records::CsvQuoting;

use super::Config;

/// Partial configuration. Every key is optional; present keys replace the
/// value underneath. Used for both the JSON config file and CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub delay_ms: Option<u64>,
    #[serde(default)]
    pub export_path: Option<PathBuf>,
    #[serde(default)]
    pub quoting: Option<CsvQuoting>,
    #[serde(default)]
    pub page_sizes: Option<Vec<usize>>,
    #[serde(default)]
    pub default_page_size: Option<usize>,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl ConfigOverrides {
    pub fn apply(self, config: &mut Config) {
        if let Some(endpoint) = self.endpoint {
            config.endpoint = endpoint;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.min_latency = Duration::from_millis(delay_ms);
        }
        if let Some(path) = self.export_path {
            config.export_path = path;
        }
        if let Some(quoting) = self.quoting {
            config.quoting = quoting;
        }
        if let Some(page_sizes) = self.page_sizes {
            config.page_sizes = page_sizes;
        }
        if let Some(size) = self.default_page_size {
            config.default_page_size = size;
        }
        if let Some(path) = self.log_file {
            config.log_file = path;
        }
    }
}

/// Read a JSON config file into overrides.
pub fn load_overrides(path: &Path) -> Result<ConfigOverrides> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read config JSON at {}", path.display()))?;

    let overrides: ConfigOverrides = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse config JSON at {}", path.display()))?;

    Ok(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_file() {
        let overrides: ConfigOverrides =
            serde_json::from_str(r#"{ "quoting": "quoted", "page_sizes": [25, 50] }"#).unwrap();

        assert_eq!(overrides.quoting, Some(CsvQuoting::Quoted));
        assert_eq!(overrides.page_sizes, Some(vec![25, 50]));
        assert!(overrides.endpoint.is_none());
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = serde_json::from_str::<ConfigOverrides>(r#"{ "endpiont": "x" }"#).unwrap_err();
        assert!(err.to_string().contains("unknown field"));
    }

    #[test]
    fn applying_empty_overrides_is_a_no_op() {
        let mut config = Config::builtin();
        ConfigOverrides::default().apply(&mut config);
        assert_eq!(config, Config::builtin());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_overrides(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
