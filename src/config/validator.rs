use reqwest::Url;

use crate::error::{AppError, Result};

use super::Config;

/// Validate a resolved configuration and surface every problem at once.
pub fn validate_config(config: &Config) -> Result<()> {
    let mut issues = Vec::new();

    validate_endpoint(&config.endpoint, &mut issues);
    validate_page_sizes(config, &mut issues);
    validate_paths(config, &mut issues);

    if issues.is_empty() {
        Ok(())
    } else {
        Err(AppError::message(format!(
            "config invalid:\n  - {}",
            issues.join("\n  - ")
        )))
    }
}

fn validate_endpoint(endpoint: &str, issues: &mut Vec<String>) {
    match Url::parse(endpoint) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => issues.push(format!(
            "endpoint `{endpoint}` must use http or https, found `{}`",
            url.scheme()
        )),
        Err(err) => issues.push(format!("endpoint `{endpoint}` is not a valid URL: {err}")),
    }
}

fn validate_page_sizes(config: &Config, issues: &mut Vec<String>) {
    if config.page_sizes.is_empty() {
        issues.push("page_sizes must list at least one option".to_string());
        return;
    }

    if config.page_sizes.contains(&0) {
        issues.push("page_sizes must all be greater than zero".to_string());
    }

    if !config.page_sizes.contains(&config.default_page_size) {
        issues.push(format!(
            "default_page_size {} is not one of page_sizes {:?}",
            config.default_page_size, config.page_sizes
        ));
    }
}

fn validate_paths(config: &Config, issues: &mut Vec<String>) {
    if config.export_path.as_os_str().is_empty() {
        issues.push("export_path must not be empty".to_string());
    }
    if config.log_file.as_os_str().is_empty() {
        issues.push("log_file must not be empty".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn accepts_builtin() {
        validate_config(&Config::builtin()).expect("builtin should be valid");
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let mut config = Config::builtin();
        config.endpoint = "ftp://127.0.0.1/records/".into();

        let message = validate_config(&config).unwrap_err().to_string();
        assert!(message.contains("http or https"), "unexpected: {message}");
    }

    #[test]
    fn aggregates_every_issue() {
        let mut config = Config::builtin();
        config.page_sizes = vec![0, 10];
        config.default_page_size = 5;
        config.export_path = PathBuf::new();

        let message = validate_config(&config).unwrap_err().to_string();
        assert!(message.contains("greater than zero"), "unexpected: {message}");
        assert!(message.contains("default_page_size 5"), "unexpected: {message}");
        assert!(message.contains("export_path"), "unexpected: {message}");
    }

    #[test]
    fn rejects_empty_page_sizes() {
        let mut config = Config::builtin();
        config.page_sizes.clear();

        let message = validate_config(&config).unwrap_err().to_string();
        assert!(message.contains("at least one option"), "unexpected: {message}");
    }
}
