use std::path::PathBuf;

use log::{error, info};

use crate::config::Config;
use crate::error::Result;
use crate::fetch::{RecordQuery, RecordSource};
use crate::form::{validate, FormState, Parameter};
use crate::records::export_to_file;

/// Field values for one scripted export.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ExportArgs {
    pub start_date: String,
    pub end_date: String,
    pub parameter: Parameter,
    pub value: String,
}

impl From<ExportArgs> for FormState {
    fn from(args: ExportArgs) -> Self {
        FormState {
            start_date: args.start_date,
            end_date: args.end_date,
            parameter: Some(args.parameter),
            parameter_value: args.value,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows: usize,
}

/// Validate, fetch once, and write the CSV. Nothing is requested when a
/// field is empty and nothing is written when the fetch fails.
pub async fn run_export(
    config: &Config,
    source: &dyn RecordSource,
    args: ExportArgs,
) -> Result<ExportSummary> {
    let form = FormState::from(args);
    let validated = validate(&form)?;
    let query = RecordQuery::from(validated);
    info!(
        "Exporting records {}..{} filtered by {}",
        query.start_date, query.end_date, query.parameter
    );

    let rows = source.fetch_records(query).await.map_err(|err| {
        error!("Fetch failed: {err}");
        err
    })?;

    export_to_file(&rows, config.quoting, &config.export_path)?;
    Ok(ExportSummary {
        path: config.export_path.clone(),
        rows: rows.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::fetch::FetchResult;
    use crate::form::FormField;
    use crate::records::{CsvQuoting, Devices, Record};
    use futures::future::BoxFuture;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::tempdir;

    struct StubSource {
        calls: AtomicUsize,
        rows: Option<Vec<Record>>,
    }

    impl StubSource {
        fn returning(rows: Vec<Record>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                rows: Some(rows),
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                rows: None,
            }
        }
    }

    impl RecordSource for StubSource {
        fn fetch_records(
            &self,
            _query: RecordQuery,
        ) -> BoxFuture<'static, FetchResult<Vec<Record>>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let rows = self.rows.clone();
            Box::pin(async move { rows.ok_or_else(|| AppError::fetch("connection refused")) })
        }
    }

    fn args() -> ExportArgs {
        ExportArgs {
            start_date: "2024-01-01".into(),
            end_date: "2024-01-31".into(),
            parameter: Parameter::Voicemail,
            value: "5559999".into(),
        }
    }

    fn config_in(dir: &std::path::Path) -> Config {
        Config {
            export_path: dir.join("records.csv"),
            ..Config::builtin()
        }
    }

    fn record(id: &str, phone: &str) -> Record {
        Record {
            id: id.into(),
            origination_time: "2024-01-05T08:00:00Z".into(),
            cluster_id: "c1".into(),
            user_id: "u1".into(),
            devices: Devices {
                phone: phone.into(),
                voicemail: "5559999".into(),
            },
        }
    }

    #[tokio::test]
    async fn writes_fetched_rows_to_configured_path() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let source = StubSource::returning(vec![record("a", "111"), record("b", "222")]);

        let summary = run_export(&config, &source, args()).await.unwrap();

        assert_eq!(summary.rows, 2);
        assert_eq!(summary.path, config.export_path);
        assert_eq!(
            std::fs::read_to_string(&config.export_path).unwrap(),
            "_id,originationTime,clusterId,userId,phone,voicemail\n\
             a,2024-01-05T08:00:00Z,c1,u1,111,5559999\n\
             b,2024-01-05T08:00:00Z,c1,u1,222,5559999"
        );
    }

    #[tokio::test]
    async fn empty_value_is_rejected_before_fetching() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let source = StubSource::returning(vec![record("a", "111")]);

        let err = run_export(
            &config,
            &source,
            ExportArgs {
                value: String::new(),
                ..args()
            },
        )
        .await
        .unwrap_err();

        match err {
            AppError::Validation(err) => assert_eq!(err.field, FormField::ParameterValue),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
        assert!(!config.export_path.exists());
    }

    #[tokio::test]
    async fn fetch_failure_leaves_no_file() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let source = StubSource::failing();

        let err = run_export(&config, &source, args()).await.unwrap_err();

        assert!(matches!(err, AppError::Fetch(_)));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert!(!config.export_path.exists());
    }

    #[tokio::test]
    async fn quoted_mode_escapes_embedded_commas() {
        let dir = tempdir().unwrap();
        let config = Config {
            quoting: CsvQuoting::Quoted,
            ..config_in(dir.path())
        };
        let source = StubSource::returning(vec![record("a", "555,123")]);

        run_export(&config, &source, args()).await.unwrap();

        let written = std::fs::read_to_string(&config.export_path).unwrap();
        assert!(written.ends_with("a,2024-01-05T08:00:00Z,c1,u1,\"555,123\",5559999"));
    }
}
