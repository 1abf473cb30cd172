use futures::future::BoxFuture;

use crate::error::Result;
use crate::form::{validator::ValidatedForm, Parameter};
use crate::records::Record;

pub mod client;
pub mod decode;
pub mod request;

pub use client::RecordsClient;
pub use decode::{decode_records, RecordsResponse};
pub use request::{prepare_request, PreparedRequest};

pub type FetchResult<T> = Result<T>;

/// Date range plus the single selected filter.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RecordQuery {
    pub start_date: String,
    pub end_date: String,
    pub parameter: Parameter,
    pub value: String,
}

impl RecordQuery {
    /// Query-string pairs in wire order. The filter key depends on the
    /// selected parameter, so exactly one filter is ever sent.
    pub fn query_pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("start_date", self.start_date.as_str()),
            ("end_date", self.end_date.as_str()),
            (self.parameter.query_key(), self.value.as_str()),
        ]
    }
}

impl From<ValidatedForm> for RecordQuery {
    fn from(form: ValidatedForm) -> Self {
        Self {
            start_date: form.start_date,
            end_date: form.end_date,
            parameter: form.parameter,
            value: form.parameter_value,
        }
    }
}

/// Anything that can resolve a query into an ordered list of records.
///
/// The returned future is `'static` so callers can hand it to `tokio::spawn`.
pub trait RecordSource: Send + Sync {
    fn fetch_records(&self, query: RecordQuery) -> BoxFuture<'static, FetchResult<Vec<Record>>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_three_pairs_with_dynamic_filter_key() {
        let query = RecordQuery {
            start_date: "2024-01-01".into(),
            end_date: "2024-01-31".into(),
            parameter: Parameter::ClusterId,
            value: "c-7".into(),
        };

        assert_eq!(
            query.query_pairs(),
            [
                ("start_date", "2024-01-01"),
                ("end_date", "2024-01-31"),
                ("cluster_id", "c-7"),
            ]
        );
    }

    #[test]
    fn changing_parameter_swaps_key_not_adds() {
        let mut query = RecordQuery {
            start_date: "a".into(),
            end_date: "b".into(),
            parameter: Parameter::Phone,
            value: "v".into(),
        };
        query.parameter = Parameter::Voicemail;

        let keys: Vec<&str> = query.query_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["start_date", "end_date", "voicemail"]);
    }
}
