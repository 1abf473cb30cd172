use reqwest::Url;

use crate::error::Context;

use super::{FetchResult, RecordQuery};

#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub url: Url,
}

/// Resolve the endpoint and append the query pairs, percent-encoded.
pub fn prepare_request(endpoint: &str, query: &RecordQuery) -> FetchResult<PreparedRequest> {
    let url = Url::parse_with_params(endpoint, query.query_pairs())
        .with_context(|| format!("Invalid records endpoint: {}", endpoint))?;

    Ok(PreparedRequest { url })
}
