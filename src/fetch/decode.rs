use serde::Deserialize;

use crate::error::Context;
use crate::records::Record;

use super::FetchResult;

/// Envelope returned by the records endpoint.
#[derive(Debug, Deserialize)]
pub struct RecordsResponse {
    pub results: Vec<Record>,
}

/// Parse a response body, keeping the server's row order.
pub fn decode_records(body: &[u8]) -> FetchResult<Vec<Record>> {
    let response: RecordsResponse =
        serde_json::from_slice(body).context("Failed to parse records response")?;
    Ok(response.results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_results_in_received_order() {
        let body = br#"{
            "count": 2,
            "results": [
                {"_id":"b","originationTime":"t2","clusterId":"c","userId":"u","devices":{"phone":"p","voicemail":"v"}},
                {"_id":"a","originationTime":"t1","clusterId":"c","userId":"u","devices":{"phone":"p","voicemail":"v"}}
            ]
        }"#;

        let records = decode_records(body).unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn empty_results_are_valid() {
        assert!(decode_records(br#"{"results": []}"#).unwrap().is_empty());
    }

    #[test]
    fn missing_results_field_is_an_error() {
        let err = decode_records(br#"[{"_id":"1"}]"#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse records response"));
    }
}
