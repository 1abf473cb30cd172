use std::time::Duration;

use futures::future::BoxFuture;
use log::debug;
use reqwest::Client;
use tokio::time::sleep;

use crate::config::Config;
use crate::error::AppError;
use crate::records::Record;

use super::{decode_records, prepare_request, FetchResult, RecordQuery, RecordSource};

/// HTTP fetcher for the records endpoint.
///
/// Every call first waits `min_latency`, then issues exactly one GET. There is
/// no retry and no timeout beyond reqwest's defaults.
#[derive(Debug, Clone)]
pub struct RecordsClient {
    client: Client,
    endpoint: String,
    min_latency: Duration,
}

impl RecordsClient {
    pub fn new(endpoint: impl Into<String>, min_latency: Duration) -> Self {
        Self::with_client(Client::new(), endpoint, min_latency)
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>, min_latency: Duration) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            min_latency,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.endpoint.clone(), config.min_latency)
    }

    pub async fn fetch(&self, query: &RecordQuery) -> FetchResult<Vec<Record>> {
        if !self.min_latency.is_zero() {
            sleep(self.min_latency).await;
        }

        let prepared = prepare_request(&self.endpoint, query)?;
        debug!("GET {}", prepared.url);

        let response = self.client.get(prepared.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::fetch(format!(
                "records request returned status {}",
                status
            )));
        }

        let body = response.bytes().await?;
        decode_records(&body)
    }
}

impl RecordSource for RecordsClient {
    fn fetch_records(&self, query: RecordQuery) -> BoxFuture<'static, FetchResult<Vec<Record>>> {
        let this = self.clone();
        Box::pin(async move { this.fetch(&query).await })
    }
}
