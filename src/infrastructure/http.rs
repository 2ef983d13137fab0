//! Remote quote sources over HTTP

use crate::domain::remote::{records_from_values, RemoteRecord};
use crate::error::FetchError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Per-request timeout for remote sources
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can produce a batch of remote records
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Label used in logs and reports
    fn endpoint(&self) -> &str;

    /// Fetch one batch of records
    async fn fetch(&self) -> Result<Vec<RemoteRecord>, FetchError>;
}

/// GET a JSON array of records from a fixed URL
#[derive(Debug, Clone)]
pub struct HttpQuoteSource {
    client: reqwest::Client,
    url: String,
}

impl HttpQuoteSource {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        HttpQuoteSource {
            client,
            url: url.into(),
        }
    }

    /// One source per URL, sharing a single client
    pub fn from_endpoints(endpoints: &[String]) -> Result<Vec<Self>, FetchError> {
        let client = build_client().map_err(|e| FetchError::Request {
            endpoint: endpoints.join(", "),
            message: e.to_string(),
        })?;
        Ok(endpoints
            .iter()
            .map(|url| HttpQuoteSource::new(client.clone(), url.clone()))
            .collect())
    }
}

/// Client with the timeout and user agent used for every sync request
pub fn build_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("quotegen/", env!("CARGO_PKG_VERSION")))
        .build()
}

#[async_trait]
impl QuoteSource for HttpQuoteSource {
    fn endpoint(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<Vec<RemoteRecord>, FetchError> {
        debug!(endpoint = %self.url, "fetching remote records");

        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Request {
                endpoint: self.url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let values = response
            .json::<Vec<serde_json::Value>>()
            .await
            .map_err(|e| FetchError::Decode {
                endpoint: self.url.clone(),
                message: e.to_string(),
            })?;
        let records = records_from_values(&values);

        debug!(endpoint = %self.url, count = records.len(), "fetched remote records");
        Ok(records)
    }
}
