//! Price-search HTTP client.
//!
//! Executes fare queries against the provider's `psc_service.go` endpoint.
//! The request is a GET with the JSON query payload URL-encoded into the
//! `data` parameter; the service rejects clients that do not accept JSON.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

use super::error::PscError;
use super::query::{SEARCH_SERVICE_NAME, SearchQuery};
use super::types::FareResponse;

/// Default endpoint for the price-search service.
///
/// Plain HTTP: the original client deliberately avoided TLS because the
/// provider's HTTPS endpoint was much slower.
const DEFAULT_BASE_URL: &str = "http://ps.bahn.de/preissuche/preissuche/psc_service.go";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the price-search client.
#[derive(Debug, Clone)]
pub struct PscConfig {
    /// Endpoint URL (defaults to the production service).
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl PscConfig {
    /// Create a config with the default endpoint and timeout.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom endpoint URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for PscConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// The injectable transport seam: anything that can answer a fare query.
///
/// Implemented by [`PscClient`] for the real service and by
/// [`super::mock::MockPscClient`] for tests.
pub trait FareSearch {
    /// Execute one fare query.
    fn search(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<FareResponse, PscError>> + Send;
}

/// Price-search API client.
#[derive(Debug, Clone)]
pub struct PscClient {
    http: reqwest::Client,
    base_url: String,
}

impl PscClient {
    /// Create a new client with the given configuration.
    pub fn new(config: PscConfig) -> Result<Self, PscError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }
}

impl FareSearch for PscClient {
    /// Execute one fare query:
    /// `GET <base>?lang=en&service=pscangebotsuche&data=<json>`.
    ///
    /// Non-2xx statuses and undecodable bodies are errors; the caller
    /// treats them as fatal for the run.
    async fn search(&self, query: &SearchQuery) -> Result<FareResponse, PscError> {
        let data = serde_json::to_string(query)?;

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("lang", "en"),
                ("service", SEARCH_SERVICE_NAME),
                ("data", data.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PscError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| PscError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}
