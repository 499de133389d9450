//! Mock price-search client for testing without network access.
//!
//! Serves canned [`FareResponse`]s keyed by (origin, destination, travel
//! date), mimicking the real client's interface.

use std::collections::HashMap;

use super::client::FareSearch;
use super::error::PscError;
use super::query::SearchQuery;
use super::types::FareResponse;

/// Mock client serving pre-registered responses.
#[derive(Debug, Clone, Default)]
pub struct MockPscClient {
    responses: HashMap<(u32, u32, String), FareResponse>,
}

impl MockPscClient {
    /// Create an empty mock client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a response for a station pair and travel date (`DD.MM.YY`).
    pub fn insert(
        &mut self,
        origin: u32,
        destination: u32,
        date: impl Into<String>,
        response: FareResponse,
    ) {
        self.responses
            .insert((origin, destination, date.into()), response);
    }
}

impl FareSearch for MockPscClient {
    /// Look up the canned response for the query's pair and date.
    ///
    /// Unregistered queries produce a 404-style [`PscError::Api`], which
    /// exercises the collector's fatal-error path.
    async fn search(&self, query: &SearchQuery) -> Result<FareResponse, PscError> {
        let key = (query.origin, query.destination, query.date.clone());
        self.responses
            .get(&key)
            .cloned()
            .ok_or_else(|| PscError::Api {
                status: 404,
                message: format!(
                    "no canned response for {} -> {} on {}",
                    query.origin, query.destination, query.date
                ),
            })
    }
}
