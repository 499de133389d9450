//! The sequential collection loop.

use std::io::Write;

use rand::Rng;
use tracing::{debug, info};

use crate::domain::UnknownStation;
use crate::psc::{FareSearch, PscError, SearchQuery, flatten_response};

use super::clock::Clock;
use super::config::CollectorConfig;
use super::pacing::{Pacer, jittered};

/// Errors that abort a collection run.
#[derive(Debug, thiserror::Error)]
pub enum CollectorError {
    /// Fare search failed (transport, status, or decode)
    #[error("fare search failed: {0}")]
    Search(#[from] PscError),

    /// Writing a record failed
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// A configured station name is not in the table
    #[error(transparent)]
    Station(#[from] UnknownStation),
}

/// Batch fare collector.
///
/// Strictly sequential: one outstanding request at a time, all day offsets
/// of one pair completing before the next pair begins. Output order is
/// therefore deterministic given a deterministic transport.
pub struct Collector<S> {
    source: S,
    config: CollectorConfig,
}

impl<S: FareSearch> Collector<S> {
    /// Create a collector over the given transport and configuration.
    pub fn new(source: S, config: CollectorConfig) -> Self {
        Self { source, config }
    }

    /// Run the full scan, writing one newline-terminated CSV row per
    /// record to `out`. Returns the number of records written.
    ///
    /// Transport and decode failures abort the whole run; record-level
    /// defects (missing itinerary, unparsable price) are logged inside the
    /// flattener and never reach this level.
    pub async fn run<W, C, P, R>(
        &self,
        out: &mut W,
        clock: &C,
        pacer: &P,
        rng: &mut R,
    ) -> Result<u64, CollectorError>
    where
        W: Write,
        C: Clock,
        P: Pacer,
        R: Rng,
    {
        let mut written = 0u64;

        for (origin_name, destination_name) in &self.config.pairs {
            let origin = self.config.stations.resolve(origin_name)?;
            let destination = self.config.stations.resolve(destination_name)?;

            let delay = jittered(
                self.config.inter_pair_delay_min,
                self.config.inter_pair_delay_max,
                rng,
            );
            info!(
                origin = origin_name.as_str(),
                destination = destination_name.as_str(),
                delay_secs = delay.as_secs(),
                "starting pair"
            );
            pacer.pause(delay).await;

            for offset in 0..self.config.days {
                pacer.pause(self.config.inter_request_delay).await;

                let when = self.config.start + chrono::Duration::days(i64::from(offset));
                let query = SearchQuery::new(origin, destination, when);
                debug!(%origin, %destination, date = query.date.as_str(), "querying");

                let response = self.source.search(&query).await?;
                let records = flatten_response(origin, destination, &response, clock.now_epoch());
                debug!(records = records.len(), "flattened response");

                for record in &records {
                    writeln!(out, "{}", record.csv_line())?;
                }
                written += records.len() as u64;
            }
        }

        Ok(written)
    }
}
