//! Collector run configuration.

use std::time::Duration;

use chrono::NaiveDateTime;

use crate::domain::{StationTable, UnknownStation};

/// Configuration for one collection run.
///
/// Everything the original script hard-coded is a parameter here: the
/// station table, the pairs to scan, the starting instant, the day-offset
/// horizon, and the delay policy.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Station name → id lookup table.
    pub stations: StationTable,

    /// Ordered (origin, destination) station name pairs to scan.
    pub pairs: Vec<(String, String)>,

    /// Travel instant for day offset zero. The hour matters: 01:00 keeps
    /// the search-day rounding on the intended date.
    pub start: NaiveDateTime,

    /// Number of day offsets to scan per pair.
    pub days: u32,

    /// Fixed delay before each request.
    pub inter_request_delay: Duration,

    /// Lower bound of the jittered delay before each pair.
    pub inter_pair_delay_min: Duration,

    /// Upper bound of the jittered delay before each pair.
    pub inter_pair_delay_max: Duration,
}

impl CollectorConfig {
    /// Resolve every configured pair against the station table.
    ///
    /// Fails fast on the first unknown name, before any request is made.
    /// The original script silently queried station id zero instead; that
    /// defect class is rejected here at startup.
    pub fn validate(&self) -> Result<(), UnknownStation> {
        for (origin, destination) in &self.pairs {
            self.stations.resolve(origin)?;
            self.stations.resolve(destination)?;
        }
        Ok(())
    }
}

impl Default for CollectorConfig {
    /// The original script's constants: six German long-distance stations,
    /// three pairs, a 7-day horizon, 3 s between requests and 1–4 min
    /// between pairs.
    fn default() -> Self {
        Self {
            stations: default_station_table(),
            pairs: vec![
                ("Frankfurt(Main)Hbf".to_string(), "Dresden Hbf".to_string()),
                ("Berlin Hbf (tief)".to_string(), "Muenchen Hbf".to_string()),
                ("Hamburg Hbf".to_string(), "Erfurt Hbf".to_string()),
            ],
            start: chrono::NaiveDate::from_ymd_opt(2018, 7, 16)
                .and_then(|d| d.and_hms_opt(1, 0, 0))
                .expect("literal default start date is valid"),
            days: 7,
            inter_request_delay: Duration::from_secs(3),
            inter_pair_delay_min: Duration::from_secs(60),
            inter_pair_delay_max: Duration::from_secs(240),
        }
    }
}

/// The hand-maintained station table of the original collector.
pub fn default_station_table() -> StationTable {
    StationTable::from_entries([
        ("Frankfurt(Main)Hbf", 8000105),
        ("Berlin Hbf (tief)", 8098160),
        ("Hamburg Hbf", 8098549),
        ("Muenchen Hbf", 8000261),
        ("Dresden Hbf", 8010085),
        ("Erfurt Hbf", 8010101),
    ])
}
