//! Fare-search query construction.
//!
//! Builds the JSON payload the price-search service expects in its `data`
//! query parameter. Everything except the station pair and the travel
//! instant is fixed: the service checks a client fingerprint (protocol
//! version, device, OS), and the traveller profile is pinned to a single
//! adult in second class so observed prices stay comparable over time.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::domain::StationId;

/// Service name for the offer-search operation.
pub const SEARCH_SERVICE_NAME: &str = "pscangebotsuche";

/// One traveller in the search request.
#[derive(Debug, Clone, Serialize)]
pub struct Traveller {
    /// Discount card id; 0 means none.
    pub bc: u8,
    /// Traveller category; "E" is adult.
    pub typ: &'static str,
    /// Age in years.
    pub alter: u8,
}

impl Traveller {
    /// The fixed profile used for every query: one adult, age 25,
    /// no discount card.
    pub fn adult() -> Self {
        Self {
            bc: 0,
            typ: "E",
            alter: 25,
        }
    }
}

/// One fare query, serialized to the provider's exact JSON keys.
///
/// Field declaration order matches the wire order of the original client.
#[derive(Debug, Clone, Serialize)]
pub struct SearchQuery {
    /// Origin station id.
    #[serde(rename = "s")]
    pub origin: u32,

    /// Destination station id.
    #[serde(rename = "d")]
    pub destination: u32,

    /// Travel date, `DD.MM.YY`.
    #[serde(rename = "dt")]
    pub date: String,

    /// Travel time, `HH:MM`.
    #[serde(rename = "t")]
    pub time: String,

    /// Fare class.
    #[serde(rename = "c")]
    pub class: u8,

    /// Exclude express trains.
    #[serde(rename = "ohneICE")]
    pub without_express: bool,

    /// Minimum transfer time in minutes.
    #[serde(rename = "tct")]
    pub min_transfer_minutes: u32,

    /// Search window from the travel time, in minutes.
    #[serde(rename = "dur")]
    pub search_window_minutes: u32,

    /// Traveller list.
    pub travellers: Vec<Traveller>,

    /// Prefer fast routes.
    #[serde(rename = "sv")]
    pub prefer_fast_routes: bool,

    /// Protocol version token; part of the client fingerprint.
    #[serde(rename = "v")]
    pub version: &'static str,

    /// Direction flag.
    pub dir: &'static str,

    /// BahnCard-included flag.
    pub bic: bool,

    /// Device type; part of the client fingerprint.
    pub device: &'static str,

    /// OS identifier; part of the client fingerprint.
    pub os: &'static str,
}

impl SearchQuery {
    /// Build a query for one station pair and travel instant.
    ///
    /// Pure construction; cannot fail. The travel date is the search day
    /// `when` normalizes onto (see [`search_day`]), the travel time is
    /// `when`'s own time of day.
    pub fn new(origin: StationId, destination: StationId, when: NaiveDateTime) -> Self {
        let day = search_day(when);
        Self {
            origin: origin.0,
            destination: destination.0,
            date: day.format("%d.%m.%y").to_string(),
            time: when.format("%H:%M").to_string(),
            class: 2,
            without_express: false,
            min_transfer_minutes: 5,
            search_window_minutes: 1440,
            travellers: vec![Traveller::adult()],
            prefer_fast_routes: true,
            version: "16040000",
            dir: "1",
            bic: false,
            device: "HANDY",
            os: "iOS_9.3.1",
        }
    }
}

/// Normalize an instant onto the canonical search day.
///
/// Subtracts 12 hours, then rounds to the nearest 24-hour boundary (half
/// rounds up). The two steps cancel out to the instant's own calendar day,
/// which is exactly what the service expects; callers pass an early-morning
/// hour (01:00) so the rounding never drifts off the intended date.
pub fn search_day(when: NaiveDateTime) -> NaiveDate {
    let shifted = when - Duration::hours(12);
    if shifted.time().hour() >= 12 {
        shifted.date() + Duration::days(1)
    } else {
        shifted.date()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The normalization always lands on the instant's own calendar day,
        /// whatever the time of day.
        #[test]
        fn search_day_matches_calendar_day(hour in 0u32..24, minute in 0u32..60, offset in 0i64..3650) {
            let date = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap() + Duration::days(offset);
            let when = date.and_hms_opt(hour, minute, 0).unwrap();
            prop_assert_eq!(search_day(when), date);
        }
    }
}
