//! Price-search API response DTOs.
//!
//! These types map directly to the provider's price-search JSON. The
//! response is loosely typed: almost everything is a string, fields come
//! and go between protocol versions, and offer → itinerary references are
//! not guaranteed to resolve. Every field defaults to its empty value when
//! absent, and unknown fields are ignored.

use std::collections::HashMap;

use serde::Deserialize;

/// A departure or arrival instant, in the provider's three encodings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegTime {
    /// Local day, `DD.MM.YY`.
    #[serde(rename = "d", default)]
    pub day: String,

    /// Local time of day, `HH:MM`.
    #[serde(rename = "t", default)]
    pub time: String,

    /// UTC epoch milliseconds as a zero-padded decimal string.
    ///
    /// Within one 24-hour search window these are fixed-width, so
    /// lexicographic comparison equals chronological comparison. The
    /// flattener relies on this to pick itinerary endpoints.
    #[serde(rename = "m", default)]
    pub utc_millis: String,
}

/// A single train segment within an itinerary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Leg {
    /// Provider-internal leg id.
    #[serde(rename = "tid", default)]
    pub id: String,

    /// Departure station code.
    #[serde(rename = "s", default)]
    pub departure_code: String,

    /// Departure station name.
    #[serde(rename = "sn", default)]
    pub departure_name: String,

    /// Arrival station code.
    #[serde(rename = "d", default)]
    pub arrival_code: String,

    /// Arrival station name.
    #[serde(rename = "dn", default)]
    pub arrival_name: String,

    /// Train number (e.g. "ICE 1537").
    #[serde(rename = "tn", default)]
    pub train_number: String,

    /// Departure instant.
    #[serde(default)]
    pub dep: LegTime,

    /// Arrival instant.
    #[serde(default)]
    pub arr: LegTime,
}

/// One way to travel between the queried stations.
///
/// Legs appear in response order, which is **not** guaranteed to be
/// chronological for multi-leg itineraries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Itinerary {
    /// The itinerary id offers reference via their `sids` list.
    #[serde(rename = "sid", default)]
    pub id: String,

    /// Travel date, `DD.MM.YY`.
    #[serde(rename = "dt", default)]
    pub date: String,

    /// Total duration, `H:MM`.
    #[serde(rename = "dur", default)]
    pub duration: String,

    /// Provider's own transfer count, as a string. The flattener derives
    /// the count from the leg list instead of trusting this.
    #[serde(rename = "nt", default)]
    pub transfer_count: String,

    /// The train legs making up this itinerary.
    #[serde(rename = "trains", default)]
    pub legs: Vec<Leg>,
}

/// A priced fare bundle referencing one or more candidate itineraries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Offer {
    /// Offer type token.
    #[serde(rename = "t", default)]
    pub kind: String,

    /// Fare class.
    #[serde(rename = "c", default)]
    pub class: String,

    /// Price with a comma decimal separator (e.g. "49,90").
    #[serde(rename = "p", default)]
    pub price: String,

    /// Ticket type token.
    #[serde(rename = "tt", default)]
    pub ticket_type: String,

    /// Human-readable offer name.
    #[serde(rename = "angnm", default)]
    pub name: String,

    /// Itinerary ids this offer is valid for. Foreign keys into
    /// [`FareResponse::itineraries`] with no referential-integrity
    /// guarantee: an id here may be absent from the map.
    #[serde(default)]
    pub sids: Vec<String>,
}

/// The decoded price-search reply.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FareResponse {
    /// Offers keyed by opaque provider-generated id.
    #[serde(rename = "angebote", default)]
    pub offers: HashMap<String, Offer>,

    /// Itineraries keyed by the id offers reference.
    #[serde(rename = "verbindungen", default)]
    pub itineraries: HashMap<String, Itinerary>,
}
