//! The flattened fare observation record.

use super::station::StationId;

/// One fare observation, derived from a single (offer, itinerary) pairing.
///
/// This is the analysis-ready output unit: it pairs a price with the
/// departure/arrival endpoints of one itinerary and the instant the
/// observation was collected, so downstream consumers can plot fare
/// against time-to-departure.
#[derive(Debug, Clone, PartialEq)]
pub struct FareRecord {
    /// Queried origin station id.
    pub origin: StationId,
    /// Queried destination station id.
    pub destination: StationId,
    /// Departure of the earliest leg, epoch seconds UTC.
    pub departure_epoch: i64,
    /// Arrival of the latest leg, epoch seconds UTC.
    pub arrival_epoch: i64,
    /// When this observation was collected, epoch seconds UTC.
    pub collected_epoch: i64,
    /// Offer price in EUR. 0.0 when the provider's price string was
    /// unparsable (the record is still emitted).
    pub price: f64,
    /// Station code of the first leg's departure.
    pub origin_code: String,
    /// Station code of the last leg's arrival.
    pub destination_code: String,
    /// Station name of the first leg's departure.
    pub origin_name: String,
    /// Station name of the last leg's arrival.
    pub destination_name: String,
    /// Number of transfers (legs minus one; zero for a direct connection).
    pub transfers: u32,
}

impl FareRecord {
    /// Render the record as one comma-separated line (no trailing newline).
    ///
    /// Field order: origin id, destination id, departure epoch, arrival
    /// epoch, collection epoch, price (two decimal places), origin code,
    /// destination code, origin name, destination name, transfer count.
    pub fn csv_line(&self) -> String {
        format!(
            "{},{},{},{},{},{:.2},{},{},{},{},{}",
            self.origin,
            self.destination,
            self.departure_epoch,
            self.arrival_epoch,
            self.collected_epoch,
            self.price,
            self.origin_code,
            self.destination_code,
            self.origin_name,
            self.destination_name,
            self.transfers,
        )
    }
}
