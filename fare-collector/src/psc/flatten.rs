//! Flattening of price-search responses into fare records.
//!
//! This is the one piece of real logic in the collector: each (offer,
//! itinerary) pairing becomes one [`FareRecord`]. The itinerary's leg list
//! is not guaranteed to be chronological, so the departure endpoint is the
//! leg with the smallest UTC departure timestamp and the arrival endpoint
//! the leg with the largest UTC arrival timestamp. The timestamps are
//! zero-padded fixed-width millisecond strings, so lexicographic comparison
//! is chronological comparison within one search window.

use tracing::warn;

use crate::domain::{FareRecord, StationId};

use super::types::{FareResponse, Itinerary, Leg, Offer};

/// Record-level flattening failures.
///
/// These never abort a run: the orchestration layer logs them and skips
/// the affected (offer, itinerary id) pairing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlattenError {
    /// An offer references an itinerary id absent from the response map.
    #[error("offer references unknown itinerary: {0}")]
    MissingItinerary(String),

    /// An itinerary has no legs at all.
    #[error("itinerary {0} has no legs")]
    EmptyItinerary(String),
}

/// Flatten one (offer, itinerary) pairing into a fare record.
///
/// `collected_at` is the collection instant in epoch seconds, injected by
/// the caller so the transformation stays pure.
pub fn flatten_offer(
    origin: StationId,
    destination: StationId,
    offer: &Offer,
    itinerary_id: &str,
    itinerary: &Itinerary,
    collected_at: i64,
) -> Result<FareRecord, FlattenError> {
    if itinerary.legs.is_empty() {
        return Err(FlattenError::EmptyItinerary(itinerary_id.to_string()));
    }

    let (first, last) = select_endpoints(&itinerary.legs);

    let price = parse_price(&offer.price).unwrap_or_else(|| {
        warn!(
            itinerary = itinerary_id,
            price = %offer.price,
            "unparsable offer price, substituting 0.00"
        );
        0.0
    });

    Ok(FareRecord {
        origin,
        destination,
        departure_epoch: parse_epoch_seconds(&first.dep.utc_millis),
        arrival_epoch: parse_epoch_seconds(&last.arr.utc_millis),
        collected_epoch: collected_at,
        price,
        origin_code: first.departure_code.clone(),
        destination_code: last.arrival_code.clone(),
        origin_name: first.departure_name.clone(),
        destination_name: last.arrival_name.clone(),
        transfers: (itinerary.legs.len() - 1) as u32,
    })
}

/// Flatten a whole response: one record per (offer, present itinerary id).
///
/// Offers referencing missing itineraries and itineraries with no legs are
/// logged and skipped; they never drop other records or abort the run.
/// Records are not deduplicated when multiple offers share an itinerary.
pub fn flatten_response(
    origin: StationId,
    destination: StationId,
    response: &FareResponse,
    collected_at: i64,
) -> Vec<FareRecord> {
    let mut records = Vec::new();

    for (offer_id, offer) in &response.offers {
        for sid in &offer.sids {
            let result = match response.itineraries.get(sid) {
                Some(itinerary) => {
                    flatten_offer(origin, destination, offer, sid, itinerary, collected_at)
                }
                None => Err(FlattenError::MissingItinerary(sid.clone())),
            };

            match result {
                Ok(record) => records.push(record),
                Err(e) => warn!(offer = offer_id.as_str(), "skipping pairing: {e}"),
            }
        }
    }

    records
}

/// Pick the earliest-departing and latest-arriving legs.
///
/// Both candidates start at the first leg, so a single-leg itinerary
/// selects that leg for both ends; remaining legs are compared against the
/// running candidates. Callers must not pass an empty slice.
fn select_endpoints(legs: &[Leg]) -> (&Leg, &Leg) {
    let mut first = &legs[0];
    let mut last = &legs[0];

    for leg in &legs[1..] {
        if leg.dep.utc_millis < first.dep.utc_millis {
            first = leg;
        }
        if leg.arr.utc_millis > last.arr.utc_millis {
            last = leg;
        }
    }

    (first, last)
}

/// Parse a UTC epoch-millisecond string into epoch seconds, truncating.
///
/// Malformed input degrades to zero with a warning; timestamps are not a
/// reason to drop a record.
fn parse_epoch_seconds(millis: &str) -> i64 {
    match millis.parse::<i64>() {
        Ok(ms) => ms / 1000,
        Err(_) => {
            warn!(value = millis, "unparsable UTC timestamp, substituting 0");
            0
        }
    }
}

/// Parse a comma-decimal price string ("49,90") into an f64.
fn parse_price(price: &str) -> Option<f64> {
    price.replace(',', ".").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::psc::types::LegTime;

    fn leg(code: &str, name: &str, dest_code: &str, dest_name: &str, dep_ms: u64, arr_ms: u64) -> Leg {
        Leg {
            id: String::new(),
            departure_code: code.to_string(),
            departure_name: name.to_string(),
            arrival_code: dest_code.to_string(),
            arrival_name: dest_name.to_string(),
            train_number: String::new(),
            dep: LegTime {
                day: String::new(),
                time: String::new(),
                utc_millis: dep_ms.to_string(),
            },
            arr: LegTime {
                day: String::new(),
                time: String::new(),
                utc_millis: arr_ms.to_string(),
            },
        }
    }

    fn itinerary(legs: Vec<Leg>) -> Itinerary {
        Itinerary {
            id: "c1".to_string(),
            legs,
            ..Itinerary::default()
        }
    }

    fn offer(price: &str, sids: &[&str]) -> Offer {
        Offer {
            price: price.to_string(),
            sids: sids.iter().map(|s| s.to_string()).collect(),
            ..Offer::default()
        }
    }

    fn origin() -> StationId {
        StationId(8000105)
    }

    fn destination() -> StationId {
        StationId(8010085)
    }

    #[test]
    fn single_leg_is_both_endpoints() {
        let it = itinerary(vec![leg(
            "8000105",
            "Frankfurt(Main)Hbf",
            "8010085",
            "Dresden Hbf",
            1531724400000,
            1531739400000,
        )]);

        let record =
            flatten_offer(origin(), destination(), &offer("49,90", &["c1"]), "c1", &it, 0).unwrap();

        assert_eq!(record.origin_code, "8000105");
        assert_eq!(record.origin_name, "Frankfurt(Main)Hbf");
        assert_eq!(record.destination_code, "8010085");
        assert_eq!(record.destination_name, "Dresden Hbf");
        assert_eq!(record.departure_epoch, 1531724400);
        assert_eq!(record.arrival_epoch, 1531739400);
        assert_eq!(record.transfers, 0);
    }

    #[test]
    fn legs_out_of_order_pick_true_extremes() {
        // Second segment listed first: endpoints must come from the
        // timestamps, not the list order.
        let it = itinerary(vec![
            leg(
                "8010101",
                "Erfurt Hbf",
                "8010085",
                "Dresden Hbf",
                1531733100000,
                1531739400000,
            ),
            leg(
                "8000105",
                "Frankfurt(Main)Hbf",
                "8010101",
                "Erfurt Hbf",
                1531724400000,
                1531732200000,
            ),
        ]);

        let record =
            flatten_offer(origin(), destination(), &offer("79,90", &["c1"]), "c1", &it, 0).unwrap();

        assert_eq!(record.origin_name, "Frankfurt(Main)Hbf");
        assert_eq!(record.destination_name, "Dresden Hbf");
        assert_eq!(record.departure_epoch, 1531724400);
        assert_eq!(record.arrival_epoch, 1531739400);
        assert_eq!(record.transfers, 1);
    }

    #[test]
    fn empty_itinerary_is_rejected() {
        let it = itinerary(vec![]);
        let err = flatten_offer(origin(), destination(), &offer("9,90", &["c1"]), "c1", &it, 0)
            .unwrap_err();
        assert_eq!(err, FlattenError::EmptyItinerary("c1".to_string()));
    }

    #[test]
    fn epoch_conversion_truncates() {
        assert_eq!(parse_epoch_seconds("1531724400000"), 1531724400);
        assert_eq!(parse_epoch_seconds("1531724400999"), 1531724400);
    }

    #[test]
    fn malformed_epoch_degrades_to_zero() {
        assert_eq!(parse_epoch_seconds(""), 0);
        assert_eq!(parse_epoch_seconds("not-a-number"), 0);
    }

    #[test]
    fn comma_decimal_price_parses() {
        assert_eq!(parse_price("49,90"), Some(49.9));
        assert_eq!(parse_price("139,00"), Some(139.0));
        assert_eq!(parse_price("19.90"), Some(19.9));
    }

    #[test]
    fn price_roundtrips_to_two_decimals() {
        let mut it = itinerary(vec![leg("a", "A", "b", "B", 1000, 2000)]);
        it.id = "c1".to_string();
        let record =
            flatten_offer(origin(), destination(), &offer("49,90", &["c1"]), "c1", &it, 0).unwrap();
        assert!(record.csv_line().contains(",49.90,"));
    }

    #[test]
    fn malformed_price_yields_sentinel_record() {
        let it = itinerary(vec![leg("a", "A", "b", "B", 1000, 2000)]);
        let record =
            flatten_offer(origin(), destination(), &offer("xx,yy", &["c1"]), "c1", &it, 0).unwrap();
        assert_eq!(record.price, 0.0);
        assert!(record.csv_line().contains(",0.00,"));
    }

    #[test]
    fn collection_instant_is_stamped() {
        let it = itinerary(vec![leg("a", "A", "b", "B", 1000, 2000)]);
        let record = flatten_offer(
            origin(),
            destination(),
            &offer("9,90", &["c1"]),
            "c1",
            &it,
            1530000000,
        )
        .unwrap();
        assert_eq!(record.collected_epoch, 1530000000);
    }

    #[test]
    fn missing_itinerary_is_skipped_not_fatal() {
        let mut response = FareResponse::default();
        response
            .offers
            .insert("o1".to_string(), offer("49,90", &["a", "b"]));
        response.itineraries.insert(
            "a".to_string(),
            itinerary(vec![leg("x", "X", "y", "Y", 1000, 2000)]),
        );
        // "b" is absent from the map.

        let records = flatten_response(origin(), destination(), &response, 0);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn record_count_is_present_sids_per_offer() {
        let mut response = FareResponse::default();
        response
            .offers
            .insert("o1".to_string(), offer("49,90", &["a", "b"]));
        response
            .offers
            .insert("o2".to_string(), offer("29,90", &["a"]));
        response.itineraries.insert(
            "a".to_string(),
            itinerary(vec![leg("x", "X", "y", "Y", 1000, 2000)]),
        );
        response.itineraries.insert(
            "b".to_string(),
            itinerary(vec![leg("x", "X", "y", "Y", 3000, 4000)]),
        );

        // o1 contributes 2 records, o2 contributes 1: shared itinerary "a"
        // is not deduplicated.
        let records = flatten_response(origin(), destination(), &response, 0);
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn empty_itinerary_in_response_is_skipped() {
        let mut response = FareResponse::default();
        response
            .offers
            .insert("o1".to_string(), offer("49,90", &["a"]));
        response.itineraries.insert("a".to_string(), itinerary(vec![]));

        let records = flatten_response(origin(), destination(), &response, 0);
        assert!(records.is_empty());
    }
}
