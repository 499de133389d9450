//! Train fare observation collector.
//!
//! Queries a third-party price-search service for connections between
//! station pairs over a rolling set of dates and flattens each offer into
//! one CSV row per (offer, itinerary) pairing, for fare-vs-time-to-departure
//! analysis.

pub mod collector;
pub mod domain;
pub mod psc;
