//! Domain types for the fare collector.
//!
//! This module contains the validated types the collector works with: the
//! immutable station lookup table and the flattened observation record.
//! Provider-shaped DTOs live in [`crate::psc`]; everything here is already
//! checked at construction time.

mod record;
mod station;

pub use record::FareRecord;
pub use station::{StationId, StationTable, UnknownStation};
