//! Price-search (PSC) provider client.
//!
//! This module talks to the provider's fare-search service and turns its
//! loosely-typed replies into [`crate::domain::FareRecord`]s.
//!
//! Key characteristics of the service:
//! - queries go in as URL-encoded JSON in a GET `data` parameter, with a
//!   fixed client fingerprint the service checks;
//! - replies map offer ids to priced offers and itinerary ids to leg
//!   lists, with **no** referential-integrity guarantee between the two;
//! - leg lists are not guaranteed chronological, and prices use a comma
//!   decimal separator.

mod client;
mod error;
mod flatten;
mod mock;
mod query;
mod types;

pub use client::{FareSearch, PscClient, PscConfig};
pub use error::PscError;
pub use flatten::{FlattenError, flatten_offer, flatten_response};
pub use mock::MockPscClient;
pub use query::{SEARCH_SERVICE_NAME, SearchQuery, Traveller, search_day};
pub use types::{FareResponse, Itinerary, Leg, LegTime, Offer};
