//! Sequential batch collection.
//!
//! Drives the scan: for each configured station pair and each day offset,
//! build a query, execute it, flatten the reply, and emit CSV rows. Delays
//! and the collection clock sit behind small traits so the loop is
//! testable without sleeping or a wall clock.

mod clock;
mod config;
mod pacing;
mod run;

pub use clock::{Clock, SystemClock};
pub use config::{CollectorConfig, default_station_table};
pub use pacing::{Pacer, TokioPacer, jittered};
pub use run::{Collector, CollectorError};
