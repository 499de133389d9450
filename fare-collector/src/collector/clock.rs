//! Injectable collection clock.

use chrono::Utc;

/// Source of the collection timestamp stamped onto each record.
///
/// Injected so the flattening pipeline can be tested with a fixed instant.
pub trait Clock {
    /// Current instant in epoch seconds UTC.
    fn now_epoch(&self) -> i64;
}

/// Wall-clock implementation used by the real collector.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch(&self) -> i64 {
        Utc::now().timestamp()
    }
}
