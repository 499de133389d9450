//! Station identifier types.

use std::collections::HashMap;
use std::fmt;

/// Error returned when a station name is not in the lookup table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown station name: {0}")]
pub struct UnknownStation(pub String);

/// A numeric station identifier as used by the price-search service.
///
/// These are the provider's seven-digit station numbers (e.g. 8000105 for
/// Frankfurt(Main)Hbf). The zero value is never a valid station; lookups
/// that would produce it fail with [`UnknownStation`] instead.
///
/// # Examples
///
/// ```
/// use fare_collector::domain::StationId;
///
/// let frankfurt = StationId(8000105);
/// assert_eq!(frankfurt.to_string(), "8000105");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationId(pub u32);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable station name → id lookup table.
///
/// The table is built once at startup and never mutated. Lookups of names
/// not in the table are an error, not a silent zero id: configured station
/// pairs are validated against this table before any request is made.
#[derive(Debug, Clone)]
pub struct StationTable {
    inner: HashMap<String, StationId>,
}

impl StationTable {
    /// Build a table from (name, id) pairs.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let inner = entries
            .into_iter()
            .map(|(name, id)| (name.into(), StationId(id)))
            .collect();
        Self { inner }
    }

    /// Look up a station id by name.
    pub fn get(&self, name: &str) -> Option<StationId> {
        self.inner.get(name).copied()
    }

    /// Look up a station id, failing with [`UnknownStation`] if absent.
    pub fn resolve(&self, name: &str) -> Result<StationId, UnknownStation> {
        self.get(name)
            .ok_or_else(|| UnknownStation(name.to_string()))
    }

    /// Number of stations in the table.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> StationTable {
        StationTable::from_entries([("Frankfurt(Main)Hbf", 8000105), ("Dresden Hbf", 8010085)])
    }

    #[test]
    fn get_known_station() {
        let t = table();
        assert_eq!(t.get("Frankfurt(Main)Hbf"), Some(StationId(8000105)));
        assert_eq!(t.get("Dresden Hbf"), Some(StationId(8010085)));
    }

    #[test]
    fn get_unknown_station() {
        let t = table();
        assert_eq!(t.get("Atlantis Hbf"), None);
    }

    #[test]
    fn resolve_unknown_station_is_an_error() {
        let t = table();
        let err = t.resolve("Atlantis Hbf").unwrap_err();
        assert_eq!(err, UnknownStation("Atlantis Hbf".to_string()));
        assert_eq!(err.to_string(), "unknown station name: Atlantis Hbf");
    }

    #[test]
    fn resolve_known_station() {
        let t = table();
        assert_eq!(t.resolve("Dresden Hbf").unwrap(), StationId(8010085));
    }

    #[test]
    fn len_and_is_empty() {
        assert_eq!(table().len(), 2);
        assert!(!table().is_empty());
        assert!(StationTable::from_entries(Vec::<(String, u32)>::new()).is_empty());
    }

    #[test]
    fn station_id_display() {
        assert_eq!(StationId(8098160).to_string(), "8098160");
    }
}
