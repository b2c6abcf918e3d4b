//! Line identifier and line types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{DomainError, Station, StationId};

/// Identifier of a line, unique across a network.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(String);

impl LineId {
    /// Create a line identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LineId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for LineId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A rail line: an ordered, non-empty sequence of stations.
///
/// Adjacency is defined by position in the sequence, not by identifier
/// equality, so a station identifier may occur more than once.
///
/// # Invariants
///
/// - `stations` is never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    id: LineId,
    name: String,
    stations: Vec<Station>,
}

impl Line {
    /// Construct a line, rejecting an empty station sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_router::domain::{Line, Station};
    ///
    /// let line = Line::new("A", "Line A", vec![
    ///     Station::new("p", "P"),
    ///     Station::new("q", "Q"),
    /// ]).unwrap();
    /// assert_eq!(line.last_station().display_name(), "Q");
    ///
    /// assert!(Line::new("B", "Line B", vec![]).is_err());
    /// ```
    pub fn new(
        id: impl Into<LineId>,
        name: impl Into<String>,
        stations: Vec<Station>,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        if stations.is_empty() {
            return Err(DomainError::EmptyLine(id));
        }
        Ok(Self {
            id,
            name: name.into(),
            stations,
        })
    }

    pub fn id(&self) -> &LineId {
        &self.id
    }

    /// Display name of the line.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stations in line order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Returns the station at an ordinal position, if in range.
    pub fn station_at(&self, index: usize) -> Option<&Station> {
        self.stations.get(index)
    }

    /// Returns the first-listed station.
    pub fn first_station(&self) -> &Station {
        // Non-empty: validated at construction
        &self.stations[0]
    }

    /// Returns the last-listed station.
    pub fn last_station(&self) -> &Station {
        &self.stations[self.stations.len() - 1]
    }

    /// Returns true if the identifier occurs anywhere on the line.
    pub fn serves(&self, station: &StationId) -> bool {
        self.stations.iter().any(|s| &s.id == station)
    }

    /// Number of stops (positions) on the line.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always false; a line has at least one station.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
