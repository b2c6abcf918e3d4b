//! Station identifier and station types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a station within a line's stop sequence.
///
/// The same identifier appearing on two lines marks an interchange. It may
/// also appear more than once on a single line (loop lines).
///
/// # Examples
///
/// ```
/// use transit_router::domain::StationId;
///
/// let siam = StationId::new("siam");
/// assert_eq!(siam.as_str(), "siam");
/// assert_eq!(siam, StationId::from("siam"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    /// Create a station identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StationId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for StationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stop on a line.
///
/// A station has no identity beyond its fields; it is always viewed in
/// the context of the line that lists it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub id: StationId,
    /// Name shown first to riders.
    pub primary_name: String,
    /// Alternative name (e.g. a transliteration).
    pub secondary_name: Option<String>,
}

impl Station {
    /// Create a station with just a primary name.
    pub fn new(id: impl Into<StationId>, primary_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            primary_name: primary_name.into(),
            secondary_name: None,
        }
    }

    /// Set the secondary name.
    pub fn with_secondary_name(mut self, name: impl Into<String>) -> Self {
        self.secondary_name = Some(name.into());
        self
    }

    /// Name to show for this station.
    ///
    /// Prefers the primary name, then the secondary name, and finally falls
    /// back to the raw identifier so there is always something to display.
    pub fn display_name(&self) -> &str {
        if !self.primary_name.is_empty() {
            return &self.primary_name;
        }
        match self.secondary_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => self.id.as_str(),
        }
    }
}
