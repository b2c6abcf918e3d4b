//! Ride segment type.
//!
//! A `Leg` is one uninterrupted ride on a single line: a maximal run of
//! consecutive path nodes that share a line.

use super::{LineId, StationId};

/// A leg of a route (one line).
///
/// `direction_terminus` is the display name of the line's end station in
/// the direction of travel. It is absent when the leg is a single node,
/// i.e. the rider only touches the line while changing platforms, or when
/// origin and destination coincide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    pub line: LineId,
    pub line_name: String,
    pub board_at: StationId,
    pub alight_at: StationId,
    pub direction_terminus: Option<String>,
}

impl Leg {
    /// Returns true if the rider actually travels on this leg.
    pub fn is_ride(&self) -> bool {
        self.direction_terminus.is_some()
    }
}

/// An ordered list of legs from origin to destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub legs: Vec<Leg>,
}

impl Route {
    pub fn new(legs: Vec<Leg>) -> Self {
        Self { legs }
    }

    /// Number of line changes: one fewer than the number of legs.
    pub fn changes(&self) -> usize {
        self.legs.len().saturating_sub(1)
    }

    /// Returns true if no change of line is needed.
    pub fn is_direct(&self) -> bool {
        self.legs.len() <= 1
    }
}
