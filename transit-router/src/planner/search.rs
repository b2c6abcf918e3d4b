//! Route search entry point.
//!
//! Validates the requested endpoints, runs the BFS and compiles the
//! resulting path into legs.

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use super::bfs::find_path;
use super::legs::path_to_legs;
use crate::domain::{LineId, Node, Route, StationId};
use crate::network::Network;

/// Which end of a route request an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Origin,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Origin => f.write_str("origin"),
            Endpoint::Destination => f.write_str("destination"),
        }
    }
}

/// Stable, enumerable error kind for callers that localize messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteErrorKind {
    StationNotFound,
    NoPathFound,
}

impl RouteErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteErrorKind::StationNotFound => "station_not_found",
            RouteErrorKind::NoPathFound => "no_path_found",
        }
    }
}

/// Error from route search.
///
/// Neither kind is transient: the network is immutable, so repeating the
/// same query gives the same answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// A requested (line, station) pair does not exist. Input error.
    #[error("{endpoint} station {station} not found on line {line}")]
    StationNotFound {
        endpoint: Endpoint,
        line: LineId,
        station: StationId,
    },

    /// The destination is unreachable. Indicates a dataset defect such as
    /// a line sharing no station with the rest of the network.
    #[error("no path from {origin} to {destination}")]
    NoPathFound { origin: Node, destination: Node },
}

impl RouteError {
    pub fn kind(&self) -> RouteErrorKind {
        match self {
            RouteError::StationNotFound { .. } => RouteErrorKind::StationNotFound,
            RouteError::NoPathFound { .. } => RouteErrorKind::NoPathFound,
        }
    }
}

/// Route finder over a shared, immutable network.
///
/// Cheap to construct per request; holds only a reference.
#[derive(Debug, Clone, Copy)]
pub struct Planner<'a> {
    network: &'a Network,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a Network) -> Self {
        Self { network }
    }

    pub fn network(&self) -> &'a Network {
        self.network
    }

    /// Find a minimum-hop route between two (line, station) pairs.
    ///
    /// Identical endpoints are not rejected; they give a single leg with
    /// `board_at == alight_at` and no direction terminus.
    ///
    /// # Errors
    ///
    /// - [`RouteError::StationNotFound`] if either endpoint does not
    ///   resolve to a position on its line (the origin is checked first)
    /// - [`RouteError::NoPathFound`] if the destination is unreachable
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_router::domain::{Line, Station};
    /// use transit_router::network::Network;
    /// use transit_router::planner::Planner;
    ///
    /// let network = Network::new(vec![
    ///     Line::new("A", "Line A", vec![
    ///         Station::new("p", "P"),
    ///         Station::new("q", "Q"),
    ///         Station::new("r", "R"),
    ///     ]).unwrap(),
    ///     Line::new("B", "Line B", vec![
    ///         Station::new("q", "Q"),
    ///         Station::new("s", "S"),
    ///     ]).unwrap(),
    /// ]).unwrap();
    ///
    /// let route = Planner::new(&network).find_route("A", "p", "B", "s").unwrap();
    /// assert_eq!(route.legs.len(), 2);
    /// assert_eq!(route.changes(), 1);
    /// assert_eq!(route.legs[0].alight_at.as_str(), "q");
    /// ```
    pub fn find_route(
        &self,
        origin_line: &str,
        origin_station: &str,
        dest_line: &str,
        dest_station: &str,
    ) -> Result<Route, RouteError> {
        let origin = Node::new(origin_line, origin_station);
        let destination = Node::new(dest_line, dest_station);
        self.route_between(&origin, &destination)
    }

    /// Like [`Planner::find_route`], for already-built nodes.
    pub fn route_between(&self, origin: &Node, destination: &Node) -> Result<Route, RouteError> {
        self.validate(origin, Endpoint::Origin)?;
        self.validate(destination, Endpoint::Destination)?;

        let Some(path) = find_path(self.network, origin, destination) else {
            warn!(
                %origin,
                %destination,
                "no path between valid stations; network may be disconnected"
            );
            return Err(RouteError::NoPathFound {
                origin: origin.clone(),
                destination: destination.clone(),
            });
        };

        let route = Route::new(path_to_legs(self.network, &path));
        debug!(
            %origin,
            %destination,
            hops = path.hops(),
            legs = route.legs.len(),
            changes = route.changes(),
            "route found"
        );
        Ok(route)
    }

    /// Human-facing name for a station; falls back to the raw identifier.
    pub fn station_display_name(&self, line_id: &str, station_id: &str) -> String {
        let station = StationId::new(station_id);
        self.network
            .station_display_name(&LineId::new(line_id), &station)
            .to_string()
    }

    fn validate(&self, node: &Node, endpoint: Endpoint) -> Result<(), RouteError> {
        if self.network.contains(node) {
            return Ok(());
        }
        Err(RouteError::StationNotFound {
            endpoint,
            line: node.line.clone(),
            station: node.station.clone(),
        })
    }
}
