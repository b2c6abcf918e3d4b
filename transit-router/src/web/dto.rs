//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Leg, Line, Route, Station};
use crate::network::Network;
use crate::planner::RouteErrorKind;

/// Query parameters for a route request.
///
/// All four are required; they are optional here so a missing one can be
/// reported as a bad request rather than a rejected extractor.
#[derive(Debug, Default, Deserialize)]
pub struct RouteRequest {
    pub origin_line: Option<String>,
    pub origin_station: Option<String>,
    pub dest_line: Option<String>,
    pub dest_station: Option<String>,
}

/// A station as listed on a line.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationView {
    pub id: String,
    pub primary_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_name: Option<String>,
    pub display_name: String,
}

impl StationView {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.to_string(),
            primary_name: station.primary_name.clone(),
            secondary_name: station.secondary_name.clone(),
            display_name: station.display_name().to_string(),
        }
    }
}

/// A line with its stations in order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineView {
    pub id: String,
    pub name: String,
    pub stations: Vec<StationView>,
}

impl LineView {
    pub fn from_line(line: &Line) -> Self {
        Self {
            id: line.id().to_string(),
            name: line.name().to_string(),
            stations: line.stations().iter().map(StationView::from_station).collect(),
        }
    }
}

/// Response listing all lines.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<LineView>,
}

/// One leg of a route, with display names resolved.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegResult {
    pub line_id: String,
    pub line_name: String,
    pub board_at: String,
    pub board_name: String,
    pub alight_at: String,
    pub alight_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction_terminus: Option<String>,
}

impl LegResult {
    pub fn from_leg(leg: &Leg, network: &Network) -> Self {
        Self {
            line_id: leg.line.to_string(),
            line_name: leg.line_name.clone(),
            board_at: leg.board_at.to_string(),
            board_name: network
                .station_display_name(&leg.line, &leg.board_at)
                .to_string(),
            alight_at: leg.alight_at.to_string(),
            alight_name: network
                .station_display_name(&leg.line, &leg.alight_at)
                .to_string(),
            direction_terminus: leg.direction_terminus.clone(),
        }
    }
}

/// Response for a found route.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub legs: Vec<LegResult>,
    /// Number of line changes.
    pub changes: usize,
}

impl RouteResponse {
    pub fn from_route(route: &Route, network: &Network) -> Self {
        Self {
            legs: route
                .legs
                .iter()
                .map(|leg| LegResult::from_leg(leg, network))
                .collect(),
            changes: route.changes(),
        }
    }
}

/// Error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<RouteErrorKind>,
}
