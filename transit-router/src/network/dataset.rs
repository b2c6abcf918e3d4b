//! JSON dataset of lines and stations.
//!
//! The dataset is loaded once at startup and turned into an immutable
//! [`Network`]. It may also carry an explicit list of interchanges; that
//! list is documentation only and is checked against the interchanges
//! derived from the lines, never used in their place.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::{Line, LineId, Station, StationId};

use super::error::DatasetError;
use super::model::Network;

/// A station as stored in the dataset.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRecord {
    pub id: StationId,
    #[serde(default)]
    pub primary_name: String,
    #[serde(default)]
    pub secondary_name: Option<String>,
}

/// A line as stored in the dataset.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRecord {
    pub id: LineId,
    #[serde(alias = "displayName")]
    pub name: String,
    pub stations: Vec<StationRecord>,
}

/// A declared interchange.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterchangeRecord {
    pub station_id: StationId,
    pub lines: Vec<LineId>,
}

/// Disagreement between a declared interchange and the network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InterchangeMismatch {
    /// A declared line does not serve the declared station
    #[error("interchange {station} declares line {line}, which does not serve it")]
    LineMissingStation { station: StationId, line: LineId },

    /// A line serves a declared interchange but is not listed for it
    #[error("interchange {station} is also served by undeclared line {line}")]
    UndeclaredLine { station: StationId, line: LineId },

    /// A derived interchange has no declaration at all
    #[error("station {station} is an undeclared interchange")]
    Undeclared { station: StationId },
}

/// The raw line/station dataset.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Dataset {
    pub lines: Vec<LineRecord>,
    #[serde(default)]
    pub interchanges: Vec<InterchangeRecord>,
}

impl Dataset {
    /// Parse a dataset from JSON text.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a dataset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Build the network, rejecting empty lines and duplicate line ids.
    ///
    /// Declared interchanges that disagree with the lines are logged as
    /// warnings; they do not fail the load.
    pub fn into_network(self) -> Result<Network, DatasetError> {
        let declared = self.interchanges;
        let lines = self
            .lines
            .into_iter()
            .map(LineRecord::into_line)
            .collect::<Result<Vec<_>, _>>()?;
        let network = Network::new(lines)?;

        let mismatches = check_interchanges(&network, &declared);
        for mismatch in &mismatches {
            warn!(%mismatch, "declared interchange disagrees with line data");
        }

        info!(
            lines = network.lines().len(),
            nodes = network.node_count(),
            interchanges = network.interchanges().len(),
            mismatches = mismatches.len(),
            "network loaded"
        );

        Ok(network)
    }

    /// Compare the declared interchanges against a network.
    pub fn check_interchanges(&self, network: &Network) -> Vec<InterchangeMismatch> {
        check_interchanges(network, &self.interchanges)
    }
}

impl LineRecord {
    fn into_line(self) -> Result<Line, crate::domain::DomainError> {
        let stations = self
            .stations
            .into_iter()
            .map(|s| Station {
                id: s.id,
                primary_name: s.primary_name,
                secondary_name: s.secondary_name,
            })
            .collect();
        Line::new(self.id, self.name, stations)
    }
}

fn check_interchanges(network: &Network, declared: &[InterchangeRecord]) -> Vec<InterchangeMismatch> {
    if declared.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();

    for record in declared {
        for line in &record.lines {
            let serves = network
                .line(line)
                .is_some_and(|l| l.serves(&record.station_id));
            if !serves {
                out.push(InterchangeMismatch::LineMissingStation {
                    station: record.station_id.clone(),
                    line: line.clone(),
                });
            }
        }
        for line in network.lines_serving(&record.station_id) {
            if !record.lines.contains(line.id()) {
                out.push(InterchangeMismatch::UndeclaredLine {
                    station: record.station_id.clone(),
                    line: line.id().clone(),
                });
            }
        }
    }

    let declared_stations: HashSet<&StationId> =
        declared.iter().map(|r| &r.station_id).collect();
    for interchange in network.interchanges() {
        if !declared_stations.contains(&interchange.station_id) {
            out.push(InterchangeMismatch::Undeclared {
                station: interchange.station_id,
            });
        }
    }

    out
}
