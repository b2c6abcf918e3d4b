//! Read-only view over the line/station dataset.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::domain::{DomainError, Line, LineId, Node, Station, StationId};

/// A station identifier served by two or more lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interchange {
    pub station_id: StationId,
    /// Lines serving the station, in network order.
    pub lines: Vec<LineId>,
}

/// An immutable rail network.
///
/// Built once at startup and shared by reference (or `Arc`) between any
/// number of concurrent queries. Interchanges are not stored as a separate
/// relation: any station identifier appearing on two or more lines is an
/// interchange between them.
///
/// Lookups are backed by identifier-keyed indexes, but every index keeps
/// the lines' input order, which the route search relies on for its
/// tie-break.
#[derive(Debug, Clone)]
pub struct Network {
    lines: Vec<Line>,
    line_index: HashMap<LineId, usize>,
    /// Per line (same order as `lines`): station id -> ascending positions.
    positions: Vec<HashMap<StationId, Vec<usize>>>,
    /// Station id -> indices of lines serving it, ascending.
    serving: HashMap<StationId, Vec<usize>>,
}

impl Network {
    /// Build a network from lines, rejecting duplicate line identifiers.
    pub fn new(lines: Vec<Line>) -> Result<Self, DomainError> {
        let mut line_index = HashMap::with_capacity(lines.len());
        let mut positions = Vec::with_capacity(lines.len());
        let mut serving: HashMap<StationId, Vec<usize>> = HashMap::new();

        for (line_idx, line) in lines.iter().enumerate() {
            if line_index.insert(line.id().clone(), line_idx).is_some() {
                return Err(DomainError::DuplicateLine(line.id().clone()));
            }

            let mut by_station: HashMap<StationId, Vec<usize>> = HashMap::new();
            for (pos, station) in line.stations().iter().enumerate() {
                by_station.entry(station.id.clone()).or_default().push(pos);
            }
            for station_id in by_station.keys() {
                serving.entry(station_id.clone()).or_default().push(line_idx);
            }
            positions.push(by_station);
        }

        Ok(Self {
            lines,
            line_index,
            positions,
            serving,
        })
    }

    /// Look up a line by identifier.
    pub fn line(&self, id: &LineId) -> Option<&Line> {
        self.line_index.get(id).map(|&idx| &self.lines[idx])
    }

    /// All lines, in network order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Every ordinal position of `station` on `line`, ascending.
    ///
    /// Empty if the line is unknown or does not serve the station; more
    /// than one position for loop lines.
    pub fn station_positions(&self, line: &LineId, station: &StationId) -> &[usize] {
        self.line_index
            .get(line)
            .and_then(|&idx| self.positions[idx].get(station))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Lowest ordinal position of `station` on `line`.
    pub fn first_position(&self, line: &LineId, station: &StationId) -> Option<usize> {
        self.station_positions(line, station).first().copied()
    }

    /// The station at an ordinal position of a line.
    pub fn station_at(&self, line: &LineId, index: usize) -> Option<&Station> {
        self.line(line).and_then(|l| l.station_at(index))
    }

    /// The first occurrence of `station` on `line`.
    pub fn station(&self, line: &LineId, station: &StationId) -> Option<&Station> {
        let pos = self.first_position(line, station)?;
        self.station_at(line, pos)
    }

    /// Returns true if the node resolves to at least one position.
    pub fn contains(&self, node: &Node) -> bool {
        !self.station_positions(&node.line, &node.station).is_empty()
    }

    /// Lines serving a station identifier, in network order.
    pub fn lines_serving<'a>(&'a self, station: &StationId) -> impl Iterator<Item = &'a Line> + 'a {
        self.serving
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(|&idx| &self.lines[idx])
    }

    /// Human-facing name for a station on a line.
    ///
    /// Never fails: if the line or station cannot be resolved, the raw
    /// station identifier is returned.
    pub fn station_display_name<'a>(&'a self, line: &LineId, station: &'a StationId) -> &'a str {
        match self.station(line, station) {
            Some(st) => st.display_name(),
            None => station.as_str(),
        }
    }

    /// Every interchange, in order of first appearance in the network.
    pub fn interchanges(&self) -> Vec<Interchange> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();

        for line in &self.lines {
            for station in line.stations() {
                if !seen.insert(&station.id) {
                    continue;
                }
                let lines: Vec<LineId> = self
                    .lines_serving(&station.id)
                    .map(|l| l.id().clone())
                    .collect();
                if lines.len() >= 2 {
                    out.push(Interchange {
                        station_id: station.id.clone(),
                        lines,
                    });
                }
            }
        }

        out
    }

    /// Total number of distinct (line, station) nodes.
    pub fn node_count(&self) -> usize {
        self.positions.iter().map(HashMap::len).sum()
    }
}
