//! Search graph nodes and paths.

use std::fmt;

use super::{LineId, StationId};

/// A (line, station) pair: the unit the route search operates over.
///
/// The same station identifier on two different lines gives two distinct
/// nodes, joined by an interchange edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node {
    pub line: LineId,
    pub station: StationId,
}

impl Node {
    pub fn new(line: impl Into<LineId>, station: impl Into<StationId>) -> Self {
        Self {
            line: line.into(),
            station: station.into(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.station)
    }
}

/// An ordered sequence of nodes from origin to destination.
///
/// Every consecutive pair is an edge of the network graph. A path produced
/// by the search is never empty; unreachability is reported as `None`
/// rather than as an empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path(Vec<Node>);

impl Path {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self(nodes)
    }

    /// Nodes in travel order.
    pub fn nodes(&self) -> &[Node] {
        &self.0
    }

    /// Number of edges traversed (in-line hops plus interchanges).
    pub fn hops(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn origin(&self) -> Option<&Node> {
        self.0.first()
    }

    pub fn destination(&self) -> Option<&Node> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_display() {
        assert_eq!(Node::new("A", "p").to_string(), "A:p");
    }

    #[test]
    fn same_station_on_different_lines_are_distinct() {
        assert_ne!(Node::new("A", "q"), Node::new("B", "q"));
    }

    #[test]
    fn hops_counts_edges() {
        let path = Path::new(vec![Node::new("A", "p"), Node::new("A", "q"), Node::new("B", "q")]);
        assert_eq!(path.hops(), 2);
        assert_eq!(path.origin(), Some(&Node::new("A", "p")));
        assert_eq!(path.destination(), Some(&Node::new("B", "q")));
    }

    #[test]
    fn single_node_path_has_no_hops() {
        let path = Path::new(vec![Node::new("A", "p")]);
        assert_eq!(path.hops(), 0);
        assert_eq!(path.origin(), path.destination());
    }
}
