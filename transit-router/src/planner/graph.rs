//! Neighbor generation for the implicit (line, station) graph.
//!
//! The graph is never materialized: edges are enumerated on demand from the
//! network's line sequences. Two kinds of edge exist, and both count as one
//! hop:
//!
//! - in-line: to the station immediately before or after an occurrence of
//!   the node's station on its line
//! - interchange: to the same station identifier on every other line that
//!   serves it

use crate::domain::Node;
use crate::network::Network;

/// Enumerate the graph neighbors of a node.
///
/// Order is significant, since the search's tie-break between equally
/// short paths follows it. For every occurrence of the station on the line
/// (ascending position), the backward neighbor comes before the forward
/// one; interchange neighbors follow in network order.
///
/// A station repeated on a loop line contributes neighbors from every
/// occurrence. Duplicates are not removed.
///
/// An unknown line or station yields no neighbors.
pub fn neighbors(network: &Network, node: &Node) -> Vec<Node> {
    let mut out = Vec::new();

    let Some(line) = network.line(&node.line) else {
        return out;
    };
    let stations = line.stations();

    for &idx in network.station_positions(&node.line, &node.station) {
        if idx > 0 {
            out.push(Node {
                line: node.line.clone(),
                station: stations[idx - 1].id.clone(),
            });
        }
        if let Some(next) = stations.get(idx + 1) {
            out.push(Node {
                line: node.line.clone(),
                station: next.id.clone(),
            });
        }
    }

    for other in network.lines_serving(&node.station) {
        if other.id() != &node.line {
            out.push(Node {
                line: other.id().clone(),
                station: node.station.clone(),
            });
        }
    }

    out
}
