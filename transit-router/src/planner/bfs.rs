//! Breadth-first shortest-path search over the (line, station) graph.
//!
//! Every edge costs one hop, so the first time the destination is
//! discovered its predecessor chain is a minimum-hop path. The visited set
//! is keyed by node, not by ordinal position: on a loop line both
//! occurrences of a repeated station are the same node.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::{debug, trace};

use super::graph::neighbors;
use crate::domain::{Node, Path};
use crate::network::Network;

/// Find a minimum-hop path between two nodes.
///
/// Returns a single-node path if origin and destination are equal, and
/// `None` if the destination cannot be reached. Among equally short paths
/// the one found first in [`neighbors`] enumeration order wins.
pub fn find_path(network: &Network, origin: &Node, destination: &Node) -> Option<Path> {
    if origin == destination {
        return Some(Path::new(vec![origin.clone()]));
    }

    let mut visited: HashSet<Node> = HashSet::from([origin.clone()]);
    let mut predecessor: HashMap<Node, Node> = HashMap::new();
    let mut queue: VecDeque<Node> = VecDeque::from([origin.clone()]);
    let mut explored = 0usize;

    while let Some(node) = queue.pop_front() {
        explored += 1;
        trace!(%node, "BFS expanding node");

        for neighbor in neighbors(network, &node) {
            if !visited.insert(neighbor.clone()) {
                continue;
            }
            predecessor.insert(neighbor.clone(), node.clone());

            if &neighbor == destination {
                let path = reconstruct(&predecessor, neighbor);
                debug!(
                    %origin,
                    %destination,
                    hops = path.hops(),
                    explored,
                    "BFS found path"
                );
                return Some(path);
            }
            queue.push_back(neighbor);
        }
    }

    debug!(%origin, %destination, explored, "BFS exhausted without reaching destination");
    None
}

/// Walk the predecessor chain back from `last` to the origin.
fn reconstruct(predecessor: &HashMap<Node, Node>, last: Node) -> Path {
    let mut nodes = vec![last];
    while let Some(prev) = nodes.last().and_then(|n| predecessor.get(n)) {
        nodes.push(prev.clone());
    }
    nodes.reverse();
    Path::new(nodes)
}
