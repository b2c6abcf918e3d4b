//! Compile a node path into ride legs.
//!
//! Consecutive nodes on the same line collapse into one leg. Each leg that
//! actually rides somewhere is annotated with the terminus it heads
//! towards, which is what riders read off the platform signs.

use crate::domain::{Leg, LineId, Node, Path, StationId};
use crate::network::Network;

/// Direction of travel along a line's station sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the first-listed station.
    TowardsFirst,
    /// Towards the last-listed station.
    TowardsLast,
}

/// Collapse a path into legs, one per maximal same-line run.
pub fn path_to_legs(network: &Network, path: &Path) -> Vec<Leg> {
    path.nodes()
        .chunk_by(|a, b| a.line == b.line)
        .map(|run| compile_leg(network, run))
        .collect()
}

fn compile_leg(network: &Network, run: &[Node]) -> Leg {
    let board = &run[0];
    let alight = &run[run.len() - 1];
    let line = network.line(&board.line);

    // Direction comes from the hop right after boarding, not from the
    // alighting station, which may recur elsewhere on a loop line.
    let direction_terminus = run
        .get(1)
        .and_then(|next| direction_terminus(network, &board.line, &board.station, &next.station));

    Leg {
        line: board.line.clone(),
        line_name: line.map_or_else(|| board.line.to_string(), |l| l.name().to_string()),
        board_at: board.station.clone(),
        alight_at: alight.station.clone(),
        direction_terminus,
    }
}

/// Display name of the terminus reached by travelling from `from` to the
/// adjacent station `next` on `line`.
pub fn direction_terminus(
    network: &Network,
    line: &LineId,
    from: &StationId,
    next: &StationId,
) -> Option<String> {
    let l = network.line(line)?;
    let terminus = match direction(network, line, from, next) {
        Direction::TowardsFirst => l.first_station(),
        Direction::TowardsLast => l.last_station(),
    };
    Some(terminus.display_name().to_string())
}

/// Direction of the hop from `from` to the adjacent station `next`.
///
/// When `from` occurs more than once on the line, the lowest position
/// adjacent to `next` decides; if `next` sits on both sides of it, the
/// backward reading wins. Stations that are not adjacent at all read as
/// forward travel.
pub fn direction(network: &Network, line: &LineId, from: &StationId, next: &StationId) -> Direction {
    let next_positions = network.station_positions(line, next);

    for &fi in network.station_positions(line, from) {
        for &ti in next_positions {
            if ti + 1 == fi {
                return Direction::TowardsFirst;
            }
            if ti == fi + 1 {
                return Direction::TowardsLast;
            }
        }
    }

    Direction::TowardsLast
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Line, Station};

    fn line(id: &str, stations: &[&str]) -> Line {
        let stations = stations
            .iter()
            .map(|s| Station::new(*s, format!("{s}-name")))
            .collect();
        Line::new(id, format!("Line {id}"), stations).unwrap()
    }

    fn path(nodes: &[(&str, &str)]) -> Path {
        Path::new(nodes.iter().map(|(l, s)| Node::new(*l, *s)).collect())
    }

    fn lid(s: &str) -> LineId {
        LineId::new(s)
    }

    fn sid(s: &str) -> StationId {
        StationId::new(s)
    }

    #[test]
    fn empty_path_has_no_legs() {
        let net = Network::new(vec![line("A", &["p"])]).unwrap();
        assert!(path_to_legs(&net, &Path::new(vec![])).is_empty());
    }

    #[test]
    fn single_line_forward() {
        let net = Network::new(vec![line("A", &["p", "q", "r", "s"])]).unwrap();
        let legs = path_to_legs(&net, &path(&[("A", "p"), ("A", "q"), ("A", "r")]));

        assert_eq!(legs.len(), 1);
        assert_eq!(legs[0].line, lid("A"));
        assert_eq!(legs[0].line_name, "Line A");
        assert_eq!(legs[0].board_at, sid("p"));
        assert_eq!(legs[0].alight_at, sid("r"));
        assert_eq!(legs[0].direction_terminus.as_deref(), Some("s-name"));
    }

    #[test]
    fn single_line_backward() {
        let net = Network::new(vec![line("A", &["p", "q", "r", "s"])]).unwrap();
        let legs = path_to_legs(&net, &path(&[("A", "r"), ("A", "q")]));
        assert_eq!(legs[0].direction_terminus.as_deref(), Some("p-name"));
    }

    #[test]
    fn transfer_splits_legs() {
        let net = Network::new(vec![line("A", &["p", "q", "r"]), line("B", &["q", "s"])]).unwrap();
        let legs = path_to_legs(
            &net,
            &path(&[("A", "p"), ("A", "q"), ("B", "q"), ("B", "s")]),
        );

        assert_eq!(legs.len(), 2);
        assert_eq!((legs[0].board_at.as_str(), legs[0].alight_at.as_str()), ("p", "q"));
        assert_eq!(legs[0].direction_terminus.as_deref(), Some("r-name"));
        assert_eq!(legs[1].line, lid("B"));
        assert_eq!((legs[1].board_at.as_str(), legs[1].alight_at.as_str()), ("q", "s"));
        assert_eq!(legs[1].direction_terminus.as_deref(), Some("s-name"));
    }

    #[test]
    fn interchange_touch_has_no_terminus() {
        let net = Network::new(vec![
            line("A", &["p", "q"]),
            line("B", &["q"]),
            line("C", &["q", "t"]),
        ])
        .unwrap();
        let legs = path_to_legs(
            &net,
            &path(&[("A", "p"), ("A", "q"), ("B", "q"), ("C", "q"), ("C", "t")]),
        );

        assert_eq!(legs.len(), 3);
        assert_eq!(legs[1].board_at, legs[1].alight_at);
        assert!(legs[1].direction_terminus.is_none());
        assert!(!legs[1].is_ride());
    }

    #[test]
    fn single_node_path_is_one_leg_without_terminus() {
        let net = Network::new(vec![line("A", &["p", "q"])]).unwrap();
        let legs = path_to_legs(&net, &path(&[("A", "p")]));
        assert_eq!(legs.len(), 1);
        assert_eq!(legs[0].board_at, legs[0].alight_at);
        assert!(legs[0].direction_terminus.is_none());
    }

    #[test]
    fn direction_uses_next_hop_not_alight() {
        // Alighting at x, which also sits at position 0; the first hop
        // (b -> c) is what decides.
        let net = Network::new(vec![line("L", &["x", "a", "b", "c", "x", "end"])]).unwrap();
        let legs = path_to_legs(&net, &path(&[("L", "b"), ("L", "c"), ("L", "x")]));
        assert_eq!(legs[0].direction_terminus.as_deref(), Some("end-name"));
    }

    #[test]
    fn loop_board_uses_lowest_adjacent_position() {
        // x at 1 and 4; boarding at x towards c only matches position 4
        // (c at 3), which is backward travel.
        let net = Network::new(vec![line("L", &["a", "x", "b", "c", "x", "d"])]).unwrap();
        assert_eq!(
            direction(&net, &lid("L"), &sid("x"), &sid("c")),
            Direction::TowardsFirst
        );
        // Towards b: position 1 -> 2 is forward.
        assert_eq!(
            direction(&net, &lid("L"), &sid("x"), &sid("b")),
            Direction::TowardsLast
        );
    }

    #[test]
    fn ambiguous_loop_hop_reads_backward() {
        // y at 1 has x on both sides.
        let net = Network::new(vec![line("L", &["x", "y", "x"])]).unwrap();
        assert_eq!(
            direction(&net, &lid("L"), &sid("y"), &sid("x")),
            Direction::TowardsFirst
        );
    }

    #[test]
    fn non_adjacent_reads_forward() {
        let net = Network::new(vec![line("A", &["p", "q", "r"])]).unwrap();
        assert_eq!(
            direction(&net, &lid("A"), &sid("r"), &sid("p")),
            Direction::TowardsLast
        );
    }

    #[test]
    fn unknown_line_name_falls_back_to_id() {
        let net = Network::new(vec![line("A", &["p"])]).unwrap();
        let legs = path_to_legs(&net, &path(&[("Z", "p")]));
        assert_eq!(legs[0].line_name, "Z");
    }
}
