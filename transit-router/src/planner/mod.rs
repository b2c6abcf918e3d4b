//! Route planner using BFS search.
//!
//! This module implements the core route-finding algorithm that answers:
//! "I'm at this station on this line - which lines do I ride, and where do
//! I change, to reach my destination?"
//!
//! The search minimizes hop count over an implicit graph of (line, station)
//! nodes, where riding one stop and changing lines each cost one hop. It is
//! not a time- or fare-weighted router.

mod bfs;
mod graph;
mod legs;
mod search;


pub use bfs::find_path;
pub use graph::neighbors;
pub use legs::{Direction, direction, direction_terminus, path_to_legs};
pub use search::{Endpoint, Planner, RouteError, RouteErrorKind};
