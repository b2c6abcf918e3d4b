//! Domain types for the transit route finder.
//!
//! This module contains the core model types: lines, stations, search
//! nodes, paths and the legs compiled from them. Types enforce their
//! invariants at construction time, so code that receives them can trust
//! their validity.

mod error;
mod leg;
mod line;
mod node;
mod station;

pub use error::DomainError;
pub use leg::{Leg, Route};
pub use line::{Line, LineId};
pub use node::{Node, Path};
pub use station::{Station, StationId};
