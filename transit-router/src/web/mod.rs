//! Web layer for the route finder.
//!
//! Exposes the network and route search as a small JSON API. Message
//! wording and localization are left to the client.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
