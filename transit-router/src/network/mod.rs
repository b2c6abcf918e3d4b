//! Network model and dataset loading.
//!
//! The network is built once from a JSON dataset and never mutated, so it
//! can be shared freely between concurrent route queries.

mod dataset;
mod error;
mod model;

pub use dataset::{Dataset, InterchangeMismatch, InterchangeRecord, LineRecord, StationRecord};
pub use error::DatasetError;
pub use model::{Interchange, Network};
