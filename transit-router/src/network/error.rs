//! Dataset loading error types.

use std::path::PathBuf;

use crate::domain::DomainError;

/// Errors that can occur when loading the line/station dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Dataset file could not be read
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dataset is not valid JSON or has the wrong shape
    #[error("dataset JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Dataset violates a network invariant
    #[error("invalid dataset: {0}")]
    Domain(#[from] DomainError),
}
